//! Property tests for the codec, the integer math and the spiral.

use std::collections::HashSet;

use eykar_coords::{
    codec, coord_to_spiral, distance, find_next_location_on_spiral, floor_sqrt, Coordinate,
    Error, HalfWord, LocationWord, Pitch, SpiralIndex, U256,
};
use proptest::prelude::*;

fn any_coordinate() -> impl Strategy<Value = Coordinate> {
    (any::<i128>(), any::<i128>()).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn any_word() -> impl Strategy<Value = LocationWord> {
    any::<[u8; 32]>().prop_map(|bytes| LocationWord::from_be_bytes(&bytes))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    #[test]
    fn decode_inverts_encode(c in any_coordinate()) {
        prop_assert_eq!(codec::decode(codec::encode(c)), c);
    }

    #[test]
    fn encode_inverts_decode(w in any_word()) {
        prop_assert_eq!(codec::encode(codec::decode(w)), w);
    }

    #[test]
    fn merge_inverts_split(w in any_word()) {
        let (high, low) = codec::split(w);
        prop_assert_eq!(codec::merge(high, low), w);
    }

    #[test]
    fn split_inverts_merge(high in any::<u128>(), low in any::<u128>()) {
        let w = codec::merge(HalfWord(high), HalfWord(low));
        prop_assert_eq!(codec::split(w), (HalfWord(high), HalfWord(low)));
    }

    #[test]
    fn hex_text_round_trips(w in any_word()) {
        let text = w.to_hex();
        prop_assert_eq!(text.len(), 66);
        prop_assert_eq!(LocationWord::from_hex(&text), Ok(w));
    }

    #[test]
    fn hex_of_wrong_length_is_rejected(len in 0usize..80) {
        prop_assume!(len != 64);
        let text = "a".repeat(len);
        prop_assert_eq!(
            LocationWord::from_hex(&text),
            Err(Error::MalformedWord { expected: 64, len })
        );
    }

    #[test]
    fn floor_sqrt_brackets_input(limbs in any::<[u64; 4]>()) {
        let n = U256 { limbs };
        let r = floor_sqrt(n);
        prop_assert!(U256::widening_mul(r, r) <= n);
        if let Some(next) = r.checked_add(1) {
            prop_assert!(U256::widening_mul(next, next) > n);
        }
    }

    #[test]
    fn floor_sqrt_of_square_is_exact(r in any::<u128>()) {
        prop_assert_eq!(floor_sqrt(U256::widening_mul(r, r)), r);
    }

    #[test]
    fn distance_to_self_is_zero(c in any_coordinate()) {
        prop_assert_eq!(distance(c.x, c.y, c.x, c.y), Ok(0));
    }

    #[test]
    fn distance_is_symmetric(a in any_coordinate(), b in any_coordinate()) {
        prop_assert_eq!(distance(a.x, a.y, b.x, b.y), distance(b.x, b.y, a.x, a.y));
    }

    #[test]
    fn distance_on_an_axis_is_the_delta(x1 in any::<i128>(), x2 in any::<i128>(), y in any::<i128>()) {
        prop_assert_eq!(distance(x1, y, x2, y), Ok(x1.abs_diff(x2)));
    }

    #[test]
    fn distance_never_overflows_for_small_coordinates(
        a in (any::<i64>(), any::<i64>()),
        b in (any::<i64>(), any::<i64>()),
    ) {
        let d = distance(a.0.into(), a.1.into(), b.0.into(), b.1.into());
        prop_assert!(d.is_ok());
    }

    #[test]
    fn distance_sits_between_chebyshev_and_manhattan(a in any_coordinate(), b in any_coordinate()) {
        if let Ok(d) = a.distance_to(&b) {
            let dx = a.x.abs_diff(b.x);
            let dy = a.y.abs_diff(b.y);
            prop_assert!(d >= dx.max(dy));
            if let Some(manhattan) = dx.checked_add(dy) {
                prop_assert!(d <= manhattan);
            }
        }
    }

    #[test]
    fn spiral_inverse_round_trips(index in any::<u64>(), p in 1u128..1_000_000) {
        let pitch = Pitch::new(p).unwrap();
        let c = find_next_location_on_spiral(index.into(), p).unwrap();
        prop_assert_eq!(coord_to_spiral(c, pitch), Ok(SpiralIndex(index.into())));
    }

    #[test]
    fn spiral_points_sit_on_their_ring(index in any::<u64>(), p in 1u128..1_000_000) {
        let i = SpiralIndex(index.into());
        let c = find_next_location_on_spiral(i.value(), p).unwrap();
        prop_assert_eq!(c.chebyshev_radius(), i.ring() * p);
        prop_assert_eq!(c.x.unsigned_abs() % p, 0);
        prop_assert_eq!(c.y.unsigned_abs() % p, 0);
    }

    #[test]
    fn spiral_ring_never_shrinks(index in any::<u64>()) {
        let a = SpiralIndex(index.into());
        let b = SpiralIndex(u128::from(index) + 1);
        prop_assert!(b.ring() >= a.ring());
    }
}

#[test]
fn first_25_indices_are_distinct_and_outward() {
    for p in [1u128, 3, 10] {
        let mut seen = HashSet::new();
        let mut prev = 0;
        for i in 0..25u128 {
            let c = find_next_location_on_spiral(i, p).unwrap();
            assert!(seen.insert(c), "pitch {p}: index {i} repeats {c}");
            let ring = c.chebyshev_radius() / p;
            assert!(ring >= prev);
            prev = ring;
        }
    }
}

#[test]
fn concrete_spiral_scenarios() {
    let cases = [
        (0, (0, 0)),
        (1, (3, 3)),
        (4, (0, -3)),
        (8, (0, 3)),
        (9, (6, 6)),
    ];
    for (index, (x, y)) in cases {
        assert_eq!(
            find_next_location_on_spiral(index, 3),
            Ok(Coordinate::new(x, y)),
            "index {index}"
        );
    }
}

#[test]
fn concrete_codec_scenario() {
    let word = codec::encode(Coordinate::new(1, -1));
    let (high, low) = codec::split(word);
    assert_eq!(high.to_be_bytes(), 1i128.to_be_bytes());
    assert_eq!(low.to_be_bytes(), [0xff; 16]);
    assert_eq!(codec::decode(word), Coordinate::new(1, -1));
}

#[test]
fn concrete_distance_scenarios() {
    assert_eq!(distance(10, 1, 100, 1), Ok(90));
    assert_eq!(distance(64, -32, -64, 32), Ok(143));
}
