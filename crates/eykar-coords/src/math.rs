//! Deterministic integer math.
//!
//! No floating point anywhere: results must be identical on every machine
//! that replays a registration history.

use crate::error::{Error, Result};
use crate::wide::U256;

/// Largest `r` such that `r * r <= n`.
///
/// Bit-by-bit refinement from the top bit of a 128-bit root down. Always
/// runs exactly 128 rounds. Each candidate square is an exact 256-bit
/// product, so nothing can overflow.
pub fn floor_sqrt(n: U256) -> u128 {
    let mut root: u128 = 0;
    for bit in (0..128).rev() {
        let candidate = root | (1u128 << bit);
        if U256::widening_mul(candidate, candidate) <= n {
            root = candidate;
        }
    }
    root
}

/// [`floor_sqrt`] for values that already fit in 128 bits.
pub fn floor_sqrt_u128(n: u128) -> u64 {
    // sqrt(2^128 - 1) < 2^64
    floor_sqrt(U256::from_u128(n)) as u64
}

/// Floor Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// Deltas are taken as exact unsigned magnitudes and squared into 256 bits.
/// Only the sum of the two squares can exceed that, when both deltas are
/// close to 2^128; it is reported as [`Error::ArithmeticOverflow`] instead
/// of wrapping.
pub fn distance(x1: i128, y1: i128, x2: i128, y2: i128) -> Result<u128> {
    let dx = x1.abs_diff(x2);
    let dy = y1.abs_diff(y2);
    let squared = U256::widening_mul(dx, dx)
        .checked_add(&U256::widening_mul(dy, dy))
        .ok_or(Error::ArithmeticOverflow {
            operation: "squared distance",
        })?;
    Ok(floor_sqrt(squared))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_floor_root(n: U256, r: u128) -> bool {
        let below = U256::widening_mul(r, r) <= n;
        let above = match r.checked_add(1) {
            Some(next) => U256::widening_mul(next, next) > n,
            None => true,
        };
        below && above
    }

    #[test]
    fn sqrt_small_values() {
        let cases: [(u128, u128); 10] = [
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 2),
            (8, 2),
            (9, 3),
            (15, 3),
            (16, 4),
            (20480, 143),
        ];
        for (n, expected) in cases {
            assert_eq!(floor_sqrt(U256::from_u128(n)), expected, "floor_sqrt({n})");
        }
    }

    #[test]
    fn sqrt_perfect_squares_and_neighbours() {
        for r in [2u128, 3, 1000, 1 << 40, u64::MAX as u128, 1 << 100] {
            let sq = U256::widening_mul(r, r);
            assert_eq!(floor_sqrt(sq), r);

            // r^2 - 1 via (r-1)^2 + 2(r-1)
            let prev = U256::widening_mul(r - 1, r - 1)
                .checked_add(&U256::widening_mul(2, r - 1))
                .unwrap();
            assert!(prev < sq);
            assert_eq!(floor_sqrt(prev), r - 1);
        }
    }

    #[test]
    fn sqrt_full_range() {
        assert_eq!(floor_sqrt(U256::MAX), u128::MAX);
        assert!(is_floor_root(U256::MAX, floor_sqrt(U256::MAX)));

        let sq = U256::widening_mul(u128::MAX, u128::MAX);
        assert_eq!(floor_sqrt(sq), u128::MAX);

        let below_top = U256::from_halves(u128::MAX, 0);
        assert!(is_floor_root(below_top, floor_sqrt(below_top)));
    }

    #[test]
    fn sqrt_u128_convenience() {
        assert_eq!(floor_sqrt_u128(0), 0);
        assert_eq!(floor_sqrt_u128(99), 9);
        assert_eq!(floor_sqrt_u128(u128::MAX), u64::MAX);
    }

    #[test]
    fn distance_along_an_axis_is_the_delta() {
        assert_eq!(distance(10, 1, 100, 1), Ok(90));
        assert_eq!(distance(5, -20, 5, 30), Ok(50));
    }

    #[test]
    fn distance_diagonal() {
        // floor(sqrt(128^2 + 64^2)) = floor(sqrt(20480)) = 143
        assert_eq!(distance(64, -32, -64, 32), Ok(143));
        assert_eq!(distance(0, 0, 3, 4), Ok(5));
        assert_eq!(distance(0, 0, 1, 1), Ok(1));
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance(i128::MIN, i128::MAX, i128::MIN, i128::MAX), Ok(0));
        assert_eq!(distance(-7, 3, -7, 3), Ok(0));
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [((1, 2), (-8, 40)), ((i128::MIN, 0), (0, 99))];
        for ((a, b), (c, d)) in pairs {
            assert_eq!(distance(a, b, c, d), distance(c, d, a, b));
        }
    }

    #[test]
    fn distance_across_full_axis_fits() {
        // dx = 2^128 - 1 on one axis only: its square fits in 256 bits
        assert_eq!(distance(i128::MIN, 0, i128::MAX, 0), Ok(u128::MAX));
    }

    #[test]
    fn distance_overflow_is_rejected() {
        assert_eq!(
            distance(i128::MIN, i128::MIN, i128::MAX, i128::MAX),
            Err(Error::ArithmeticOverflow {
                operation: "squared distance"
            })
        );
    }
}
