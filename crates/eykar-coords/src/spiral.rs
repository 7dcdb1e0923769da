//! Square spawn spiral.
//!
//! Registration order is turned into a location by walking square rings
//! outward from the origin:
//!
//! - Ring 0: just the origin (1 slot)
//! - Ring r > 0: the boundary of the square at Chebyshev radius `r * pitch`,
//!   8r slots
//!
//! Exactly `(2r + 1)^2` slots cover rings `0..=r`, so the ring of an index
//! falls out of an integer square root instead of a walk.
//!
//! # Ring traversal
//!
//! Each ring starts at its north-east corner and runs clockwise in 8 segments
//! of `r` steps:
//!
//! ```text
//!  6 6 7 7 0      segment  start     step
//!  5 . . . 0      0        (r, r)    (0, -1)
//!  5 . + . 1      1        (r, 0)    (0, -1)
//!  4 . . . 1      2        (r, -r)   (-1, 0)
//!  4 3 3 2 2      3        (0, -r)   (-1, 0)
//!                 4        (-r, -r)  (0, 1)
//!                 5        (-r, 0)   (0, 1)
//!                 6        (-r, r)   (1, 0)
//!                 7        (0, r)    (1, 0)
//! ```
//!
//! Pitch scales the whole lattice so that fixed-size claims around adjacent
//! locations never overlap.

use std::num::NonZeroU128;

use tracing::trace;

use crate::error::{Error, Result};
use crate::math::floor_sqrt;
use crate::wide::{checked_signed, U256};
use crate::Coordinate;

/// Segments per ring.
pub const SEGMENTS_PER_RING: u128 = 8;

/// Start corner of each segment, in ring units.
const CORNERS: [(i128, i128); 8] = [
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
    (0, 1),   // N
];

/// Step direction along each segment.
const DIRECTIONS: [(i128, i128); 8] = [
    (0, -1),
    (0, -1),
    (-1, 0),
    (-1, 0),
    (0, 1),
    (0, 1),
    (1, 0),
    (1, 0),
];

/// Spacing between adjacent lattice points. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u128", into = "u128"))]
pub struct Pitch(NonZeroU128);

impl Pitch {
    /// Validate a raw pitch. Zero is [`Error::InvalidPitch`].
    pub fn new(value: u128) -> Result<Self> {
        NonZeroU128::new(value).map(Self).ok_or(Error::InvalidPitch)
    }

    /// The raw value.
    #[inline]
    pub const fn get(self) -> u128 {
        self.0.get()
    }
}

impl TryFrom<u128> for Pitch {
    type Error = Error;

    fn try_from(value: u128) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Pitch> for u128 {
    fn from(pitch: Pitch) -> Self {
        pitch.get()
    }
}

/// A spiral index - the registration order of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u128);

impl SpiralIndex {
    /// Origin slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u128) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-8
    /// Ring 2: indices 9-24
    /// Ring r: indices (2r-1)^2 through (2r+1)^2 - 1
    pub fn ring(&self) -> u128 {
        if self.0 == 0 {
            return 0;
        }
        // floor_sqrt(index) is 2r-1 or 2r
        (floor_sqrt(U256::from_u128(self.0)) + 1) / 2
    }

    /// Offset within the ring (0 to 8r-1 for ring r > 0).
    pub fn offset_in_ring(&self) -> u128 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        // ring <= 2^63 here, so the side length squared stays below 2^128
        let side = 2 * ring - 1;
        self.0 - side * side
    }
}

impl From<u128> for SpiralIndex {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u128 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

/// Total number of slots in ring r, or `None` if it exceeds u128.
///
/// - Ring 0: 1 slot (origin)
/// - Ring r > 0: 8r slots
#[inline]
pub const fn slots_in_ring(ring: u128) -> Option<u128> {
    if ring == 0 {
        Some(1)
    } else {
        ring.checked_mul(SEGMENTS_PER_RING)
    }
}

/// Total slots through ring r (inclusive), or `None` if it exceeds u128.
///
/// Formula: 1 + 4r(r+1) = (2r+1)^2
#[inline]
pub const fn total_slots_through(ring: u128) -> Option<u128> {
    let side = match ring.checked_mul(2) {
        Some(double) => match double.checked_add(1) {
            Some(side) => side,
            None => return None,
        },
        None => return None,
    };
    side.checked_mul(side)
}

/// Location of the `index`-th registration on a spiral of the given pitch.
///
/// Fails with [`Error::InvalidPitch`] for pitch 0, and with
/// [`Error::OutOfRange`] if the ring radius `r * pitch` does not fit in a
/// signed 128-bit component.
pub fn find_next_location_on_spiral(index: u128, pitch: u128) -> Result<Coordinate> {
    let pitch = Pitch::new(pitch)?;
    spiral_to_coord(SpiralIndex(index), pitch)
}

/// Convert a spiral index to a grid coordinate.
pub fn spiral_to_coord(index: SpiralIndex, pitch: Pitch) -> Result<Coordinate> {
    if index.0 == 0 {
        return Ok(Coordinate::ORIGIN);
    }

    let ring = index.ring();
    let offset = index.offset_in_ring();

    let segment = (offset / ring) as usize;
    let within = offset % ring;

    let radius = checked_signed(U256::widening_mul(ring, pitch.get()), false).ok_or_else(|| {
        Error::OutOfRange {
            component: "radius",
            value: format!("{ring} * {}", pitch.get()),
        }
    })?;
    // within < ring, so this is strictly below the radius
    let step = (within * pitch.get()) as i128;

    let (cx, cy) = CORNERS[segment];
    let (dx, dy) = DIRECTIONS[segment];
    let coord = Coordinate::new(cx * radius + dx * step, cy * radius + dy * step);

    trace!(index = index.0, ring, segment, %coord, "spiral slot");
    Ok(coord)
}

/// Convert a grid coordinate back to its spiral index.
///
/// Inverse of [`spiral_to_coord`]. Fails with [`Error::OffLattice`] if a
/// component is not a multiple of pitch, and with
/// [`Error::ArithmeticOverflow`] if the index would not fit in u128.
pub fn coord_to_spiral(coord: Coordinate, pitch: Pitch) -> Result<SpiralIndex> {
    let p = pitch.get();
    let (mx, my) = (coord.x.unsigned_abs(), coord.y.unsigned_abs());
    if mx % p != 0 || my % p != 0 {
        return Err(Error::OffLattice { coord, pitch: p });
    }
    if coord == Coordinate::ORIGIN {
        return Ok(SpiralIndex::ORIGIN);
    }

    let overflow = || Error::ArithmeticOverflow {
        operation: "spiral index",
    };

    // Lattice units. |a|, |b| <= r, and r < 2^127 once checked.
    let ring = (mx / p).max(my / p);
    let r = i128::try_from(ring).map_err(|_| overflow())?;
    let a = signed_units(coord.x, mx / p);
    let b = signed_units(coord.y, my / p);

    // Offset from the NE corner, walking clockwise; see the module table.
    let offset = if a == r && b > -r {
        r.checked_sub(b)
    } else if b == -r && a > -r {
        r.checked_mul(3).and_then(|v| v.checked_sub(a))
    } else if a == -r && b < r {
        r.checked_mul(5).and_then(|v| v.checked_add(b))
    } else {
        r.checked_mul(7).and_then(|v| v.checked_add(a))
    };
    let offset = offset.ok_or_else(overflow)?;

    let base = total_slots_through(ring - 1).ok_or_else(overflow)?;
    base.checked_add(offset as u128)
        .map(SpiralIndex)
        .ok_or_else(overflow)
}

/// Sign of `component` applied to a lattice magnitude that fits in i128.
fn signed_units(component: i128, magnitude: u128) -> i128 {
    let m = magnitude as i128;
    if component < 0 {
        -m
    } else {
        m
    }
}

/// Iterator over spiral coordinates.
#[derive(Debug, Clone)]
pub struct Spiral {
    pitch: Pitch,
    current: u128,
    limit: Option<u128>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from origin.
    pub fn new(pitch: Pitch) -> Self {
        Self {
            pitch,
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(pitch: Pitch, count: u128) -> Self {
        Self {
            pitch,
            current: 0,
            limit: Some(count),
        }
    }

    /// Create a spiral iterator for a specific ring range (inclusive).
    pub fn rings(pitch: Pitch, start_ring: u128, end_ring: u128) -> Self {
        let start_slot = if start_ring == 0 {
            0
        } else {
            total_slots_through(start_ring - 1).unwrap_or(u128::MAX)
        };
        let end_slot = total_slots_through(end_ring).unwrap_or(u128::MAX);

        Self {
            pitch,
            current: start_slot,
            limit: Some(end_slot),
        }
    }
}

impl Iterator for Spiral {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        // Stops at the first slot whose radius no longer fits
        let coord = spiral_to_coord(SpiralIndex(self.current), self.pitch).ok()?;
        match self.current.checked_add(1) {
            Some(next) => self.current = next,
            None => self.limit = Some(self.current),
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = usize::try_from(limit.saturating_sub(self.current)).ok();
                (0, remaining)
            }
            None => (0, None),
        }
    }
}
