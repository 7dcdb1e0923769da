//! Grid coordinates.
//!
//! A coordinate is a pair of signed 128-bit integers. The width is fixed by
//! the storage word: each component occupies one half of a [`LocationWord`].
//!
//! [`LocationWord`]: crate::LocationWord

use std::fmt;

use crate::error::{Error, Result};
use crate::math;

/// A position on the infinite 2-D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Horizontal component, stored in the high half of the word
    pub x: i128,
    /// Vertical component, stored in the low half of the word
    pub y: i128,
}

impl Coordinate {
    /// Origin of the grid, where the spiral starts.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i128, y: i128) -> Self {
        Self { x, y }
    }

    /// Create a coordinate from integers of any width.
    ///
    /// Fails with [`Error::OutOfRange`] when a component does not fit in a
    /// signed 128-bit half-word. Values are never truncated.
    pub fn try_new<X, Y>(x: X, y: Y) -> Result<Self>
    where
        X: TryInto<i128> + fmt::Display + Copy,
        Y: TryInto<i128> + fmt::Display + Copy,
    {
        let cx = x.try_into().map_err(|_| Error::OutOfRange {
            component: "x",
            value: x.to_string(),
        })?;
        let cy = y.try_into().map_err(|_| Error::OutOfRange {
            component: "y",
            value: y.to_string(),
        })?;
        Ok(Self::new(cx, cy))
    }

    /// Chebyshev radius: max(|x|, |y|).
    pub fn chebyshev_radius(&self) -> u128 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }

    /// Chebyshev distance: max(|dx|, |dy|).
    pub fn chebyshev_distance(&self, other: &Self) -> u128 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Floor Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Self) -> Result<u128> {
        math::distance(self.x, self.y, other.x, other.y)
    }
}

impl From<(i128, i128)> for Coordinate {
    fn from((x, y): (i128, i128)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i128, i128) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
