//! Error types for eykar-coords.

use thiserror::Error;

use crate::Coordinate;

/// Result type for coordinate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the codec, the integer math and the spiral allocator.
///
/// Every variant is a rejected precondition. Nothing here is retried, since
/// all operations are pure and would fail the same way again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A coordinate component does not fit in a signed 128-bit half-word.
    #[error("{component} = {value} does not fit in a signed 128-bit half-word")]
    OutOfRange {
        component: &'static str,
        value: String,
    },

    /// A widened intermediate exceeded its capacity.
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    /// Pitch must be a positive integer.
    #[error("invalid pitch: must be greater than zero")]
    InvalidPitch,

    /// A hex word had the wrong number of digits.
    #[error("malformed word: expected {expected} hex digits, got {len}")]
    MalformedWord { expected: usize, len: usize },

    /// A hex word contained a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The coordinate is not a multiple of the spiral pitch.
    #[error("coordinate {coord} is not on the spiral lattice of pitch {pitch}")]
    OffLattice { coord: Coordinate, pitch: u128 },
}
