//! Eykar Coordinates
//!
//! Locations for a territory-claiming simulation on an infinite 2-D grid,
//! computed with integer arithmetic only.
//!
//! # Pieces
//!
//! - [`codec`]: packs a [`Coordinate`] (two signed 128-bit components) into a
//!   256-bit [`LocationWord`] for storage, and back.
//! - [`math`]: exact floor square root and floor Euclidean distance.
//! - [`spiral`]: turns a registration index into a collision-free location on
//!   an outward square spiral with a configurable pitch.
//!
//! # Data flow
//!
//! ```text
//! index ──spiral──▶ Coordinate ──encode──▶ LocationWord ──(stored)
//!                                                │
//!          distance ◀── Coordinate ◀──decode─────┘
//! ```
//!
//! Everything here is a pure function over `Copy` values. Callers own the
//! registration counter and must hand each index out once.
//!
//! ```
//! use eykar_coords::{codec, find_next_location_on_spiral, Coordinate};
//!
//! let c = find_next_location_on_spiral(9, 3).unwrap();
//! assert_eq!(c, Coordinate::new(6, 6));
//!
//! let word = codec::encode(c);
//! assert_eq!(codec::decode(word), c);
//! assert_eq!(c.distance_to(&Coordinate::ORIGIN).unwrap(), 8);
//! ```

pub mod codec;
mod coord;
mod error;
pub mod math;
pub mod spiral;
pub mod wide;

pub use codec::{HalfWord, LocationWord};
pub use coord::Coordinate;
pub use error::{Error, Result};
pub use math::{distance, floor_sqrt};
pub use spiral::{
    coord_to_spiral, find_next_location_on_spiral, slots_in_ring, spiral_to_coord,
    total_slots_through, Pitch, Spiral, SpiralIndex,
};
pub use wide::U256;

/// Half-width of a location word, in bits.
pub const HALF_WIDTH_BITS: u32 = codec::HALF_BITS;

/// Width of a location word, in bits.
pub const WORD_BITS: u32 = 2 * HALF_WIDTH_BITS;

// The storage word is exactly two i128 components
const _: () = assert!(HALF_WIDTH_BITS == i128::BITS);
const _: () = assert!(WORD_BITS as usize == codec::WORD_BYTES * 8);
