//! Coordinate codec.
//!
//! A [`LocationWord`] is the 256-bit storage form of a [`Coordinate`]:
//!
//! ```text
//! bits 255..128   x, two's complement, big-endian
//! bits 127..0     y, two's complement, big-endian
//! ```
//!
//! Two pairs of operations cross that boundary, and they are kept apart:
//!
//! - [`split`] / [`merge`] are structural. They cut or join the raw halves and
//!   never look at sign. They are total and inverse for every word.
//! - [`decode`] / [`encode`] are numeric. They read or write each half as a
//!   signed integer. They are inverse over every representable coordinate.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::wide::{from_twos_complement, to_twos_complement, U256};
use crate::Coordinate;

/// Bits in one coordinate component.
pub const HALF_BITS: u32 = 128;

/// Bytes in a full location word.
pub const WORD_BYTES: usize = 32;

/// Bytes in one half of a location word.
pub const HALF_BYTES: usize = WORD_BYTES / 2;

/// One raw half of a [`LocationWord`], with no sign interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct HalfWord(pub u128);

impl HalfWord {
    /// Big-endian bytes of this half.
    pub const fn to_be_bytes(self) -> [u8; HALF_BYTES] {
        self.0.to_be_bytes()
    }

    /// Build from big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; HALF_BYTES]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Parse exactly 32 hex digits, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; HALF_BYTES];
        decode_hex_exact(s, &mut bytes)?;
        Ok(Self::from_be_bytes(bytes))
    }

    /// `0x` followed by 32 lowercase hex digits.
    pub fn to_hex(self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Display for HalfWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HalfWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// The 256-bit storage word for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct LocationWord(U256);

impl LocationWord {
    /// The all-zero word, which decodes to the origin.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap a raw 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// The raw 256-bit value.
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Build from 32 big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8; WORD_BYTES]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    /// The 32 big-endian bytes of this word.
    pub fn to_be_bytes(&self) -> [u8; WORD_BYTES] {
        self.0.to_be_bytes()
    }

    /// Parse exactly 64 hex digits, with or without a `0x` prefix.
    ///
    /// Shorter or longer input is rejected with [`Error::MalformedWord`];
    /// it is never padded or truncated.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; WORD_BYTES];
        decode_hex_exact(s, &mut bytes)?;
        Ok(Self::from_be_bytes(&bytes))
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

impl fmt::Display for LocationWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for LocationWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<LocationWord> for String {
    fn from(word: LocationWord) -> Self {
        word.to_hex()
    }
}

impl TryFrom<String> for LocationWord {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Coordinate> for LocationWord {
    fn from(c: Coordinate) -> Self {
        encode(c)
    }
}

impl From<LocationWord> for Coordinate {
    fn from(word: LocationWord) -> Self {
        decode(word)
    }
}

fn decode_hex_exact(s: &str, out: &mut [u8]) -> Result<()> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let expected = out.len() * 2;
    if digits.len() != expected {
        return Err(Error::MalformedWord {
            expected,
            len: digits.len(),
        });
    }
    hex::decode_to_slice(digits, out)?;
    Ok(())
}

/// Cut a word into its high and low halves.
pub fn split(word: LocationWord) -> (HalfWord, HalfWord) {
    (HalfWord(word.0.high_u128()), HalfWord(word.0.low_u128()))
}

/// Join two halves into a word, `high` first.
pub fn merge(high: HalfWord, low: HalfWord) -> LocationWord {
    LocationWord(U256::from_halves(high.0, low.0))
}

/// Read a word as a coordinate: high half is x, low half is y.
pub fn decode(word: LocationWord) -> Coordinate {
    let (high, low) = split(word);
    Coordinate::new(from_twos_complement(high.0), from_twos_complement(low.0))
}

/// Write a coordinate into a word: x into the high half, y into the low half.
pub fn encode(c: Coordinate) -> LocationWord {
    merge(
        HalfWord(to_twos_complement(c.x)),
        HalfWord(to_twos_complement(c.y)),
    )
}

/// Encode components of any integer type.
///
/// Fails with [`Error::OutOfRange`] if either does not fit in i128.
pub fn encode_parts<X, Y>(x: X, y: Y) -> Result<LocationWord>
where
    X: TryInto<i128> + fmt::Display + Copy,
    Y: TryInto<i128> + fmt::Display + Copy,
{
    Coordinate::try_new(x, y).map(encode)
}
