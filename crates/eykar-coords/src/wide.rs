//! Fixed-width integer primitives.
//!
//! Coordinates are signed 128-bit values, so anything derived from two of them
//! (deltas squared and summed, ring radius times pitch) needs one more machine
//! word of headroom. [`U256`] provides exactly that, with checked operations
//! only: an overflow is reported as `None`, never wrapped.
//!
//! The two's-complement helpers are the only places where a signed half-word
//! is reinterpreted as raw bits or back. They wrap by definition.

use std::cmp::Ordering;

/// A 256-bit unsigned integer.
///
/// Represented as 4 u64 limbs in little-endian order.
/// Limb 0 is least significant, limb 3 is most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256 {
    /// Four 64-bit limbs, little-endian (limb[0] is least significant)
    pub limbs: [u64; 4],
}

impl U256 {
    /// Zero value
    pub const ZERO: U256 = U256 { limbs: [0, 0, 0, 0] };

    /// One
    pub const ONE: U256 = U256 { limbs: [1, 0, 0, 0] };

    /// Maximum value (2^256 - 1)
    pub const MAX: U256 = U256 {
        limbs: [u64::MAX, u64::MAX, u64::MAX, u64::MAX],
    };

    /// Create from a u64 (placed in lowest limb)
    pub const fn from_u64(n: u64) -> Self {
        U256 {
            limbs: [n, 0, 0, 0],
        }
    }

    /// Create from a u128 (placed in lowest two limbs)
    pub const fn from_u128(n: u128) -> Self {
        Self::from_halves(0, n)
    }

    /// Concatenate two 128-bit halves, `high` in the upper bits.
    pub const fn from_halves(high: u128, low: u128) -> Self {
        U256 {
            limbs: [low as u64, (low >> 64) as u64, high as u64, (high >> 64) as u64],
        }
    }

    /// Upper 128 bits.
    pub const fn high_u128(&self) -> u128 {
        ((self.limbs[3] as u128) << 64) | self.limbs[2] as u128
    }

    /// Lower 128 bits.
    pub const fn low_u128(&self) -> u128 {
        ((self.limbs[1] as u128) << 64) | self.limbs[0] as u128
    }

    /// Narrow to u128, or `None` if any upper bit is set.
    pub const fn try_to_u128(&self) -> Option<u128> {
        if self.high_u128() == 0 {
            Some(self.low_u128())
        } else {
            None
        }
    }

    /// Create from 32 bytes (big-endian)
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        // Big endian: bytes[0..8] is most significant
        for (i, limb) in limbs.iter_mut().enumerate() {
            let offset = (3 - i) * 8;
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[offset..offset + 8]);
            *limb = u64::from_be_bytes(chunk);
        }
        U256 { limbs }
    }

    /// Convert to 32 bytes (big-endian)
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.limbs.iter().enumerate() {
            let offset = (3 - i) * 8;
            bytes[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Checked addition
    pub fn checked_add(&self, other: &U256) -> Option<U256> {
        let mut result = [0u64; 4];
        let mut carry = 0u128;

        for (i, out) in result.iter_mut().enumerate() {
            let sum = self.limbs[i] as u128 + other.limbs[i] as u128 + carry;
            *out = sum as u64;
            carry = sum >> 64;
        }

        if carry == 0 {
            Some(U256 { limbs: result })
        } else {
            None // Overflow
        }
    }

    /// Checked multiplication
    pub fn checked_mul(&self, other: &U256) -> Option<U256> {
        let product = self.mul_limbs(other);
        if product[4..].iter().any(|&limb| limb != 0) {
            return None;
        }
        Some(U256 {
            limbs: [product[0], product[1], product[2], product[3]],
        })
    }

    /// Full product of two u128 values. Never overflows.
    pub fn widening_mul(a: u128, b: u128) -> U256 {
        let product = U256::from_u128(a).mul_limbs(&U256::from_u128(b));
        // 128 x 128 bits occupies at most the low four limbs
        U256 {
            limbs: [product[0], product[1], product[2], product[3]],
        }
    }

    /// Schoolbook multiply into an 8-limb (512-bit) product.
    fn mul_limbs(&self, other: &U256) -> [u64; 8] {
        let mut out = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u128;
            for j in 0..4 {
                // (2^64-1)^2 + 2(2^64-1) == 2^128-1, so this never overflows u128
                let cur = out[i + j] as u128
                    + self.limbs[i] as u128 * other.limbs[j] as u128
                    + carry;
                out[i + j] = cur as u64;
                carry = cur >> 64;
            }
            out[i + 4] = carry as u64;
        }
        out
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare from most significant limb
        for i in (0..4).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(n: u64) -> Self {
        U256::from_u64(n)
    }
}

impl From<u128> for U256 {
    fn from(n: u128) -> Self {
        U256::from_u128(n)
    }
}

impl std::fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

/// Raw bits of a signed half-word.
#[inline]
pub const fn to_twos_complement(value: i128) -> u128 {
    value as u128
}

/// Signed value of a raw half-word.
#[inline]
pub const fn from_twos_complement(bits: u128) -> i128 {
    bits as i128
}

/// Narrow a sign/magnitude pair to i128.
///
/// Accepts exactly `[-2^127, 2^127 - 1]`; `negative` on a zero magnitude is
/// ignored.
pub fn checked_signed(magnitude: U256, negative: bool) -> Option<i128> {
    let magnitude = magnitude.try_to_u128()?;
    if negative {
        // 2^127 is representable only as i128::MIN
        if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    } else {
        i128::try_from(magnitude).ok()
    }
}
