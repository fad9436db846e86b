//! Conversions between `BigInt` and raw digit bytes
//!
//! Bytes are little-endian base-256 digits of the magnitude; the sign is
//! carried separately.

use crate::primitives::bigint::core::BigInt;
use crate::primitives::magnitude::Magnitude;

impl BigInt {
    /// Builds a value from a sign and little-endian magnitude bytes.
    ///
    /// High zero bytes are trimmed, and a zero magnitude is never negative.
    pub fn from_le_bytes(negative: bool, bytes: &[u8]) -> Self {
        BigInt::from_parts(negative, Magnitude::from_le_bytes(bytes))
    }

    /// Returns the sign and the trimmed little-endian magnitude bytes, or
    /// `None` for NaN.
    pub fn to_le_bytes(&self) -> Option<(bool, Vec<u8>)> {
        self.magnitude()
            .map(|magnitude| (self.is_negative(), magnitude.as_le_bytes().to_vec()))
    }
}

impl From<Magnitude> for BigInt {
    fn from(value: Magnitude) -> Self {
        BigInt::from_parts(false, value)
    }
}
