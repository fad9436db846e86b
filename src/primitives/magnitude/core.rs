//! Unsigned base-256 magnitude
//!
//! This module defines `Magnitude`, the absolute value underlying every
//! finite `BigInt`.
//!
//! The digits are stored **least significant first**, one byte per digit.
//! A magnitude is always trimmed: the most significant stored digit is never
//! zero, and the value zero is the empty digit sequence.

/// Arbitrary-precision unsigned integer in base 256.
///
/// The storage is owned exclusively by this value; cloning deep-copies the
/// digits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Magnitude(pub(crate) Vec<u8>);

impl Magnitude {
    /// Returns the magnitude zero (no digits).
    pub const fn zero() -> Self {
        Magnitude(Vec::new())
    }

    /// Builds a magnitude from little-endian digits, trimming high zeros.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut out = Magnitude(bytes.to_vec());
        out.trim();
        out
    }

    /// Builds a magnitude from an owned digit buffer, trimming high zeros.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        let mut out = Magnitude(digits);
        out.trim();
        out
    }

    /// Borrows the digits, least significant first.
    pub fn as_le_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of significant base-256 digits. Zero has none.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiplies by `256^shift` by prepending `shift` zero digits.
    pub fn shift_digits(&self, shift: usize) -> Self {
        if self.is_zero() {
            return Magnitude::zero();
        }

        let mut out = vec![0u8; shift + self.0.len()];
        out[shift..].copy_from_slice(&self.0);

        Magnitude(out)
    }

    /// Splits into `(low, high)` where `low` holds the `at` least
    /// significant digits. Both halves are trimmed.
    pub(crate) fn split_at(&self, at: usize) -> (Self, Self) {
        let at = at.min(self.0.len());
        let (low, high) = self.0.split_at(at);

        (Magnitude::from_le_bytes(low), Magnitude::from_le_bytes(high))
    }

    /// Drops most significant zero digits.
    pub(crate) fn trim(&mut self) {
        while let Some(&0) = self.0.last() {
            self.0.pop();
        }
    }
}
