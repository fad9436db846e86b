//! Arbitrary-precision signed integer
//!
//! This module defines `BigInt`, a sign-magnitude integer with a
//! distinguished NaN state.
//!
//! A value is always in exactly one of four states: zero, positive,
//! negative, or NaN. NaN is produced by undefined operations (division by
//! zero, square root of a negative value) and poisons every arithmetic
//! result it touches.

use crate::primitives::magnitude::Magnitude;

/// Internal state of a `BigInt`.
#[derive(Clone, Debug)]
pub(crate) enum Repr {
    /// A finite value. `negative` is never set on a zero magnitude.
    Int { negative: bool, magnitude: Magnitude },
    /// Not a number.
    Nan,
}

/// Arbitrary-precision signed integer.
///
/// The magnitude is stored as base-256 digits, least significant first,
/// next to a separate sign flag. Each value owns its digits exclusively;
/// cloning copies them.
///
/// `BigInt` implements `PartialEq` and `PartialOrd` but not `Eq` or `Ord`:
/// a NaN value compares false against everything, itself included.
#[derive(Clone, Debug)]
pub struct BigInt(pub(crate) Repr);

impl BigInt {
    /// The value zero.
    pub const fn zero() -> Self {
        BigInt(Repr::Int {
            negative: false,
            magnitude: Magnitude::zero(),
        })
    }

    /// The NaN sentinel.
    pub const fn nan() -> Self {
        BigInt(Repr::Nan)
    }

    /// Builds a finite value from a sign and a magnitude.
    ///
    /// The sign is dropped when the magnitude is zero.
    pub fn from_parts(negative: bool, magnitude: Magnitude) -> Self {
        let negative = negative && !magnitude.is_zero();

        BigInt(Repr::Int {
            negative,
            magnitude,
        })
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::Nan)
    }

    /// Returns `true` for finite values strictly below zero.
    pub fn is_negative(&self) -> bool {
        matches!(self.0, Repr::Int { negative: true, .. })
    }

    /// Returns `true` for finite values strictly above zero.
    pub fn is_positive(&self) -> bool {
        match &self.0 {
            Repr::Int {
                negative,
                magnitude,
            } => !negative && !magnitude.is_zero(),
            Repr::Nan => false,
        }
    }

    /// Returns `true` only for the finite value zero. NaN is not zero.
    pub fn is_zero(&self) -> bool {
        match &self.0 {
            Repr::Int { magnitude, .. } => magnitude.is_zero(),
            Repr::Nan => false,
        }
    }

    /// Number of base-256 digits in the magnitude.
    ///
    /// Zero and NaN both report 0.
    pub fn size(&self) -> usize {
        self.magnitude().map_or(0, Magnitude::len)
    }

    /// Borrows the magnitude, or `None` for NaN.
    pub fn magnitude(&self) -> Option<&Magnitude> {
        match &self.0 {
            Repr::Int { magnitude, .. } => Some(magnitude),
            Repr::Nan => None,
        }
    }

    /// Returns the value with its sign flipped. NaN and zero are unchanged.
    pub fn negate(&self) -> BigInt {
        match &self.0 {
            Repr::Int {
                negative,
                magnitude,
            } => BigInt::from_parts(!negative, magnitude.clone()),
            Repr::Nan => BigInt::nan(),
        }
    }

    /// Absolute value. NaN stays NaN.
    pub fn abs(&self) -> BigInt {
        match &self.0 {
            Repr::Int { magnitude, .. } => BigInt::from_parts(false, magnitude.clone()),
            Repr::Nan => BigInt::nan(),
        }
    }

    /// Moves the value out, leaving zero in its place.
    pub fn take(&mut self) -> BigInt {
        std::mem::take(self)
    }

    /// Releases the digit storage and resets the value to zero.
    pub fn clear(&mut self) {
        *self = BigInt::zero();
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}
