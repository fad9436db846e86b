//! Conversions between `BigInt` and fixed-width machine integers
//!
//! Widening into `BigInt` is infallible. Narrowing back is explicit and
//! fallible: NaN and values outside the target range are reported as
//! errors rather than truncated.

use crate::primitives::bigint::core::{BigInt, Repr};
use crate::primitives::magnitude::Magnitude;
use thiserror::Error;

/// Errors that can occur when narrowing a `BigInt` into a machine integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TryFromBigIntError {
    /// NaN has no integer value.
    #[error("cannot convert NaN to an integer")]
    Nan,
    /// The value does not fit in the target type.
    #[error("value out of range for the target integer type")]
    Overflow,
}

impl BigInt {
    /// Sign and magnitude as a `u64`, if the magnitude has at most 8 digits.
    fn to_sign_u64(&self) -> Result<(bool, u64), TryFromBigIntError> {
        let (negative, magnitude) = match &self.0 {
            Repr::Int {
                negative,
                magnitude,
            } => (*negative, magnitude),
            Repr::Nan => return Err(TryFromBigIntError::Nan),
        };

        if magnitude.len() > size_of::<u64>() {
            return Err(TryFromBigIntError::Overflow);
        }

        let value = magnitude
            .as_le_bytes()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &digit)| acc | ((digit as u64) << (i * 8)));

        Ok((negative, value))
    }
}

/// Converts a `u64` into a non-negative `BigInt`.
impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_parts(false, Magnitude::from_le_bytes(&value.to_le_bytes()))
    }
}

/// Converts an `i64` into a `BigInt`.
///
/// The magnitude is taken with `unsigned_abs`, so `i64::MIN` converts
/// without negating a value whose absolute value has no `i64` form.
impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let magnitude = Magnitude::from_le_bytes(&value.unsigned_abs().to_le_bytes());

        BigInt::from_parts(value < 0, magnitude)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        BigInt::from(value as i64)
    }
}

/// Attempts to convert a `BigInt` into an `i64`.
///
/// Fails on NaN and on any value outside `i64::MIN..=i64::MAX`.
impl TryFrom<&BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let (negative, magnitude) = value.to_sign_u64()?;

        if !negative {
            return i64::try_from(magnitude).map_err(|_| TryFromBigIntError::Overflow);
        }

        if magnitude > i64::MIN.unsigned_abs() {
            return Err(TryFromBigIntError::Overflow);
        }

        Ok((magnitude as i64).wrapping_neg())
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        i64::try_from(&value)
    }
}

/// Attempts to convert a `BigInt` into a `u64`.
///
/// Fails on NaN, on negative values, and on magnitudes wider than 64 bits.
impl TryFrom<&BigInt> for u64 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        match value.to_sign_u64()? {
            (false, magnitude) => Ok(magnitude),
            (true, _) => Err(TryFromBigIntError::Overflow),
        }
    }
}

impl TryFrom<BigInt> for u64 {
    type Error = TryFromBigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        u64::try_from(&value)
    }
}

/// Attempts to convert a `BigInt` into an `i32`.
impl TryFrom<&BigInt> for i32 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let wide = i64::try_from(value)?;

        i32::try_from(wide).map_err(|_| TryFromBigIntError::Overflow)
    }
}
