//! Conversions between `BigInt` and `bool`

use crate::primitives::bigint::core::BigInt;

/// `true` becomes one and `false` becomes zero, the form in which
/// comparison results enter a calculation.
impl From<bool> for BigInt {
    fn from(value: bool) -> Self {
        BigInt::from(value as i64)
    }
}

/// A value is truthy unless it is zero. NaN is not zero, so it is truthy.
impl From<&BigInt> for bool {
    fn from(value: &BigInt) -> Self {
        !value.is_zero()
    }
}

impl From<BigInt> for bool {
    fn from(value: BigInt) -> Self {
        !value.is_zero()
    }
}
