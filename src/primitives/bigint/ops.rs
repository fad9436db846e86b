//! Signed arithmetic for `BigInt`
//!
//! Every binary operation follows the same shape: reject NaN, classify the
//! operand signs, run the matching magnitude operation, then attach the
//! result sign. The classification lives in [`Operands`] so the sign rules
//! are written once.
//!
//! Operators are implemented for every combination of owned and borrowed
//! operands, together with their compound-assignment forms.

use crate::primitives::bigint::core::{BigInt, Repr};
use crate::primitives::magnitude::Magnitude;
use log::debug;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

/// Sign combination of an operand pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignCase {
    BothNonNegative,
    BothNegative,
    Mixed,
}

impl SignCase {
    fn of(lhs_negative: bool, rhs_negative: bool) -> Self {
        match (lhs_negative, rhs_negative) {
            (false, false) => SignCase::BothNonNegative,
            (true, true) => SignCase::BothNegative,
            _ => SignCase::Mixed,
        }
    }
}

/// A pair of finite operands split into signs and magnitudes.
struct Operands<'a> {
    case: SignCase,
    lhs_negative: bool,
    lhs: &'a Magnitude,
    rhs_negative: bool,
    rhs: &'a Magnitude,
}

impl<'a> Operands<'a> {
    /// Returns `None` if either operand is NaN.
    fn classify(lhs: &'a BigInt, rhs: &'a BigInt) -> Option<Self> {
        match (&lhs.0, &rhs.0) {
            (
                Repr::Int {
                    negative: lhs_negative,
                    magnitude: lhs,
                },
                Repr::Int {
                    negative: rhs_negative,
                    magnitude: rhs,
                },
            ) => Some(Operands {
                case: SignCase::of(*lhs_negative, *rhs_negative),
                lhs_negative: *lhs_negative,
                lhs,
                rhs_negative: *rhs_negative,
                rhs,
            }),
            _ => None,
        }
    }

    /// Flips the sign of the right operand, turning `a - b` into `a + (-b)`.
    fn negate_rhs(self) -> Self {
        let rhs_negative = !self.rhs_negative && !self.rhs.is_zero();

        Operands {
            case: SignCase::of(self.lhs_negative, rhs_negative),
            rhs_negative,
            ..self
        }
    }

    fn sum(&self) -> BigInt {
        match self.case {
            SignCase::BothNonNegative => BigInt::from_parts(false, self.lhs + self.rhs),
            SignCase::BothNegative => BigInt::from_parts(true, self.lhs + self.rhs),
            // The larger magnitude decides the sign.
            SignCase::Mixed if self.lhs >= self.rhs => {
                BigInt::from_parts(self.lhs_negative, self.lhs - self.rhs)
            }
            SignCase::Mixed => BigInt::from_parts(self.rhs_negative, self.rhs - self.lhs),
        }
    }

    fn product(&self) -> BigInt {
        BigInt::from_parts(self.case == SignCase::Mixed, self.lhs * self.rhs)
    }

    /// Truncating division: the quotient is negative for mixed signs and
    /// the remainder carries the sign of the dividend.
    fn quotient_remainder(&self) -> (BigInt, BigInt) {
        match self.lhs.div_rem(self.rhs) {
            Some((quotient, remainder)) => (
                BigInt::from_parts(self.case == SignCase::Mixed, quotient),
                BigInt::from_parts(self.lhs_negative, remainder),
            ),
            None => {
                debug!("division by zero, result is NaN");
                (BigInt::nan(), BigInt::nan())
            }
        }
    }
}

impl BigInt {
    /// Computes quotient and remainder with a single long division.
    ///
    /// The quotient is truncated toward zero and the remainder has the sign
    /// of `self`, so `q * rhs + r == self`. A zero divisor, or a NaN
    /// operand, yields `(NaN, NaN)`.
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        match Operands::classify(self, rhs) {
            Some(operands) => operands.quotient_remainder(),
            None => (BigInt::nan(), BigInt::nan()),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        Operands::classify(self, rhs).map_or_else(BigInt::nan, |ops| ops.sum())
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        Operands::classify(self, rhs).map_or_else(BigInt::nan, |ops| ops.negate_rhs().sum())
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        Operands::classify(self, rhs).map_or_else(BigInt::nan, |ops| ops.product())
    }
}

/// Truncating division. Division by zero yields NaN.
impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).0
    }
}

/// Remainder of truncating division, with the sign of the dividend.
/// A zero divisor yields NaN.
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).1
    }
}

/// Forwards the owned and mixed operand forms, and the compound
/// assignments, to the `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> Self::Output {
                (&self).$op(&rhs)
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> Self::Output {
                (&self).$op(rhs)
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> Self::Output {
                self.$op(&rhs)
            }
        }

        impl $OpAssign<&BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: &BigInt) {
                *self = (&*self).$op(rhs);
            }
        }

        impl $OpAssign<BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: BigInt) {
                *self = (&*self).$op(&rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Int {
                negative,
                magnitude,
            } => BigInt::from_parts(!negative, magnitude),
            Repr::Nan => BigInt::nan(),
        }
    }
}

/// `!x` is the integer square root, the calculator's `~` operator.
impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.isqrt()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.isqrt()
    }
}
