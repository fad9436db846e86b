//! Ripple-carry addition and ripple-borrow subtraction
//!
//! Both routines walk the digits from the least significant end, carrying
//! the overflow (or borrow) of each 16-bit intermediate into the next digit.

use crate::primitives::magnitude::Magnitude;
use std::ops::{Add, Sub};

/// Magnitude addition. The result has at most one more digit than the
/// longer operand.
impl Add<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    fn add(self, rhs: &Magnitude) -> Self::Output {
        let (long, short) = if self.0.len() >= rhs.0.len() {
            (&self.0, &rhs.0)
        } else {
            (&rhs.0, &self.0)
        };

        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u16;

        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let sum = a as u16 + b as u16 + carry;

            out.push((sum & 0xFF) as u8);
            carry = sum >> 8;
        }

        out.push(carry as u8);

        Magnitude::from_digits(out)
    }
}

/// Magnitude subtraction `self - rhs`.
///
/// # Panics
/// Panics if `rhs` is larger than `self`. A magnitude is never negative;
/// callers compare first and swap operands when needed.
impl Sub<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    fn sub(self, rhs: &Magnitude) -> Self::Output {
        assert!(self >= rhs, "magnitude subtraction underflow");

        let mut out = Vec::with_capacity(self.0.len());
        let mut borrow = 0i16;

        for (i, &a) in self.0.iter().enumerate() {
            let lhs = a as i16;
            let sub = rhs.0.get(i).copied().unwrap_or(0) as i16 + borrow;

            if lhs >= sub {
                out.push((lhs - sub) as u8);
                borrow = 0;
            } else {
                out.push((lhs + 256 - sub) as u8);
                borrow = 1;
            }
        }

        Magnitude::from_digits(out)
    }
}

