//! Integer square root
//!
//! Newton's method over integers, built from `BigInt` division and
//! addition. Starting from the value itself, each step replaces `x` with
//! `(x + n / x) / 2`; the sequence decreases until it reaches
//! `floor(sqrt(n))`, where it stops moving down.

use crate::primitives::bigint::core::BigInt;
use log::debug;

impl BigInt {
    /// Floor of the square root.
    ///
    /// Negative and NaN inputs yield NaN.
    pub fn isqrt(&self) -> BigInt {
        if self.is_nan() {
            return BigInt::nan();
        }

        if self.is_negative() {
            debug!("square root of a negative value, result is NaN");
            return BigInt::nan();
        }

        if self.is_zero() {
            return BigInt::zero();
        }

        let one = BigInt::from(1i64);
        let two = BigInt::from(2i64);

        let mut x = self.clone();
        let mut y = (&x + &one) / &two;

        while y < x {
            x = y;
            y = (&x + &(self / &x)) / &two;
        }

        x
    }
}
