//! Long division of magnitudes
//!
//! The quotient is built one base-256 digit at a time: the divisor is
//! shifted left to line up with the running remainder, then subtracted
//! repeatedly. The number of subtractions (at most 255) becomes the
//! quotient digit at that position.

use crate::primitives::magnitude::Magnitude;
use log::trace;

impl Magnitude {
    /// Computes `(self / divisor, self % divisor)` in a single pass.
    ///
    /// Returns `None` when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Magnitude) -> Option<(Magnitude, Magnitude)> {
        if divisor.is_zero() {
            return None;
        }

        if self.0.len() < divisor.0.len() {
            return Some((Magnitude::zero(), self.clone()));
        }

        let mut quotient = vec![0u8; self.0.len() - divisor.0.len() + 1];
        let mut remainder = self.clone();

        while remainder >= *divisor {
            let mut shift = remainder.0.len() - divisor.0.len();
            let mut multiple = divisor.shift_digits(shift);

            // `remainder >= divisor` guarantees `shift > 0` here.
            if remainder < multiple {
                shift -= 1;
                multiple = divisor.shift_digits(shift);
            }

            let mut digit = 0u8;

            while remainder >= multiple {
                remainder = &remainder - &multiple;
                digit += 1;
            }

            trace!("long division: digit {:#04x} at position {}", digit, shift);

            quotient[shift] = digit;
        }

        Some((Magnitude::from_digits(quotient), remainder))
    }
}
