//! Magnitude multiplication
//!
//! Two strategies are provided:
//! - schoolbook multiplication, O(n·m) digit products, used for small operands
//! - Karatsuba multiplication, which splits both operands into halves and
//!   combines three recursive sub-products instead of four
//!
//! `&a * &b` picks between them using [`KARATSUBA_THRESHOLD`].

use crate::primitives::magnitude::Magnitude;
use log::trace;
use std::ops::Mul;

/// Operand size, in base-256 digits, at or below which multiplication
/// uses the schoolbook algorithm.
pub const KARATSUBA_THRESHOLD: usize = 256;

impl Magnitude {
    /// Schoolbook product of two magnitudes.
    ///
    /// Every digit pair is multiplied and accumulated, together with the
    /// running carry and the partial sum already present, into the digit
    /// position given by the sum of their indices.
    pub fn mul_schoolbook(&self, rhs: &Magnitude) -> Magnitude {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::zero();
        }

        let mut out = vec![0u8; self.0.len() + rhs.0.len()];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u16;

            for (j, &b) in rhs.0.iter().enumerate() {
                let t = a as u16 * b as u16 + out[i + j] as u16 + carry;

                out[i + j] = (t & 0xFF) as u8;
                carry = t >> 8;
            }

            out[i + rhs.0.len()] = carry as u8;
        }

        Magnitude::from_digits(out)
    }

    /// Karatsuba product of two magnitudes.
    ///
    /// Operands are split while the shorter one has more than `threshold`
    /// digits; below that the schoolbook algorithm takes over. A threshold
    /// of zero is treated as one.
    pub fn mul_karatsuba(&self, rhs: &Magnitude, threshold: usize) -> Magnitude {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::zero();
        }

        let threshold = threshold.max(1);

        if self.0.len().min(rhs.0.len()) <= threshold {
            return self.mul_schoolbook(rhs);
        }

        // Both operands are viewed as padded to the same width; `half` is the
        // width of the low part.
        let width = self.0.len().max(rhs.0.len());
        let half = width - width / 2;

        trace!(
            "karatsuba: {} x {} digits, split at {}",
            self.0.len(),
            rhs.0.len(),
            half
        );

        let (a_low, a_high) = self.split_at(half);
        let (b_low, b_high) = rhs.split_at(half);

        let low = a_low.mul_karatsuba(&b_low, threshold);
        let high = a_high.mul_karatsuba(&b_high, threshold);
        let cross = (&a_low + &a_high).mul_karatsuba(&(&b_low + &b_high), threshold);

        // (a_low + a_high)(b_low + b_high) - high - low is never negative.
        let middle = &(&cross - &high) - &low;

        let out = &high.shift_digits(2 * half) + &middle.shift_digits(half);

        &out + &low
    }
}

/// Magnitude product, choosing the algorithm by operand size.
impl Mul<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: &Magnitude) -> Self::Output {
        self.mul_karatsuba(rhs, KARATSUBA_THRESHOLD)
    }
}
