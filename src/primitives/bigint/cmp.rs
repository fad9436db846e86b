//! Comparison of `BigInt` values
//!
//! Finite values are totally ordered: the sign decides first, then the
//! magnitude, with the magnitude order reversed for two negative values.
//!
//! NaN has no place in that order. `partial_cmp` returns `None` whenever a
//! NaN is involved, so `<`, `<=`, `>` and `>=` are all false, and both `==`
//! and `!=` are false as well.

use crate::primitives::bigint::core::{BigInt, Repr};
use std::cmp::Ordering;

impl BigInt {
    /// Total order over two finite values, `None` if either is NaN.
    pub(crate) fn compare(&self, other: &BigInt) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (
                Repr::Int {
                    negative: lhs_neg,
                    magnitude: lhs,
                },
                Repr::Int {
                    negative: rhs_neg,
                    magnitude: rhs,
                },
            ) => Some(match (lhs_neg, rhs_neg) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => lhs.cmp(rhs),
                (true, true) => rhs.cmp(lhs),
            }),
            _ => None,
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Inequality is false, not true, when either side is NaN.
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        matches!(
            self.compare(other),
            Some(Ordering::Less | Ordering::Greater)
        )
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}
