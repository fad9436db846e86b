//! Ordering of magnitudes
//!
//! Trimmed magnitudes order first by digit count, then digit by digit from
//! the most significant end.

use crate::primitives::magnitude::Magnitude;
use std::cmp::Ordering;

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
