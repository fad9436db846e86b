//! Unsigned arbitrary-precision magnitude
//!
//! This module defines `Magnitude`, a growable base-256 unsigned integer
//! that carries all of the digit-level arithmetic used by `BigInt`:
//! - ordering
//! - ripple-carry addition and ripple-borrow subtraction
//! - schoolbook and Karatsuba multiplication
//! - long division with remainder
//!
//! Digits are stored least significant first and are always trimmed, so
//! two equal values always have identical digit sequences.

mod add;
mod cmp;
mod core;
mod div;
mod mul;

/// Unsigned base-256 integer.
pub use self::core::Magnitude;
pub use mul::KARATSUBA_THRESHOLD;
