//! Arbitrary-precision signed integer
//!
//! This module defines the `BigInt` type, a sign-magnitude integer of
//! unbounded width with a NaN sentinel.
//!
//! The digit-level algorithms live in `Magnitude`; this module adds:
//! - the sign and NaN state, and their normalization
//! - signed ordering with NaN-aware comparison operators
//! - signed arithmetic operators and their compound-assignment forms
//! - integer square root
//! - conversions to and from hexadecimal text and machine integers
//!
//! Invalid operations never panic and never return an error: division by
//! zero and the square root of a negative value produce NaN, which then
//! flows through every later computation.

mod cmp;
mod conv;
mod core;
mod ops;
mod sqrt;

/// Arbitrary-precision signed integer.
pub use self::core::BigInt;
pub use conv::{ParseBigIntError, TryFromBigIntError};
