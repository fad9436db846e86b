//! Primitive types
//!
//! This module defines the numeric types provided by the crate:
//! - `Magnitude`: an unsigned base-256 integer carrying the digit-level
//!   algorithms (addition, subtraction, multiplication, long division)
//! - `BigInt`: a signed integer with a NaN sentinel, built on `Magnitude`
//!
//! Both types grow as needed; there is no fixed width.

mod bigint;
mod magnitude;

pub use bigint::{BigInt, ParseBigIntError, TryFromBigIntError};
pub use magnitude::{KARATSUBA_THRESHOLD, Magnitude};
