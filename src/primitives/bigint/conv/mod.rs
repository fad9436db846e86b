//! Conversion utilities for `BigInt`
//!
//! Each submodule groups the conversions to and from one external form:
//! - `hex`: hexadecimal text, parsing and formatting
//! - `int`: fixed-width machine integers, with fallible narrowing
//! - `bool`: truthiness and comparison results
//! - `bytes`: raw little-endian magnitude digits

mod bool;
mod bytes;
mod hex;
mod int;

pub use hex::ParseBigIntError;
pub use int::TryFromBigIntError;
