//! Arbitrary-precision integers with hexadecimal I/O
//!
//! This crate provides `BigInt`, a signed integer of unbounded width, and
//! `Magnitude`, the unsigned digit engine underneath it.
//!
//! The focus is on **explicit semantics and predictable behavior**: every
//! operation is a pure function of its operands, and invalid operations are
//! reported as values rather than panics.
//!
//! # Module overview
//!
//! - `primitives`
//!   The numeric types and their operations:
//!   - signed addition, subtraction, multiplication, truncating division
//!     and remainder, with compound-assignment forms
//!   - schoolbook multiplication for small operands and Karatsuba
//!     multiplication above [`primitives::KARATSUBA_THRESHOLD`] digits
//!   - integer square root by Newton iteration
//!   - comparison operators
//!   - hexadecimal parsing and formatting, and conversions to and from
//!     machine integers
//!
//! # NaN
//!
//! `BigInt` has a distinguished NaN state. Division or remainder by zero
//! and the square root of a negative value yield NaN. Any arithmetic
//! involving NaN yields NaN, and every comparison involving NaN, `==` and
//! `!=` included, is false. NaN formats as `NaN`.
//!
//! ```
//! use longint::primitives::BigInt;
//!
//! let a: BigInt = "FF".parse().unwrap();
//! let b = BigInt::from(2i64);
//!
//! assert_eq!((&a * &b).to_string(), "1FE");
//! assert!((&a / &BigInt::zero()).is_nan());
//! ```
//!
//! # Design goals
//!
//! - Explicit, fallible narrowing conversions
//! - No panics on user-reachable paths
//! - Exclusive ownership of digit storage by each value
//!
//! The crate does not read or write files and does not evaluate
//! expressions; callers drive it value by value.

pub mod primitives;
