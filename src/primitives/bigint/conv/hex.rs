//! Hexadecimal text codec for `BigInt`
//!
//! Parsing accepts an optional leading `-`, an optional `0x` / `0X`
//! prefix, and then hexadecimal digits in either case, most significant
//! first. An empty digit string is zero. The literal `NaN` parses to the
//! NaN sentinel so that every emitted value can be read back.
//!
//! Emission prints `NaN`, `0`, or an optional `-` followed by uppercase
//! digits without leading zeros.

use crate::primitives::bigint::core::{BigInt, Repr};
use crate::primitives::magnitude::Magnitude;
use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Text emitted for, and parsed back into, the NaN sentinel.
pub(crate) const NAN_TEXT: &str = "NaN";

/// Errors that can occur while parsing hexadecimal text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// A character that is not a hexadecimal digit. `position` is the byte
    /// offset of the character in the original text.
    #[error("invalid hexadecimal digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

impl BigInt {
    /// Parses a hexadecimal token such as `FF`, `-0x1a2b` or `NaN`.
    pub fn from_hex(text: &str) -> Result<BigInt, ParseBigIntError> {
        if text == NAN_TEXT {
            return Ok(BigInt::nan());
        }

        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);

        let offset = text.len() - digits.len();

        let nibbles = digits
            .char_indices()
            .map(|(i, c)| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseBigIntError::InvalidDigit {
                        digit: c,
                        position: offset + i,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        // Pair nibbles from the least significant end; a leftover leading
        // nibble becomes the top digit on its own.
        let bytes: Vec<u8> = nibbles
            .rchunks(2)
            .map(|pair| pair.iter().fold(0u8, |acc, &nibble| (acc << 4) | nibble))
            .collect();

        Ok(BigInt::from_parts(negative, Magnitude::from_digits(bytes)))
    }

    /// Writes the hexadecimal text followed by a newline.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    fn fmt_hex(&self, f: &mut Formatter<'_>, upper: bool) -> fmt::Result {
        let (negative, magnitude) = match &self.0 {
            Repr::Int {
                negative,
                magnitude,
            } => (*negative, magnitude),
            Repr::Nan => return f.pad(NAN_TEXT),
        };

        let table: &[u8; 16] = if upper {
            b"0123456789ABCDEF"
        } else {
            b"0123456789abcdef"
        };

        let mut digits = String::with_capacity(magnitude.len() * 2 + 1);

        if magnitude.is_zero() {
            digits.push('0');
        }

        for (i, &byte) in magnitude.as_le_bytes().iter().rev().enumerate() {
            // No leading zero nibble on the most significant digit.
            if i > 0 || byte >> 4 != 0 {
                digits.push(table[(byte >> 4) as usize] as char);
            }

            digits.push(table[(byte & 0x0F) as usize] as char);
        }

        f.pad_integral(!negative, "0x", &digits)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_hex(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = ParseBigIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        BigInt::from_hex(value)
    }
}

/// Formats the value as uppercase hexadecimal.
///
/// Example: `-1A2B`, `0`, `NaN`.
impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}

/// `{:X}`; `{:#X}` adds a `0x` prefix after the sign.
impl UpperHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}

/// `{:x}`; `{:#x}` adds a `0x` prefix after the sign.
impl LowerHex for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}
