//! The six-digit code value type.

use crate::{CodeError, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a code.
pub const CODE_LEN: usize = 6;

/// An ordered sequence of exactly six decimal digits.
///
/// Positions are 1-based (d1..d6) in all documentation and APIs, matching
/// the checksum rule's naming. Leading zeros are significant: `"001234"`
/// is a valid code, `"1234"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LEN]);

impl Code {
    /// Parse a code from text.
    ///
    /// Surrounding whitespace is trimmed first. Fails with
    /// [`CodeError::Length`] unless exactly six characters remain, and
    /// with [`CodeError::NonDigit`] when any of them is not a decimal
    /// digit (position in the error is 1-based).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let count = trimmed.chars().count();
        if count != CODE_LEN {
            return Err(CodeError::Length { found: count });
        }
        let mut digits = [0u8; CODE_LEN];
        for (i, ch) in trimmed.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits[i] = d as u8,
                None => {
                    return Err(CodeError::NonDigit {
                        ch,
                        position: i + 1,
                    });
                }
            }
        }
        Ok(Self(digits))
    }

    /// Construct a code from six digit values.
    ///
    /// Fails with [`CodeError::DigitRange`] when any element is greater
    /// than 9.
    pub fn from_digits(digits: [u8; CODE_LEN]) -> Result<Self> {
        if let Some(&value) = digits.iter().find(|&&d| d > 9) {
            return Err(CodeError::DigitRange { value });
        }
        Ok(Self(digits))
    }

    /// Construct a code from digit values, reducing each modulo 10.
    ///
    /// For callers whose arithmetic already works modulo 10 (checksum
    /// derivation, the increment transform) and therefore cannot produce
    /// an out-of-range digit in the first place.
    pub fn from_digits_mod10(digits: [u8; CODE_LEN]) -> Self {
        Self(digits.map(|d| d % 10))
    }

    /// The digits d1..d6 as an array (index 0 holds d1).
    pub fn digits(&self) -> [u8; CODE_LEN] {
        self.0
    }

    /// Get a digit by 1-based position (d1..d6).
    ///
    /// # Panics
    ///
    /// Panics when `position` is 0 or greater than 6. Out-of-range
    /// positions are programmer errors, not input errors.
    pub fn get(&self, position: usize) -> u8 {
        assert!(
            (1..=CODE_LEN).contains(&position),
            "digit position must be 1..=6, got {position}"
        );
        self.0[position - 1]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Serde round-trips through the canonical 6-character string so the
// shell's JSON output shows "951093" rather than a digit array.
impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
