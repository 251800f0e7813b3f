//! Error types for code parsing, generation parameters, and batch limits.

use thiserror::Error;

/// Maximum number of codes a single batch may request.
pub const MAX_BATCH: usize = 5000;

/// Errors reported by the sixcode engine and its input types.
///
/// `Length` and `NonDigit` are format errors raised by parsing;
/// `DigitRange` rejects out-of-range generation parameters at
/// construction time; `BatchRange` rejects a batch count before any
/// code is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Input is not exactly six characters after trimming whitespace.
    #[error("expected exactly 6 digits, got {found} characters")]
    Length { found: usize },

    /// Input contains a character that is not a decimal digit.
    #[error("invalid character {ch:?} at position {position}, expected a decimal digit")]
    NonDigit { ch: char, position: usize },

    /// A digit value outside 0..=9.
    #[error("digit out of range: {value} (expected 0..=9)")]
    DigitRange { value: u8 },

    /// A batch count outside the accepted range.
    #[error("batch count out of range: {requested} (expected 1..={})", MAX_BATCH)]
    BatchRange { requested: usize },
}

impl CodeError {
    /// Whether this error was raised while parsing input text.
    ///
    /// The shell uses this to distinguish "fix your input" messages from
    /// parameter mistakes.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Length { .. } | Self::NonDigit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodeError::Length { found: 5 };
        assert_eq!(format!("{err}"), "expected exactly 6 digits, got 5 characters");

        let err = CodeError::NonDigit { ch: 'a', position: 3 };
        assert_eq!(
            format!("{err}"),
            "invalid character 'a' at position 3, expected a decimal digit"
        );

        let err = CodeError::BatchRange { requested: 9999 };
        assert_eq!(
            format!("{err}"),
            "batch count out of range: 9999 (expected 1..=5000)"
        );
    }

    #[test]
    fn test_is_format() {
        assert!(CodeError::Length { found: 0 }.is_format());
        assert!(CodeError::NonDigit { ch: 'x', position: 1 }.is_format());
        assert!(!CodeError::DigitRange { value: 12 }.is_format());
        assert!(!CodeError::BatchRange { requested: 0 }.is_format());
    }
}
