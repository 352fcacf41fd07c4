//! Prompt rejection taxonomy.
//!
//! Every variant is locally recovered by the prompt engine: the `Display`
//! string is written to the stream as the operator-facing explanation and
//! the engine either retries or falls back to the caller's default. None
//! of these are fatal; stream I/O failures are `io::Error` and travel
//! separately.

use std::fmt;
use thiserror::Error;

/// Why a prompt attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No complete line arrived within the configured timeout.
    #[error("! Timeout.")]
    Timeout,

    /// Input could not be parsed as the requested number type.
    #[error("! Invalid number. Please enter a base-10 {0}.")]
    ParseFailure(NumberKind),

    /// Parsed value fell outside the allowed range.
    #[error("! Out of range [{min}..{max}].")]
    RangeViolation { min: String, max: String },

    /// String length fell outside the allowed bounds.
    #[error("! Length must be in [{min}..{max}] chars.")]
    LengthViolation { min: usize, max: usize },

    /// Input was not a recognized yes/no answer.
    #[error("! Please answer 'y' or 'n'.")]
    InvalidChoice,
}

impl Error {
    /// Range violation with the (already normalized) bounds formatted in.
    pub(crate) fn range<T: fmt::Display>(min: T, max: T) -> Self {
        Error::RangeViolation {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// What kind of number a numeric prompt expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("integer"),
            NumberKind::Decimal => f.write_str("decimal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_messages() {
        assert_eq!(Error::Timeout.to_string(), "! Timeout.");
        assert_eq!(
            Error::ParseFailure(NumberKind::Integer).to_string(),
            "! Invalid number. Please enter a base-10 integer."
        );
        assert_eq!(
            Error::ParseFailure(NumberKind::Decimal).to_string(),
            "! Invalid number. Please enter a base-10 decimal."
        );
        assert_eq!(Error::range(0, 100).to_string(), "! Out of range [0..100].");
        assert_eq!(
            Error::LengthViolation { min: 3, max: 10 }.to_string(),
            "! Length must be in [3..10] chars."
        );
        assert_eq!(
            Error::InvalidChoice.to_string(),
            "! Please answer 'y' or 'n'."
        );
    }
}
