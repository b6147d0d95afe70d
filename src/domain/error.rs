//! Domain Error Types
//!
//! Errors raised while turning raw input into values the humanizer accepts.
//! The humanizer itself never fails once it has a `Decimal`.

use thiserror::Error;

/// Errors produced at the edges of the domain (parsing input).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HumanizeError {
    /// Input cannot be interpreted as a decimal number
    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(String),

    /// A digit sequence contained something other than `0`-`9`
    #[error("Invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// A raw digit was above 9
    #[error("Digit value {value} at position {position} is out of range")]
    DigitOutOfRange { position: usize, value: u8 },

    /// A digit sequence needs at least one digit
    #[error("Digit sequence is empty")]
    EmptyDigits,
}

impl HumanizeError {
    /// Create an invalid decimal error
    pub fn invalid_decimal(input: impl Into<String>) -> Self {
        Self::InvalidDecimal(input.into())
    }
}
