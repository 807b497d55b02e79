//! Error types for the calculator engine.
//!
//! [`CalcError`] is the structured rejection handed back by every fallible
//! operation. A rejected operation leaves the calculator untouched.

use progcalc_model::{Base, WordSize};
use thiserror::Error;

/// Failure to read digits or a stored expression back into a magnitude.
///
/// Keystrokes are validated before they reach the parser, so this only
/// surfaces when text from outside the engine is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty digit string")]
    Empty,
    #[error("digit '{digit}' is not valid in base {base}")]
    InvalidDigit { digit: char, base: Base },
    #[error("malformed logic expression: {0:?}")]
    MalformedExpression(String),
}

/// Rejection reason returned by calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Digit outside the active base's alphabet.
    #[error("digit '{digit}' is not valid in base {base}")]
    InvalidDigit { digit: char, base: Base },

    /// Input would exceed the largest value representable in the word.
    #[error("limit reached: value does not fit in a {word_size} word")]
    LimitReached { word_size: WordSize },

    /// Divisor was zero; the pending operation is kept for a retry.
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CalcError {
    /// Returns true for rejections a user should see as a transient notice.
    ///
    /// Parse failures indicate inconsistent engine input rather than a
    /// keystroke the user can correct.
    pub fn is_notice(&self) -> bool {
        !matches!(self, CalcError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
