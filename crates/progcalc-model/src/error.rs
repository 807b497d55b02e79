use thiserror::Error;

/// Errors raised while parsing model values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown base: {0}")]
    UnknownBase(String),
    #[error("unsupported word size: {0} bits (expected one of 4, 8, 16, 32, 64, 128, 256)")]
    UnsupportedWordSize(u32),
    #[error("invalid word size: {0} (expected bits such as 32, w32 or 32-bit)")]
    InvalidWordSize(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
