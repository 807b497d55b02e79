//! Key messages sent from a front end to the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{Base, WordSize};
use crate::error::{ModelError, Result};
use crate::ops::{ArithmeticOp, BitwiseOp, LogicOp};

/// One user interaction with the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Append a digit to the current entry.
    Digit(char),
    Arithmetic(ArithmeticOp),
    Bitwise(BitwiseOp),
    Logic(LogicOp),
    /// `=`: resolve the pending arithmetic operation.
    Execute,
    /// Reset value, expression and pending operation.
    Clear,
    /// Reset only the current entry.
    ClearEntry,
    /// Drop the last digit of the current entry.
    Backspace,
    SetBase(Base),
    SetWordSize(WordSize),
}

impl Key {
    /// Expands a token into keys.
    ///
    /// Keywords are matched first, so `add` is the ADD operator and `dec` the
    /// base switch. Any other token made only of hex digits becomes one
    /// [`Key::Digit`] per character; whether each digit is valid for the
    /// active base is decided by the engine, not here.
    pub fn parse_token(token: &str) -> Result<Vec<Key>> {
        if let Ok(key) = token.parse::<Key>() {
            return Ok(vec![key]);
        }
        let trimmed = token.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(trimmed
                .chars()
                .map(|c| Key::Digit(c.to_ascii_uppercase()))
                .collect());
        }
        Err(ModelError::UnknownKey(token.to_string()))
    }
}

impl FromStr for Key {
    type Err = ModelError;

    /// Parses a single keyword or a single digit.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();
        match lowered.as_str() {
            "=" | "eq" => return Ok(Key::Execute),
            "clear" | "clr" => return Ok(Key::Clear),
            "ce" => return Ok(Key::ClearEntry),
            "bs" | "back" => return Ok(Key::Backspace),
            "bin" | "oct" | "dec" | "hex" => return lowered.parse().map(Key::SetBase),
            _ => {}
        }
        if let Some(bits) = lowered.strip_prefix('w')
            && let Ok(bits) = bits.parse::<u32>()
        {
            return WordSize::try_from(bits).map(Key::SetWordSize);
        }
        if let Ok(op) = trimmed.parse::<ArithmeticOp>() {
            return Ok(Key::Arithmetic(op));
        }
        if let Ok(op) = trimmed.parse::<BitwiseOp>() {
            return Ok(Key::Bitwise(op));
        }
        if let Ok(op) = trimmed.parse::<LogicOp>() {
            return Ok(Key::Logic(op));
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_hexdigit() => Ok(Key::Digit(c.to_ascii_uppercase())),
            _ => Err(ModelError::UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(digit) => write!(f, "{digit}"),
            Key::Arithmetic(op) => write!(f, "{op}"),
            Key::Bitwise(op) => write!(f, "{op}"),
            Key::Logic(op) => write!(f, "{op}"),
            Key::Execute => f.write_str("="),
            Key::Clear => f.write_str("CLEAR"),
            Key::ClearEntry => f.write_str("CE"),
            Key::Backspace => f.write_str("BS"),
            Key::SetBase(base) => write!(f, "{base}"),
            Key::SetWordSize(size) => write!(f, "W{}", size.bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_win_over_hex_digits() {
        assert_eq!(
            "add".parse::<Key>().unwrap(),
            Key::Arithmetic(ArithmeticOp::Add)
        );
        assert_eq!("dec".parse::<Key>().unwrap(), Key::SetBase(Base::Dec));
        assert_eq!("ce".parse::<Key>().unwrap(), Key::ClearEntry);
    }

    #[test]
    fn word_size_keys() {
        assert_eq!("w8".parse::<Key>().unwrap(), Key::SetWordSize(WordSize::W8));
        assert_eq!(
            "w12".parse::<Key>(),
            Err(ModelError::UnsupportedWordSize(12))
        );
    }

    #[test]
    fn digit_runs_expand() {
        let keys = Key::parse_token("fF0").unwrap();
        assert_eq!(keys, vec![Key::Digit('F'), Key::Digit('F'), Key::Digit('0')]);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(matches!(
            Key::parse_token("sqrt"),
            Err(ModelError::UnknownKey(_))
        ));
    }

    #[test]
    fn operators_parse_by_family() {
        assert_eq!("rol".parse::<Key>().unwrap(), Key::Bitwise(BitwiseOp::Rol));
        assert_eq!("nand".parse::<Key>().unwrap(), Key::Logic(LogicOp::Nand));
        assert_eq!("=".parse::<Key>().unwrap(), Key::Execute);
    }
}
