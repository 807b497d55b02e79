//! Numeric bases and word sizes.
//!
//! Both are closed sets. A [`WordSize`] outside the supported widths cannot
//! be constructed, so code downstream of parsing never has to handle one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Display base of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Base {
    /// Base 2, alphabet `01`.
    #[serde(alias = "bin")]
    Bin,
    /// Base 8, alphabet `01234567`.
    #[serde(alias = "oct")]
    Oct,
    /// Base 10, alphabet `0-9`.
    #[default]
    #[serde(alias = "dec")]
    Dec,
    /// Base 16, alphabet `0-9A-F`.
    #[serde(alias = "hex")]
    Hex,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Bin, Base::Oct, Base::Dec, Base::Hex];

    pub fn radix(&self) -> u32 {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::Hex => 16,
        }
    }

    /// Short uppercase label used in expressions and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Base::Bin => "BIN",
            Base::Oct => "OCT",
            Base::Dec => "DEC",
            Base::Hex => "HEX",
        }
    }

    /// Returns the numeric value of `digit` if it belongs to this base's alphabet.
    ///
    /// Hex letters are accepted in either case.
    pub fn digit_value(&self, digit: char) -> Option<u32> {
        digit.to_digit(self.radix())
    }

    /// Returns true if `digit` belongs to this base's alphabet.
    pub fn accepts(&self, digit: char) -> bool {
        self.digit_value(digit).is_some()
    }

    /// Bits carried by one digit, for bases that are powers of two.
    pub fn bits_per_digit(&self) -> Option<u32> {
        match self {
            Base::Bin => Some(1),
            Base::Oct => Some(3),
            Base::Dec => None,
            Base::Hex => Some(4),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Base {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "bin" | "binary" | "2" => Ok(Base::Bin),
            "oct" | "octal" | "8" => Ok(Base::Oct),
            "dec" | "decimal" | "10" => Ok(Base::Dec),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hex),
            _ => Err(ModelError::UnknownBase(s.to_string())),
        }
    }
}

/// Fixed bit width applied to every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordSize {
    W4,
    W8,
    W16,
    #[default]
    W32,
    W64,
    W128,
    W256,
}

impl WordSize {
    pub const ALL: [WordSize; 7] = [
        WordSize::W4,
        WordSize::W8,
        WordSize::W16,
        WordSize::W32,
        WordSize::W64,
        WordSize::W128,
        WordSize::W256,
    ];

    pub fn bits(&self) -> u32 {
        match self {
            WordSize::W4 => 4,
            WordSize::W8 => 8,
            WordSize::W16 => 16,
            WordSize::W32 => 32,
            WordSize::W64 => 64,
            WordSize::W128 => 128,
            WordSize::W256 => 256,
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl TryFrom<u32> for WordSize {
    type Error = ModelError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        WordSize::ALL
            .into_iter()
            .find(|size| size.bits() == bits)
            .ok_or(ModelError::UnsupportedWordSize(bits))
    }
}

impl From<WordSize> for u32 {
    fn from(size: WordSize) -> Self {
        size.bits()
    }
}

impl FromStr for WordSize {
    type Err = ModelError;

    /// Accepts `32`, `w32` or `32-bit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_prefix('w')
            .unwrap_or(&normalized)
            .trim_end_matches("-bit")
            .trim_end_matches("bit");
        let bits: u32 = digits
            .parse()
            .map_err(|_| ModelError::InvalidWordSize(s.to_string()))?;
        WordSize::try_from(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_from_str() {
        assert_eq!("hex".parse::<Base>().unwrap(), Base::Hex);
        assert_eq!("BINARY".parse::<Base>().unwrap(), Base::Bin);
        assert_eq!(" 8 ".parse::<Base>().unwrap(), Base::Oct);
        assert!("base64".parse::<Base>().is_err());
    }

    #[test]
    fn base_alphabets() {
        assert!(Base::Bin.accepts('1'));
        assert!(!Base::Bin.accepts('2'));
        assert!(Base::Oct.accepts('7'));
        assert!(!Base::Oct.accepts('8'));
        assert!(!Base::Dec.accepts('A'));
        assert_eq!(Base::Hex.digit_value('F'), Some(15));
        assert_eq!(Base::Hex.digit_value('f'), Some(15));
        assert!(!Base::Hex.accepts('G'));
    }

    #[test]
    fn word_size_rejects_unsupported_widths() {
        assert_eq!(WordSize::try_from(64).unwrap(), WordSize::W64);
        assert_eq!(
            WordSize::try_from(12),
            Err(ModelError::UnsupportedWordSize(12))
        );
        assert_eq!("w128".parse::<WordSize>().unwrap(), WordSize::W128);
        assert_eq!("16-bit".parse::<WordSize>().unwrap(), WordSize::W16);
        assert_eq!(
            "wide".parse::<WordSize>(),
            Err(ModelError::InvalidWordSize("wide".to_string()))
        );
        assert_eq!(
            "24".parse::<WordSize>(),
            Err(ModelError::UnsupportedWordSize(24))
        );
    }

    #[test]
    fn word_sizes_are_ordered() {
        let bits: Vec<u32> = WordSize::ALL.iter().map(WordSize::bits).collect();
        assert_eq!(bits, vec![4, 8, 16, 32, 64, 128, 256]);
    }
}
