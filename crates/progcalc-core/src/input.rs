//! Keystroke gating for the current entry.

use progcalc_model::{Base, WordSize};

use crate::error::{CalcError, Result};
use crate::radix::{fits, from_text};

/// Appends `digit` to `current` if the result is valid for the base and word.
///
/// A current entry of `0` (or an empty one) is replaced rather than
/// extended. Hex letters are normalized to uppercase.
///
/// # Errors
///
/// - [`CalcError::InvalidDigit`] if `digit` is outside the base's alphabet.
/// - [`CalcError::LimitReached`] if the new value would exceed the word.
pub fn try_append_digit(
    current: &str,
    digit: char,
    base: Base,
    word_size: WordSize,
) -> Result<String> {
    if !base.accepts(digit) {
        return Err(CalcError::InvalidDigit { digit, base });
    }
    let digit = digit.to_ascii_uppercase();
    let candidate = if current.is_empty() || current == "0" {
        digit.to_string()
    } else {
        format!("{current}{digit}")
    };
    let value = from_text(&candidate, base)?;
    if !fits(&value, word_size) {
        return Err(CalcError::LimitReached { word_size });
    }
    Ok(candidate)
}

/// Removes the last digit, leaving `0` once the entry is exhausted.
pub fn drop_last_digit(current: &str) -> String {
    let mut chars = current.chars();
    chars.next_back();
    let rest = chars.as_str();
    if rest.is_empty() {
        "0".to_string()
    } else {
        rest.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_leading_zero() {
        assert_eq!(
            try_append_digit("0", '7', Base::Dec, WordSize::W8).unwrap(),
            "7"
        );
        assert_eq!(
            try_append_digit("", '1', Base::Bin, WordSize::W8).unwrap(),
            "1"
        );
        assert_eq!(
            try_append_digit("0", '0', Base::Dec, WordSize::W8).unwrap(),
            "0"
        );
    }

    #[test]
    fn appends_within_alphabet() {
        assert_eq!(
            try_append_digit("1F", 'a', Base::Hex, WordSize::W16).unwrap(),
            "1FA"
        );
        assert_eq!(
            try_append_digit("7", '7', Base::Oct, WordSize::W8).unwrap(),
            "77"
        );
    }

    #[test]
    fn rejects_digit_outside_alphabet() {
        assert_eq!(
            try_append_digit("1", '2', Base::Bin, WordSize::W8),
            Err(CalcError::InvalidDigit {
                digit: '2',
                base: Base::Bin
            })
        );
        assert!(matches!(
            try_append_digit("1", 'A', Base::Dec, WordSize::W8),
            Err(CalcError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn rejects_overflow_at_capacity() {
        assert_eq!(
            try_append_digit("1", '6', Base::Dec, WordSize::W4),
            Err(CalcError::LimitReached {
                word_size: WordSize::W4
            })
        );
        assert_eq!(
            try_append_digit("1", '5', Base::Dec, WordSize::W4).unwrap(),
            "15"
        );
        assert!(try_append_digit("FF", '0', Base::Hex, WordSize::W8).is_err());
    }

    #[test]
    fn backspace_stops_at_zero() {
        assert_eq!(drop_last_digit("1A"), "1");
        assert_eq!(drop_last_digit("7"), "0");
        assert_eq!(drop_last_digit("0"), "0");
    }
}
