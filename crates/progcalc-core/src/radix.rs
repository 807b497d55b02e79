//! Conversion between magnitudes and digit text, and word-size masking.
//!
//! All arithmetic is done on [`BigUint`] for every word size, so a 256-bit
//! word is handled by exactly the same code path as a 4-bit one.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use progcalc_model::{Base, WordSize};

use crate::error::ParseError;

/// Renders `n` in `base`. Hex digits are uppercase and zero renders as `0`.
pub fn to_text(n: &BigUint, base: Base) -> String {
    let mut text = n.to_str_radix(base.radix());
    text.make_ascii_uppercase();
    text
}

/// Parses digits of `base` into a magnitude.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for an empty string and
/// [`ParseError::InvalidDigit`] for any character outside the base's alphabet.
pub fn from_text(text: &str, base: Base) -> Result<BigUint, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let radix = BigUint::from(base.radix());
    let mut value = BigUint::zero();
    for digit in text.chars() {
        let digit_value = base
            .digit_value(digit)
            .ok_or(ParseError::InvalidDigit { digit, base })?;
        value = value * &radix + digit_value;
    }
    Ok(value)
}

/// `2^bits` for the word size.
pub fn modulus(word_size: WordSize) -> BigUint {
    BigUint::one() << word_size.bits()
}

/// Largest representable value, `2^bits - 1`.
pub fn max_value(word_size: WordSize) -> BigUint {
    modulus(word_size) - 1u32
}

/// Reduces `n` modulo `2^bits`.
pub fn mask(n: &BigUint, word_size: WordSize) -> BigUint {
    n & max_value(word_size)
}

/// Returns true if `n` fits in the word without masking.
pub fn fits(n: &BigUint, word_size: WordSize) -> bool {
    n.bits() <= u64::from(word_size.bits())
}

/// Renders `n` left-padded to the full word width.
///
/// Only power-of-two bases are padded; decimal has no fixed digit count per
/// word and is returned unpadded.
pub fn pad_text(n: &BigUint, base: Base, word_size: WordSize) -> String {
    let text = to_text(n, base);
    let Some(bits_per_digit) = base.bits_per_digit() else {
        return text;
    };
    let width = word_size.bits().div_ceil(bits_per_digit) as usize;
    format!("{text:0>width$}")
}

/// Renders the masked value as binary grouped into nibbles, high bits first.
pub fn describe_bits(n: &BigUint, word_size: WordSize) -> String {
    let padded = pad_text(&mask(n, word_size), Base::Bin, word_size);
    let nibbles: Vec<&str> = padded
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    nibbles.join(" ")
}
