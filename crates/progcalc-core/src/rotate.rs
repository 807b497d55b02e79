//! Shifts, rotations and complement within a word.
//!
//! Shifts are applied to a [`BigUint`], which never truncates, and every
//! result is masked back into the word afterwards.

use num_bigint::BigUint;
use progcalc_model::{BitwiseOp, WordSize};

use crate::radix::{mask, max_value};

/// Rotates `n` left by `positions` bits within the word.
///
/// `n` is masked first and `positions` is taken modulo the word size, so
/// rotating by a multiple of the word size returns the masked input.
pub fn rotate_left(n: &BigUint, positions: u32, word_size: WordSize) -> BigUint {
    let bits = word_size.bits();
    let positions = positions % bits;
    let value = mask(n, word_size);
    if positions == 0 {
        return value;
    }
    let high = mask(&(&value << positions), word_size);
    let low = &value >> (bits - positions);
    mask(&(high | low), word_size)
}

/// Rotates `n` right by `positions` bits within the word.
pub fn rotate_right(n: &BigUint, positions: u32, word_size: WordSize) -> BigUint {
    let bits = word_size.bits();
    let positions = positions % bits;
    let value = mask(n, word_size);
    if positions == 0 {
        return value;
    }
    let low = &value >> positions;
    let high = mask(&(&value << (bits - positions)), word_size);
    mask(&(high | low), word_size)
}

/// Logical shift left; bits pushed past the top of the word are lost.
pub fn shift_left(n: &BigUint, positions: u32, word_size: WordSize) -> BigUint {
    mask(&(mask(n, word_size) << positions), word_size)
}

/// Logical shift right; zeroes enter from the top.
pub fn shift_right(n: &BigUint, positions: u32, word_size: WordSize) -> BigUint {
    mask(n, word_size) >> positions
}

/// Bitwise complement, masked after inversion.
pub fn complement(n: &BigUint, word_size: WordSize) -> BigUint {
    mask(n, word_size) ^ max_value(word_size)
}

/// Applies a single-step bitwise button to `n`.
pub fn apply_bitwise(op: BitwiseOp, n: &BigUint, word_size: WordSize) -> BigUint {
    match op {
        BitwiseOp::Not => complement(n, word_size),
        BitwiseOp::Lsh => shift_left(n, 1, word_size),
        BitwiseOp::Rsh => shift_right(n, 1, word_size),
        BitwiseOp::Rol => rotate_left(n, 1, word_size),
        BitwiseOp::Ror => rotate_right(n, 1, word_size),
    }
}
