//! Accumulator arithmetic under word-size masking.

use num_bigint::BigUint;
use num_traits::Zero;
use progcalc_model::{ArithmeticOp, WordSize};

use crate::error::{CalcError, Result};
use crate::radix::{mask, modulus};

/// Left-hand side and operator waiting for the next operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    pub op: ArithmeticOp,
    pub operand: BigUint,
}

impl PendingOperation {
    pub fn new(op: ArithmeticOp, operand: BigUint) -> Self {
        Self { op, operand }
    }

    /// Computes `operand op rhs` without consuming the pending state.
    pub fn resolve(&self, rhs: &BigUint, word_size: WordSize) -> Result<BigUint> {
        evaluate(self.op, &self.operand, rhs, word_size)
    }
}

/// Evaluates `lhs op rhs` on unsigned magnitudes, masked to the word.
///
/// Subtraction wraps around like fixed-width hardware: `0 - 1` in an 8-bit
/// word is `255`. Division is floor division.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing by zero.
pub fn evaluate(
    op: ArithmeticOp,
    lhs: &BigUint,
    rhs: &BigUint,
    word_size: WordSize,
) -> Result<BigUint> {
    let result = match op {
        ArithmeticOp::Add => lhs + rhs,
        ArithmeticOp::Sub => mask(lhs, word_size) + modulus(word_size) - mask(rhs, word_size),
        ArithmeticOp::Mul => lhs * rhs,
        ArithmeticOp::Div => {
            if rhs.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    Ok(mask(&result, word_size))
}
