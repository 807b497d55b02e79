//! Two-step binary logic chain (AND, OR, XOR, NAND, NOR).
//!
//! Unlike the arithmetic accumulator, the left operand is not kept as a
//! number. It is stored as expression text of the form `FF(HEX) AND`, which
//! records the digits, the base they were entered in, and the operator that
//! armed the chain. The text is parsed back when the chain resolves, so a
//! base switch in between does not change the left operand.

use num_bigint::BigUint;
use progcalc_model::{Base, LogicOp, WordSize};

use crate::error::ParseError;
use crate::radix::{from_text, mask, max_value, to_text};

/// Builds the pending expression text for `value` and `op`.
pub fn arm_expression(value: &BigUint, base: Base, op: LogicOp) -> String {
    format!("{}({}) {}", to_text(value, base), base.label(), op.as_str())
}

/// Left operand and armed operator recovered from an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    pub operand: BigUint,
    pub base: Base,
    pub op: LogicOp,
}

/// Parses text produced by [`arm_expression`].
///
/// # Errors
///
/// Returns [`ParseError::MalformedExpression`] if the layout does not match,
/// or the digit errors from [`from_text`].
pub fn parse_expression(expression: &str) -> Result<ParsedExpression, ParseError> {
    let malformed = || ParseError::MalformedExpression(expression.to_string());
    let (operand_part, op_part) = expression.trim().split_once(' ').ok_or_else(malformed)?;
    let (digits, base_label) = operand_part
        .strip_suffix(')')
        .and_then(|rest| rest.split_once('('))
        .ok_or_else(malformed)?;
    let base: Base = base_label.parse().map_err(|_| malformed())?;
    let op: LogicOp = op_part.parse().map_err(|_| malformed())?;
    let operand = from_text(digits, base)?;
    Ok(ParsedExpression { operand, base, op })
}

/// Applies `op` bitwise, masked to the word.
///
/// NAND and NOR complement the full result before masking, so the high bits
/// beyond the word never leak into the value.
pub fn evaluate_logic(op: LogicOp, lhs: &BigUint, rhs: &BigUint, word_size: WordSize) -> BigUint {
    let lhs = mask(lhs, word_size);
    let rhs = mask(rhs, word_size);
    let result = match op {
        LogicOp::And => &lhs & &rhs,
        LogicOp::Or => &lhs | &rhs,
        LogicOp::Xor => &lhs ^ &rhs,
        LogicOp::Nand => (&lhs & &rhs) ^ max_value(word_size),
        LogicOp::Nor => (&lhs | &rhs) ^ max_value(word_size),
    };
    mask(&result, word_size)
}
