//! Owned snapshot of a calculator, for hosts that render or persist it.

use progcalc_model::{ArithmeticOp, Base, WordSize};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a front end displays.
///
/// Numeric fields are rendered as text in `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub value: String,
    pub base: Base,
    pub word_size: WordSize,
    pub pending_operation: Option<ArithmeticOp>,
    pub operand: Option<String>,
    pub expression: Option<String>,
    pub history: Vec<String>,
}

impl CalculatorState {
    /// Returns true when neither an arithmetic nor a logic operation is pending.
    pub fn is_idle(&self) -> bool {
        self.pending_operation.is_none() && self.expression.is_none()
    }
}
