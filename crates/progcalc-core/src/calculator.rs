//! The calculator state owner.
//!
//! [`Calculator`] holds the current value, base, word size, the pending
//! arithmetic operation, the pending logic expression and the history. It is
//! mutated only through its operations, each of which either commits a new
//! state or returns a [`CalcError`] and leaves the state untouched.
//!
//! # Entry behaviour
//!
//! After a result is produced (`=`, a chained operator, a bitwise button or a
//! resolved logic chain) the display shows the result, and the next digit
//! starts a fresh entry instead of extending it.

use num_bigint::BigUint;
use num_traits::Zero;
use progcalc_model::{ArithmeticOp, Base, BitwiseOp, CalculatorOptions, Key, LogicOp, WordSize};
use tracing::debug;

use crate::arithmetic::PendingOperation;
use crate::error::{CalcError, Result};
use crate::history::{History, format_binary, format_unary};
use crate::input::{drop_last_digit, try_append_digit};
use crate::logic::{arm_expression, evaluate_logic, parse_expression};
use crate::radix::{fits, from_text, mask, pad_text, to_text};
use crate::rotate::apply_bitwise;
use crate::state::CalculatorState;

/// Fixed-width integer calculator engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    value: BigUint,
    base: Base,
    word_size: WordSize,
    pending: Option<PendingOperation>,
    expression: Option<String>,
    history: History,
    fresh_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorOptions::default())
    }
}

impl Calculator {
    /// Creates a calculator showing `0` with no pending operation.
    pub fn new(options: CalculatorOptions) -> Self {
        Self {
            value: BigUint::zero(),
            base: options.base,
            word_size: options.word_size,
            pending: None,
            expression: None,
            history: History::new(options.history_limit),
            fresh_entry: false,
        }
    }

    /// Current value rendered in the active base.
    pub fn value(&self) -> String {
        to_text(&self.value, self.base)
    }

    /// Current value left-padded to the full word width.
    pub fn padded_value(&self) -> String {
        pad_text(&self.value, self.base, self.word_size)
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.value
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub fn pending_operation(&self) -> Option<ArithmeticOp> {
        self.pending.as_ref().map(|pending| pending.op)
    }

    pub fn operand(&self) -> Option<&BigUint> {
        self.pending.as_ref().map(|pending| &pending.operand)
    }

    /// Pending logic expression, e.g. `FF(HEX) AND`.
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn snapshot(&self) -> CalculatorState {
        CalculatorState {
            value: self.value(),
            base: self.base,
            word_size: self.word_size,
            pending_operation: self.pending_operation(),
            operand: self.operand().map(|operand| to_text(operand, self.base)),
            expression: self.expression.clone(),
            history: self.history.to_vec(),
        }
    }

    /// Routes a key press to the matching operation.
    pub fn dispatch(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Arithmetic(op) => self.apply_arithmetic_op(op),
            Key::Bitwise(op) => {
                self.apply_bitwise_op(op);
                Ok(())
            }
            Key::Logic(op) => self.apply_logic_op(op),
            Key::Execute => self.execute(),
            Key::Clear => {
                self.clear();
                Ok(())
            }
            Key::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
            Key::Backspace => {
                self.backspace();
                Ok(())
            }
            Key::SetBase(base) => {
                self.set_base(base);
                Ok(())
            }
            Key::SetWordSize(size) => {
                self.set_word_size(size);
                Ok(())
            }
        }
    }

    /// Switches the display base; the magnitude is unchanged.
    pub fn set_base(&mut self, base: Base) {
        self.base = base;
        debug!(base = %base, value = %self.value(), "base changed");
    }

    /// Switches the word size, silently truncating the value to the new width.
    ///
    /// A pending arithmetic operand is truncated the same way.
    pub fn set_word_size(&mut self, word_size: WordSize) {
        self.word_size = word_size;
        self.value = mask(&self.value, word_size);
        if let Some(pending) = self.pending.as_mut() {
            pending.operand = mask(&pending.operand, word_size);
        }
        debug!(bits = word_size.bits(), value = %self.value(), "word size changed");
    }

    /// Appends a digit to the current entry.
    ///
    /// # Errors
    ///
    /// [`CalcError::InvalidDigit`] or [`CalcError::LimitReached`]; the entry
    /// is left as it was.
    pub fn input_digit(&mut self, digit: char) -> Result<()> {
        let current = if self.fresh_entry {
            "0".to_string()
        } else {
            self.value()
        };
        let accepted = try_append_digit(&current, digit, self.base, self.word_size)
            .inspect_err(|error| debug!(%digit, %error, "digit rejected"))?;
        self.value = from_text(&accepted, self.base)?;
        self.fresh_entry = false;
        Ok(())
    }

    /// Replaces the current entry with `text` parsed in `base`.
    ///
    /// # Errors
    ///
    /// Parse errors for malformed text, [`CalcError::LimitReached`] if the
    /// value does not fit the word. Oversized input is never truncated.
    pub fn load_value(&mut self, text: &str, base: Base) -> Result<()> {
        let value = from_text(text.trim(), base)?;
        if !fits(&value, self.word_size) {
            return Err(CalcError::LimitReached {
                word_size: self.word_size,
            });
        }
        self.value = value;
        self.fresh_entry = false;
        debug!(value = %self.value(), base = %self.base, "value loaded");
        Ok(())
    }

    /// Arms an arithmetic operator, resolving any operation already pending.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when a pending division has a zero
    /// divisor; the pending operation and value are kept for a retry.
    pub fn apply_arithmetic_op(&mut self, op: ArithmeticOp) -> Result<()> {
        match self.pending.take() {
            None => {
                let operand = std::mem::take(&mut self.value);
                self.pending = Some(PendingOperation::new(op, operand));
                self.fresh_entry = false;
                debug!(op = op.as_str(), "operation armed");
            }
            Some(pending) => {
                let result = match self.resolve(&pending) {
                    Ok(result) => result,
                    Err(error) => {
                        self.pending = Some(pending);
                        return Err(error);
                    }
                };
                self.value = result.clone();
                self.pending = Some(PendingOperation::new(op, result));
                self.fresh_entry = true;
                debug!(op = op.as_str(), value = %self.value(), "operation chained");
            }
        }
        Ok(())
    }

    /// Resolves the pending arithmetic operation and returns to idle.
    ///
    /// Does nothing when no operation is pending.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`], with the state left intact.
    pub fn execute(&mut self) -> Result<()> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        match self.resolve(&pending) {
            Ok(result) => {
                self.value = result;
                self.fresh_entry = true;
                debug!(value = %self.value(), base = %self.base, "executed");
                Ok(())
            }
            Err(error) => {
                self.pending = Some(pending);
                Err(error)
            }
        }
    }

    /// Applies NOT, LSH, RSH, ROL or ROR to the current value immediately.
    pub fn apply_bitwise_op(&mut self, op: BitwiseOp) {
        let before = self.value();
        self.value = apply_bitwise(op, &self.value, self.word_size);
        self.fresh_entry = true;
        let after = self.value();
        self.history.push(format_unary(op.as_str(), &before, &after));
        debug!(op = op.as_str(), value = %after, bits = self.word_size.bits(), "bitwise applied");
    }

    /// Arms or resolves the two-step logic chain.
    ///
    /// With no pending expression, the current value and `op` are recorded
    /// and the value is left unchanged. With one pending, the left operand is
    /// parsed back from the expression and combined with the current value
    /// using the operator recorded when the chain was armed. The history line
    /// shows `op`, the operator pressed second.
    ///
    /// # Errors
    ///
    /// Parse errors if the stored expression cannot be read back.
    pub fn apply_logic_op(&mut self, op: LogicOp) -> Result<()> {
        let Some(expression) = self.expression.as_deref() else {
            let armed = arm_expression(&self.value, self.base, op);
            debug!(expression = %armed, "logic chain armed");
            self.expression = Some(armed);
            self.fresh_entry = true;
            return Ok(());
        };
        let parsed = parse_expression(expression)?;
        let result = evaluate_logic(parsed.op, &parsed.operand, &self.value, self.word_size);
        let entry = format_binary(
            &to_text(&parsed.operand, self.base),
            op.as_str(),
            &self.value(),
            &to_text(&result, self.base),
        );
        self.history.push(entry);
        self.value = result;
        self.expression = None;
        self.fresh_entry = true;
        debug!(
            armed = parsed.op.as_str(),
            pressed = op.as_str(),
            value = %self.value(),
            "logic chain resolved"
        );
        Ok(())
    }

    /// Resets value, expression and pending operation. History is kept.
    pub fn clear(&mut self) {
        self.value = BigUint::zero();
        self.expression = None;
        self.pending = None;
        self.fresh_entry = false;
        debug!("cleared");
    }

    /// Resets only the current entry.
    pub fn clear_entry(&mut self) {
        self.value = BigUint::zero();
        self.fresh_entry = false;
    }

    /// Drops the last digit of the entry being typed.
    ///
    /// A displayed result is not an entry and is left alone.
    pub fn backspace(&mut self) {
        if self.fresh_entry {
            return;
        }
        let remaining = drop_last_digit(&self.value());
        if let Ok(value) = from_text(&remaining, self.base) {
            self.value = value;
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Computes the pending operation against the current value and logs it.
    fn resolve(&mut self, pending: &PendingOperation) -> Result<BigUint> {
        let result = pending
            .resolve(&self.value, self.word_size)
            .inspect_err(|error| debug!(op = pending.op.as_str(), %error, "operation rejected"))?;
        self.history.push(format_binary(
            &to_text(&pending.operand, self.base),
            pending.op.symbol(),
            &self.value(),
            &to_text(&result, self.base),
        ));
        Ok(result)
    }
}
