//! Configuration options for a calculator session.

use serde::{Deserialize, Serialize};

use crate::enums::{Base, WordSize};

/// Number of history entries retained, newest first.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Options used to seed a fresh calculator.
///
/// Defaults reproduce the initial state of the engine: decimal display,
/// 32-bit words and a 20-entry history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorOptions {
    /// Initial display base.
    pub base: Base,
    /// Initial word size.
    pub word_size: WordSize,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            base: Base::Dec,
            word_size: WordSize::W32,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CalculatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn with_word_size(mut self, word_size: WordSize) -> Self {
        self.word_size = word_size;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
