//! Bounded display log of resolved operations, newest first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Append-only history; never read back by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Adds an entry at the front and evicts beyond the limit.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        while self.entries.len() > self.limit {
            if let Some(evicted) = self.entries.pop_back() {
                trace!(entry = %evicted, "history entry evicted");
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// `lhs symbol rhs = result`
pub(crate) fn format_binary(lhs: &str, symbol: &str, rhs: &str, result: &str) -> String {
    format!("{lhs} {symbol} {rhs} = {result}")
}

/// `OP operand = result`
pub(crate) fn format_unary(symbol: &str, operand: &str, result: &str) -> String {
    format!("{symbol} {operand} = {result}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut history = History::new(3);
        history.push("a");
        history.push("b");
        assert_eq!(history.latest(), Some("b"));
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn evicts_oldest_beyond_limit() {
        let mut history = History::new(20);
        for i in 0..25 {
            history.push(format!("entry {i}"));
        }
        assert_eq!(history.len(), 20);
        assert_eq!(history.latest(), Some("entry 24"));
        assert_eq!(history.entries().last(), Some("entry 5"));
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        history.push("dropped");
        assert!(history.is_empty());
    }

    #[test]
    fn huge_limit_does_not_preallocate() {
        let mut history = History::new(usize::MAX);
        history.push("only");
        assert_eq!(history.len(), 1);
        assert_eq!(history.limit(), usize::MAX);
    }

    #[test]
    fn entry_formats() {
        assert_eq!(format_binary("5", "+", "3", "8"), "5 + 3 = 8");
        assert_eq!(format_unary("NOT", "FF", "0"), "NOT FF = 0");
    }
}
