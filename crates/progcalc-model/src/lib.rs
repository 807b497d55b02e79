//! Value types for the fixed-width programmer calculator.
//!
//! Everything here is plain data: the numeric bases, the closed set of
//! supported word sizes, the operator families, the [`Key`] messages a
//! front end sends to the engine, and the [`CalculatorOptions`] used to
//! seed a fresh calculator.

pub mod enums;
pub mod error;
pub mod key;
pub mod ops;
pub mod options;

pub use enums::{Base, WordSize};
pub use error::{ModelError, Result};
pub use key::Key;
pub use ops::{ArithmeticOp, BitwiseOp, LogicOp};
pub use options::{CalculatorOptions, DEFAULT_HISTORY_LIMIT};
