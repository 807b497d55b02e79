//! Operator families.
//!
//! The three families follow different protocols in the engine, so they are
//! kept as separate types rather than one large operator enum:
//!
//! - [`ArithmeticOp`]: accumulator chain, operators may be chained.
//! - [`BitwiseOp`]: applied immediately to the current value.
//! - [`LogicOp`]: two-step left/right evaluation, one pending at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Two-operand arithmetic under word-size masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "ADD",
            ArithmeticOp::Sub => "SUB",
            ArithmeticOp::Mul => "MUL",
            ArithmeticOp::Div => "DIV",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ArithmeticOp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "+" | "ADD" => Ok(ArithmeticOp::Add),
            "-" | "SUB" => Ok(ArithmeticOp::Sub),
            "*" | "X" | "MUL" => Ok(ArithmeticOp::Mul),
            "/" | "DIV" => Ok(ArithmeticOp::Div),
            _ => Err(ModelError::UnknownOperator(s.to_string())),
        }
    }
}

/// Single-operand transforms of the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BitwiseOp {
    /// Complement within the word.
    Not,
    /// Shift left by one, high bit lost.
    Lsh,
    /// Shift right by one, low bit lost.
    Rsh,
    /// Rotate left by one within the word.
    Rol,
    /// Rotate right by one within the word.
    Ror,
}

impl BitwiseOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitwiseOp::Not => "NOT",
            BitwiseOp::Lsh => "LSH",
            BitwiseOp::Rsh => "RSH",
            BitwiseOp::Rol => "ROL",
            BitwiseOp::Ror => "ROR",
        }
    }
}

impl fmt::Display for BitwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BitwiseOp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NOT" | "~" => Ok(BitwiseOp::Not),
            "LSH" | "<<" => Ok(BitwiseOp::Lsh),
            "RSH" | ">>" => Ok(BitwiseOp::Rsh),
            "ROL" => Ok(BitwiseOp::Rol),
            "ROR" => Ok(BitwiseOp::Ror),
            _ => Err(ModelError::UnknownOperator(s.to_string())),
        }
    }
}

/// Binary logic operators for the two-step logic chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicOp {
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl LogicOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
            LogicOp::Xor => "XOR",
            LogicOp::Nand => "NAND",
            LogicOp::Nor => "NOR",
        }
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicOp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AND" | "&" => Ok(LogicOp::And),
            "OR" | "|" => Ok(LogicOp::Or),
            "XOR" | "^" => Ok(LogicOp::Xor),
            "NAND" => Ok(LogicOp::Nand),
            "NOR" => Ok(LogicOp::Nor),
            _ => Err(ModelError::UnknownOperator(s.to_string())),
        }
    }
}
