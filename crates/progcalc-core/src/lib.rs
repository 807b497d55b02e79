//! Fixed-width integer calculator engine.
//!
//! The engine emulates a hardware word of 4 to 256 bits. Every value is held
//! as a [`num_bigint::BigUint`] and masked into the word after each
//! operation, so results are bit-exact at every width.
//!
//! - [`radix`]: digit text conversion and masking.
//! - [`rotate`]: shifts, rotations and complement.
//! - [`input`]: keystroke validation against the base and word size.
//! - [`arithmetic`]: accumulator evaluation with wraparound.
//! - [`logic`]: the two-step AND/OR/XOR/NAND/NOR chain.
//! - [`calculator`]: the state owner tying these together.
//!
//! ```
//! use progcalc_core::Calculator;
//! use progcalc_model::{ArithmeticOp, Key};
//!
//! let mut calc = Calculator::default();
//! calc.dispatch(Key::Digit('5')).unwrap();
//! calc.dispatch(Key::Arithmetic(ArithmeticOp::Add)).unwrap();
//! calc.dispatch(Key::Digit('3')).unwrap();
//! calc.dispatch(Key::Execute).unwrap();
//! assert_eq!(calc.value(), "8");
//! ```

pub mod arithmetic;
pub mod calculator;
pub mod error;
pub mod history;
pub mod input;
pub mod logic;
pub mod radix;
pub mod rotate;
pub mod state;

pub use arithmetic::{PendingOperation, evaluate};
pub use calculator::Calculator;
pub use error::{CalcError, ParseError, Result};
pub use history::History;
pub use input::{drop_last_digit, try_append_digit};
pub use logic::{ParsedExpression, arm_expression, evaluate_logic, parse_expression};
pub use radix::{describe_bits, fits, from_text, mask, max_value, modulus, pad_text, to_text};
pub use rotate::{apply_bitwise, complement, rotate_left, rotate_right, shift_left, shift_right};
pub use state::CalculatorState;
