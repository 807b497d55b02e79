//! CLI library components for the programmer calculator.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
