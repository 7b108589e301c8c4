//! Core calculator module
//!
//! The arithmetic state machine and the value types it is built from.
//! Nothing in here knows about buttons, terminals or windows.

pub mod display;
pub mod event;
pub mod format;
pub mod history;
pub mod machine;
mod operations;

pub use display::DisplayText;
pub use event::{Digit, Event};
pub use machine::{Calculator, Output, PendingOperation};
pub use operations::{evaluate, Operation};

use thiserror::Error;

/// The fixed string shown when a result cannot be represented
pub const ERROR_MARKER: &str = "Error";

/// Divisors with a magnitude below this are treated as zero
pub const DIVISOR_EPSILON: f64 = 1e-12;

/// Results this close to an integer are displayed as that integer
pub const INTEGER_EPSILON: f64 = 1e-10;

/// Number of fractional digits kept before trailing zeros are trimmed
pub const FRACTION_DIGITS: usize = 10;

/// Result type for input routing
pub type CalcResult<T> = Result<T, InputError>;

/// Arithmetic failures detected while evaluating a pending operation.
///
/// These never cross the public event interface: the state machine turns
/// them into [`ERROR_MARKER`] at the point of detection.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    /// Divisor magnitude below [`DIVISOR_EPSILON`]
    #[error("Division by zero")]
    DivisionByZero,
    /// Result was NaN or infinite
    #[error("Non-finite result: {0}")]
    NonFinite(f64),
}

/// Raw UI input that does not name a calculator button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Label matches no keypad button
    #[error("Unknown button label: {0:?}")]
    UnknownLabel(String),
    /// Digit value outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Character is not one of + - * /
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(char),
}
