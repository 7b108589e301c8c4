//! Binary operators and single-step evaluation

use serde::{Deserialize, Serialize};

use crate::core::format::format_result;
use crate::core::{ArithmeticError, InputError, DIVISOR_EPSILON, ERROR_MARKER};

/// The four binary operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol used in history lines
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator symbol
    pub fn from_symbol(symbol: char) -> Result<Self, InputError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(InputError::InvalidOperator(other)),
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b.abs() < DIVISOR_EPSILON {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite(result))
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

/// Combines `a` and `b` with `op` and formats the result for the display.
///
/// Division by a near-zero divisor and NaN or infinite results produce
/// [`ERROR_MARKER`].
#[must_use]
pub fn evaluate(a: f64, op: Operation, b: f64) -> String {
    match op.apply(a, b) {
        Ok(value) => format_result(value),
        Err(err) => {
            tracing::warn!(a, b, op = %op, error = %err, "arithmetic error");
            ERROR_MARKER.to_string()
        }
    }
}
