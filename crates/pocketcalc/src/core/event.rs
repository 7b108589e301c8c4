//! Discrete input events delivered to the state machine

use serde::{Deserialize, Serialize};

use crate::core::{InputError, Operation};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::InvalidDigit(value))
        }
    }

    /// Creates a digit from its character, if it is `'0'..='9'`
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the digit's numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit's character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five kinds of input the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// A digit key (0-9)
    Digit(Digit),
    /// The decimal point key
    Decimal,
    /// One of + - * /
    Operator(Operation),
    /// The equals key
    Equals,
    /// The clear key (resets everything, history included)
    Clear,
}

impl Event {
    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// True for events that may append a history line
    #[must_use]
    pub const fn may_record(&self) -> bool {
        matches!(self, Self::Operator(_) | Self::Equals)
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Event {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}
