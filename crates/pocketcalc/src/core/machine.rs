//! The calculator state machine
//!
//! Owns the display text, the first operand, the pending operator, the
//! reset flag and the history log. Operators chain strictly left to right:
//! pressing an operator while another is pending evaluates the pending one
//! first, so `2 + 3 * 4 =` computes `(2 + 3) * 4`.
//!
//! Arithmetic failures never escape. They show up as the error marker on
//! the display and in the history line, and the machine stays usable.

use serde::Serialize;

use crate::core::display::DisplayText;
use crate::core::event::{Digit, Event};
use crate::core::history::History;
use crate::core::{evaluate, Operation};

/// A stored operand and operator waiting for the second operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingOperation {
    /// Left operand
    pub operand: f64,
    /// Operator to apply once the right operand is known
    pub operator: Operation,
}

/// What a single event produced for the display and history collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Display text after the event
    pub display: String,
    /// History line appended by the event, if any
    pub history_line: Option<String>,
}

/// Four-function calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: DisplayText,
    first_operand: f64,
    pending_operator: Option<Operation>,
    reset_on_next_digit: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `"0"` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: DisplayText::new(),
            first_operand: 0.0,
            pending_operator: None,
            reset_on_next_digit: false,
            history: History::new(),
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    /// Returns the display value object
    #[must_use]
    pub fn display(&self) -> &DisplayText {
        &self.display
    }

    /// Returns the history log
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the history pane lines, oldest first
    #[must_use]
    pub fn history_log(&self) -> Vec<String> {
        self.history.lines()
    }

    /// Returns the chained operation, if one is waiting
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending_operator.map(|operator| PendingOperation {
            operand: self.first_operand,
            operator,
        })
    }

    /// Returns the stored first operand (the last result once nothing is pending)
    #[must_use]
    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    /// True when the next digit starts a fresh number
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Dispatches an event and reports the resulting outputs
    pub fn apply(&mut self, event: Event) -> Output {
        let history_line = match event {
            Event::Digit(d) => {
                self.digit(d);
                None
            }
            Event::Decimal => {
                self.decimal();
                None
            }
            Event::Operator(op) => self.operator(op),
            Event::Equals => self.equals(),
            Event::Clear => {
                self.clear();
                None
            }
        };

        tracing::debug!(
            event = %event.label(),
            display = %self.display,
            pending = ?self.pending_operator,
            "transition"
        );

        Output {
            display: self.display.to_string(),
            history_line,
        }
    }

    /// Enters a digit
    pub fn digit(&mut self, digit: Digit) {
        if self.reset_on_next_digit || self.display.is_zero() || self.display.is_error() {
            self.display.replace_with_digit(digit);
            self.reset_on_next_digit = false;
        } else {
            self.display.push_digit(digit);
        }
    }

    /// Enters the decimal point (at most one per number)
    pub fn decimal(&mut self) {
        if self.reset_on_next_digit || self.display.is_error() {
            self.display.start_fraction();
            self.reset_on_next_digit = false;
        } else {
            self.display.push_decimal_point();
        }
    }

    /// Presses an operator.
    ///
    /// With nothing pending the display becomes the first operand. With an
    /// operator already pending, that operation is evaluated first and its
    /// result becomes the new first operand. Returns the history line when
    /// an evaluation happened.
    pub fn operator(&mut self, op: Operation) -> Option<String> {
        let Some(previous) = self.pending_operator else {
            self.first_operand = self.display.value();
            self.pending_operator = Some(op);
            self.reset_on_next_digit = true;
            return None;
        };

        let line = self.resolve(previous);
        if !self.display.is_error() {
            self.pending_operator = Some(op);
        }
        Some(line)
    }

    /// Evaluates the pending operation. No-op when nothing is pending.
    pub fn equals(&mut self) -> Option<String> {
        let previous = self.pending_operator?;
        let line = self.resolve(previous);
        self.pending_operator = None;
        Some(line)
    }

    /// Resets everything, history included
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Combines the first operand with the display and records the result
    fn resolve(&mut self, op: Operation) -> String {
        let first = self.first_operand;
        let second = self.display.value();
        let result = evaluate(first, op, second);

        self.display.show(result.clone());
        let line = self.history.record(first, op, second, result).display();
        tracing::info!(entry = %line, "history entry");

        if self.display.is_error() {
            self.first_operand = 0.0;
            self.pending_operator = None;
        } else {
            self.first_operand = self.display.value();
        }
        self.reset_on_next_digit = true;

        line
    }
}
