//! Pocketcalc - four-function calculator core
//!
//! The arithmetic state machine behind a classic desktop calculator: a
//! display, a 4x4 keypad for digits and the four binary operators, and a
//! history pane logging every computed expression.
//!
//! - **No precedence**: operators chain left to right, each press of an
//!   operator evaluates the one already pending
//! - **No panics, no errors**: division by zero and overflow show `Error`
//!   on the display and the next digit starts over
//! - **Headless**: rendering is delegated to [`sink::DisplaySink`] and
//!   [`sink::HistorySink`] implementations
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.digit(Digit::new(2).unwrap());
//! calc.operator(Operation::Add);
//! calc.digit(Digit::new(3).unwrap());
//! calc.operator(Operation::Multiply);
//! calc.digit(Digit::new(4).unwrap());
//! calc.equals();
//!
//! assert_eq!(calc.display_text(), "20");
//! assert_eq!(calc.history_log(), vec!["2.0 + 3.0 = 5", "5.0 * 4.0 = 20"]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod sink;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_operand, format_result, parse_display};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        evaluate, ArithmeticError, CalcResult, Calculator, Digit, DisplayText, Event, InputError,
        Operation, Output, PendingOperation, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::sink::{DisplaySink, HistorySink, RecordingSink};
}
