//! Calculator driver
//!
//! A driver accepts raw button labels the way a UI shell would deliver
//! them, so the same verification routines can run against any front end.

use crate::core::{CalcResult, Calculator, Event};
use crate::keypad::Keypad;
use crate::sink::{DisplaySink, HistorySink, RecordingSink};

/// Abstract driver for button-press interactions
///
/// # Example
///
/// ```rust
/// use pocketcalc::prelude::*;
///
/// let mut driver = KeypadDriver::new();
/// driver.press_keys("2+3*4=").unwrap();
/// assert_eq!(driver.get_display(), "20");
/// ```
pub trait CalculatorDriver {
    /// Presses a single button by its label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Presses one button per non-whitespace character
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for ch in keys.chars().filter(|c| !c.is_whitespace()) {
            self.press(ch.encode_utf8(&mut [0; 4]))?;
        }
        Ok(())
    }

    /// Gets the current display text
    fn get_display(&self) -> String;

    /// Gets the history pane lines (oldest first)
    fn get_history(&self) -> Vec<String>;

    /// Presses the clear button
    fn clear(&mut self);
}

/// Routes labels through a [`Keypad`] into a [`Calculator`] and forwards
/// every output to the display and history sinks
#[derive(Debug)]
pub struct KeypadDriver<D = RecordingSink, H = RecordingSink> {
    keypad: Keypad,
    calculator: Calculator,
    display_sink: D,
    history_sink: H,
}

impl Default for KeypadDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadDriver {
    /// Creates a driver recording into in-memory sinks
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(RecordingSink::new(), RecordingSink::new())
    }
}

impl<D: DisplaySink, H: HistorySink> KeypadDriver<D, H> {
    /// Creates a driver with the given sinks
    #[must_use]
    pub fn with_sinks(display_sink: D, history_sink: H) -> Self {
        Self {
            keypad: Keypad::new(),
            calculator: Calculator::new(),
            display_sink,
            history_sink,
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad used for routing
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display sink
    #[must_use]
    pub fn display_sink(&self) -> &D {
        &self.display_sink
    }

    /// Returns the history sink
    #[must_use]
    pub fn history_sink(&self) -> &H {
        &self.history_sink
    }

    /// Consumes the driver and returns both sinks
    pub fn into_sinks(self) -> (D, H) {
        (self.display_sink, self.history_sink)
    }

    /// Applies an already-routed event and pushes its outputs to the sinks
    pub fn dispatch(&mut self, event: Event) {
        let output = self.calculator.apply(event);
        if event == Event::Clear {
            self.history_sink.reset();
        }
        if let Some(line) = &output.history_line {
            self.history_sink.append(line);
        }
        self.display_sink.render(&output.display);
    }
}

impl<D: DisplaySink, H: HistorySink> CalculatorDriver for KeypadDriver<D, H> {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let event = self.keypad.route(label)?;
        self.dispatch(event);
        Ok(())
    }

    fn get_display(&self) -> String {
        self.calculator.display_text().to_string()
    }

    fn get_history(&self) -> Vec<String> {
        self.calculator.history_log()
    }

    fn clear(&mut self) {
        self.dispatch(Event::Clear);
    }
}

// ===== Shared verification routines =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators and result formatting
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("2+3=").unwrap();
    assert_eq!(driver.get_display(), "5");
    driver.clear();

    driver.press_keys("10-4=").unwrap();
    assert_eq!(driver.get_display(), "6");
    driver.clear();

    driver.press_keys("4*5=").unwrap();
    assert_eq!(driver.get_display(), "20");
    driver.clear();

    driver.press_keys("1/4=").unwrap();
    assert_eq!(driver.get_display(), "0.25");
    driver.clear();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("2+3*").unwrap();
    assert_eq!(driver.get_display(), "5");
    driver.press_keys("4=").unwrap();
    assert_eq!(driver.get_display(), "20");
    assert_eq!(driver.get_history(), vec!["2.0 + 3.0 = 5", "5.0 * 4.0 = 20"]);
    driver.clear();
}

/// Verifies decimal entry rules
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("1.2.3").unwrap();
    assert_eq!(driver.get_display(), "1.23");
    driver.clear();

    driver.press_keys(".5").unwrap();
    assert_eq!(driver.get_display(), "0.5");
    driver.clear();
}

/// Verifies division by zero and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("5/0=").unwrap();
    assert_eq!(driver.get_display(), crate::core::ERROR_MARKER);
    assert_eq!(driver.get_history(), vec!["5.0 / 0.0 = Error"]);

    driver.press_keys("7").unwrap();
    assert_eq!(driver.get_display(), "7");
    driver.clear();
}

/// Verifies that clear wipes display and history
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys("9*9=").unwrap();
    assert!(!driver.get_history().is_empty());

    driver.clear();
    assert_eq!(driver.get_display(), "0");
    assert!(driver.get_history().is_empty());
}

/// Complete verification suite
pub fn run_all_verifications<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_decimal_entry(driver);
    verify_error_recovery(driver);
    verify_clear(driver);
}
