//! The text shown on the calculator display

use serde::Serialize;

use crate::core::event::Digit;
use crate::core::format::parse_display;
use crate::core::ERROR_MARKER;

/// Current number being entered, the last result, or the error marker.
///
/// Never empty (falls back to `"0"`) and never holds more than one
/// decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayText(String);

impl Default for DisplayText {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayText {
    /// Creates the initial display showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self("0".to_string())
    }

    /// Returns the display contents
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0 == ERROR_MARKER
    }

    /// True when the display shows exactly `"0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// True when the number already carries a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Numeric value of the display (see [`parse_display`])
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_display(&self.0)
    }

    /// Starts a fresh number with a single digit
    pub fn replace_with_digit(&mut self, digit: Digit) {
        self.0.clear();
        self.0.push(digit.as_char());
    }

    /// Appends a digit to the number being entered
    pub fn push_digit(&mut self, digit: Digit) {
        self.0.push(digit.as_char());
    }

    /// Starts a fresh number as `"0."`
    pub fn start_fraction(&mut self) {
        self.0.clear();
        self.0.push_str("0.");
    }

    /// Appends a decimal point unless one is already present.
    ///
    /// Returns whether the text changed.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Shows an evaluated result (or the error marker)
    pub fn show(&mut self, text: String) {
        self.0 = if text.is_empty() { "0".to_string() } else { text };
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for DisplayText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    #[test]
    fn test_new_shows_zero() {
        let text = DisplayText::new();
        assert_eq!(text.as_str(), "0");
        assert!(text.is_zero());
        assert!(!text.is_error());
        assert_eq!(DisplayText::default(), text);
    }

    #[test]
    fn test_replace_and_push_digits() {
        let mut text = DisplayText::new();
        text.replace_with_digit(digit(4));
        text.push_digit(digit(2));
        assert_eq!(text, "42");
        assert_eq!(text.value(), 42.0);
    }

    #[test]
    fn test_push_decimal_point_once() {
        let mut text = DisplayText::new();
        assert!(text.push_decimal_point());
        assert!(!text.push_decimal_point());
        assert_eq!(text, "0.");
    }

    #[test]
    fn test_start_fraction() {
        let mut text = DisplayText::new();
        text.show(ERROR_MARKER.to_string());
        text.start_fraction();
        assert_eq!(text, "0.");
    }

    #[test]
    fn test_show_error_marker() {
        let mut text = DisplayText::new();
        text.show(ERROR_MARKER.to_string());
        assert!(text.is_error());
        assert_eq!(text.value(), 0.0);
    }

    #[test]
    fn test_show_empty_falls_back_to_zero() {
        let mut text = DisplayText::new();
        text.push_digit(digit(1));
        text.show(String::new());
        assert!(text.is_zero());
    }

    #[test]
    fn test_display_and_serialize() {
        let mut text = DisplayText::new();
        text.show("0.25".to_string());
        assert_eq!(text.to_string(), "0.25");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"0.25\"");
    }
}
