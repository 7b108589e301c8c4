//! Calculator keypad and input routing
//!
//! Maps raw button labels from whatever UI hosts the calculator onto the
//! five event kinds the state machine understands.
//!
//! ```text
//!                   [ C ]
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! ```

use crate::core::{CalcResult, Digit, Event, InputError, Operation};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character printed on the button
    pub label: char,
    /// The event this button delivers
    pub action: Event,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(digit: Digit) -> Self {
        Self {
            label: digit.as_char(),
            action: Event::Digit(digit),
        }
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self {
            label: op.symbol(),
            action: Event::Operator(op),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            action: Event::Decimal,
        }
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            action: Event::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            action: Event::Clear,
        }
    }
}

/// The 4x4 button grid plus the clear button in the display header
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Grid buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Header button beside the display
    clear: KeypadButton,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Grid labels in row-major order
    pub const LAYOUT: [char; 16] = [
        '7', '8', '9', '/', //
        '4', '5', '6', '*', //
        '1', '2', '3', '-', //
        '0', '.', '=', '+',
    ];

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = Self::LAYOUT
            .iter()
            .filter_map(|&label| Self::button_for(label))
            .collect();

        Self {
            buttons,
            clear: KeypadButton::clear(),
            cols: 4,
            rows: 4,
        }
    }

    /// Builds the button for a grid label: digits, `.`, `=`, anything else
    /// is an operator
    fn button_for(label: char) -> Option<KeypadButton> {
        if let Some(digit) = Digit::from_char(label) {
            return Some(KeypadButton::digit(digit));
        }
        match label {
            '.' => Some(KeypadButton::decimal()),
            '=' => Some(KeypadButton::equals()),
            other => Operation::from_symbol(other).ok().map(KeypadButton::operator),
        }
    }

    /// Returns the number of grid buttons (the clear button is separate)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a grid button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a grid button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the clear button
    #[must_use]
    pub fn clear_button(&self) -> &KeypadButton {
        &self.clear
    }

    /// Finds a button (grid or header) by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .chain(std::iter::once(&self.clear))
            .find(|b| b.label == label)
    }

    /// Returns an iterator over the grid buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over grid buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Routes a raw button label to an event.
    ///
    /// Surrounding whitespace is ignored. Besides the printed labels this
    /// accepts `x`/`×` for multiply, `÷` for divide and a lowercase `c`.
    pub fn route(&self, label: &str) -> CalcResult<Event> {
        let trimmed = label.trim();
        let mut chars = trimmed.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(InputError::UnknownLabel(label.to_string()));
        };

        let canonical = match ch {
            'x' | 'X' | '×' => '*',
            '÷' => '/',
            'c' => 'C',
            other => other,
        };

        let event = self
            .find_button_by_label(canonical)
            .map(|btn| btn.action)
            .ok_or_else(|| InputError::UnknownLabel(label.to_string()))?;

        tracing::trace!(label = %trimmed, event = ?event, "routed");
        Ok(event)
    }

    /// Renders the keypad as plain text, header row first
    #[must_use]
    pub fn layout_text(&self) -> String {
        let width = self.cols * 6 - 1;
        let mut lines = vec![format!("{:>width$}", format!("[ {} ]", self.clear.label))];
        for row in self.buttons.chunks(self.cols) {
            let cells: Vec<String> = row.iter().map(|b| format!("[ {} ]", b.label)).collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
