//! Calculation history
//!
//! Append-only log of evaluated operations, one entry per chained operator
//! or equals press. Only a clear wipes it.

use serde::{Deserialize, Serialize};

use crate::core::format::format_operand;
use crate::core::Operation;

/// A single evaluated operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand
    pub first_operand: f64,
    /// Operator applied
    pub operator: Operation,
    /// Right operand, as parsed from the display
    pub second_operand: f64,
    /// Formatted result exactly as shown on the display (may be the error marker)
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(
        first_operand: f64,
        operator: Operation,
        second_operand: f64,
        result: impl Into<String>,
    ) -> Self {
        Self {
            first_operand,
            operator,
            second_operand,
            result: result.into(),
        }
    }

    /// Returns the history pane line, e.g. `2.0 + 3.0 = 5`
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_operand(self.first_operand),
            self.operator,
            format_operand(self.second_operand),
            self.result
        )
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Ordered, append-only calculation log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an evaluated operation and returns the stored entry
    pub fn record(
        &mut self,
        first_operand: f64,
        operator: Operation,
        second_operand: f64,
        result: impl Into<String>,
    ) -> &HistoryEntry {
        self.entries.push(HistoryEntry::new(
            first_operand,
            operator,
            second_operand,
            result,
        ));
        &self.entries[self.entries.len() - 1]
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the formatted lines (oldest first)
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(HistoryEntry::display).collect()
    }

    /// Exports history as the history pane text, one line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.lines().join("\n")
    }
}
