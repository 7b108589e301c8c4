//! Terminal rendering of the display, history pane and keypad

use crate::config::HistoryFormat;
use crate::error::CliResult;
use crate::session::{Report, Step};
use console::{style, Term};
use pocketcalc::core::history::History;
use pocketcalc::core::ERROR_MARKER;

/// Writes calculator output to stdout
#[derive(Debug)]
pub struct Renderer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Renderer {
    /// Create a new renderer
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
        }
    }

    /// Formats the display line
    #[must_use]
    pub fn display_line(&self, display: &str) -> String {
        if !self.use_color {
            return display.to_string();
        }
        if display == ERROR_MARKER {
            style(display).force_styling(true).red().bold().to_string()
        } else {
            style(display).force_styling(true).bold().to_string()
        }
    }

    /// Formats one traced press
    #[must_use]
    pub fn step_line(&self, step: &Step) -> String {
        let label = format!("[ {} ]", step.label);
        let label = if self.use_color {
            style(label).force_styling(true).cyan().to_string()
        } else {
            label
        };
        format!("{label} {}", self.display_line(&step.display))
    }

    /// Formats the history pane
    #[must_use]
    pub fn history_pane(&self, history: &History) -> String {
        let header = if self.use_color {
            style("History").force_styling(true).dim().to_string()
        } else {
            "History".to_string()
        };
        if history.is_empty() {
            return header;
        }
        format!("{header}\n{}", history.export_formatted())
    }

    /// Prints a replay report in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written or JSON rendering fails.
    pub fn report(&self, report: &Report, format: HistoryFormat, show_history: bool) -> CliResult<()> {
        match format {
            HistoryFormat::Json => {
                self.term.write_line(&serde_json::to_string_pretty(report)?)?;
            }
            HistoryFormat::Text => {
                for step in &report.steps {
                    self.term.write_line(&self.step_line(step))?;
                }
                self.term.write_line(&self.display_line(&report.display))?;
                if show_history && !report.history.is_empty() {
                    self.term.write_line(&self.history_pane(&report.history))?;
                }
            }
        }
        Ok(())
    }

    /// Prints the keypad layout
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn keypad(&self, layout: &str) -> CliResult<()> {
        self.term.write_line(layout)?;
        Ok(())
    }
}
