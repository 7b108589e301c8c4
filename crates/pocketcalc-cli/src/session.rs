//! Replaying button presses against a headless calculator

use crate::error::{CliError, CliResult};
use pocketcalc::prelude::*;
use serde::Serialize;

/// The display after a single press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label that was pressed
    pub label: String,
    /// Display text after the press
    pub display: String,
}

/// Final state of a replayed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Final display text
    pub display: String,
    /// Evaluated operations, oldest first
    pub history: History,
    /// Per-press displays, filled when tracing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Splits command-line arguments into single button labels.
///
/// Each argument may hold several labels (`12+3=`); whitespace is ignored.
#[must_use]
pub fn split_labels(keys: &[String]) -> Vec<String> {
    keys.iter()
        .flat_map(|key| key.chars())
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect()
}

/// Presses every label in order and reports the final display and history.
///
/// Stops at the first label that is not a button.
///
/// # Errors
///
/// Returns [`CliError::NoKeys`] when there is nothing to press and
/// [`CliError::Input`] for an unknown label.
pub fn replay(keys: &[String], trace: bool) -> CliResult<Report> {
    let labels = split_labels(keys);
    if labels.is_empty() {
        return Err(CliError::NoKeys);
    }

    let mut driver = KeypadDriver::new();
    let mut steps = Vec::new();
    for label in labels {
        driver.press(&label)?;
        if trace {
            steps.push(Step {
                display: driver.get_display(),
                label,
            });
        }
    }
    let history = driver.calculator().history().clone();
    tracing::info!(
        presses = driver.display_sink().frames().len(),
        entries = history.len(),
        "replay finished"
    );

    Ok(Report {
        display: driver.get_display(),
        history,
        steps,
    })
}
