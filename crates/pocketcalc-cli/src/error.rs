//! Error types for the CLI

use pocketcalc::core::InputError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A pressed label is not a calculator button
    #[error("{0}")]
    Input(#[from] InputError),

    /// Nothing to press
    #[error("No buttons to press")]
    NoKeys,

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
