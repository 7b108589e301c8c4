//! Pocketcalc CLI library
//!
//! Headless shell over the `pocketcalc` core: replays button presses given
//! on the command line and prints the display and history pane.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]

mod commands;
mod config;
mod error;
mod output;
mod session;

pub use commands::{Cli, ColorArg, Commands, FormatArg, PressArgs};
pub use config::{ColorChoice, HistoryFormat, ShellConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Renderer;
pub use session::{replay, split_labels, Report, Step};
