//! Pocketcalc CLI
//!
//! Usage:
//! ```bash
//! pocketcalc press 2 + 3 = # 5, then the history pane
//! pocketcalc press --format json '1/4='
//! pocketcalc keypad # print the button layout
//! ```

use clap::Parser;
use pocketcalc::keypad::Keypad;
use pocketcalc_cli::{
    replay, Cli, CliResult, Commands, HistoryFormat, PressArgs, Renderer, ShellConfig, Verbosity,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> ShellConfig {
    ShellConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: ShellConfig) -> CliResult<()> {
    match cli.command {
        Commands::Press(args) => run_press(args, config),
        Commands::Keypad => run_keypad(&config),
    }
}

fn run_press(args: PressArgs, config: ShellConfig) -> CliResult<()> {
    let config = config
        .with_history_format(HistoryFormat::from(args.format))
        .with_show_history(!args.no_history)
        .with_trace(args.trace);
    tracing::debug!(?config, keys = args.keys.len(), "press");

    let report = replay(&args.keys, config.trace)?;
    let renderer = Renderer::new(config.color.should_color());
    renderer.report(&report, config.history_format, config.show_history)
}

fn run_keypad(config: &ShellConfig) -> CliResult<()> {
    let renderer = Renderer::new(config.color.should_color());
    renderer.keypad(&Keypad::new().layout_text())
}
