//! Lichhen CLI - Extract appointment details from Vietnamese text.

use clap::Parser;
use lichhen_cli::commands;
use lichhen_cli::repl;
use lichhen_cli::{Cli, Command, Config, Formatter};
use lichhen_extractor::Extractor;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lichhen_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit --config must load; the default file falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable config file: {}", e);
            Config::default()
        }),
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let extractor = Extractor::new(config.extractor.clone())?;

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &extractor, &formatter)?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &extractor, &formatter)?;
        }
        Some(Command::Batch(args)) => {
            commands::execute_batch(args, &extractor, &formatter)?;
        }
        Some(Command::Predict(args)) => {
            commands::execute_predict(args, &extractor, &config.gate, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr so JSON output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
