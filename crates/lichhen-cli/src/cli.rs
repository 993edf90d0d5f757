//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Lichhen CLI - Extract appointment details from Vietnamese text.
#[derive(Debug, Parser)]
#[command(name = "lichhen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LICHHEN_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one tab-separated line per result)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract date, time and title from one text
    Extract(ExtractArgs),

    /// Extract details from many texts
    Batch(BatchArgs),

    /// Gate texts on a classifier score, then extract
    Predict(PredictArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text to analyze
    pub text: String,

    /// Resolve relative dates against this day (YYYY-MM-DD)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// File with one text per line, or a JSON array of strings
    #[arg(short, long)]
    pub file: Option<String>,

    /// Read texts from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Resolve relative dates against this day (YYYY-MM-DD)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the predict command.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// Text to classify
    pub text: Option<String>,

    /// Classifier score for TEXT (0.0-1.0)
    #[arg(short = 'p', long)]
    pub confidence: Option<f64>,

    /// File of `<score>\t<text>` lines, classified as one batch
    #[arg(short, long, conflicts_with_all = ["text", "confidence"])]
    pub file: Option<String>,

    /// Override the configured threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
