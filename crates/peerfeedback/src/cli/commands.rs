//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Session command arguments.
#[derive(Debug, Args)]
pub struct SessionCommand {
    /// Panel to open on (overrides the configuration)
    #[arg(short, long, value_enum)]
    pub panel: Option<PanelArg>,
}

/// Peers command arguments.
#[derive(Debug, Args)]
pub struct PeersCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Summary command arguments.
#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// The peer to summarize (matched ignoring case)
    pub peer: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Panel argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    /// The feedback form
    Submit,
    /// The per-peer summary view
    Summary,
}

impl From<PanelArg> for crate::config::Panel {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Submit => Self::Submit,
            PanelArg::Summary => Self::Summary,
        }
    }
}

/// Output format for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for crate::config::SummaryFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}
