//! Command-line interface for peerfeedback.
//!
//! This module provides the CLI structure for the `peerfb` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, OutputFormat, PanelArg, PeersCommand, SessionCommand, SummaryCommand,
};

/// peerfb - Anonymous peer feedback
///
/// Pick a peer from the roster, leave an anonymous comment, and read back
/// everything said about a peer. All data lives in memory for one session.
#[derive(Debug, Parser)]
#[command(name = "peerfb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive feedback session on stdin/stdout
    Session(SessionCommand),

    /// Print the starting roster
    Peers(PeersCommand),

    /// Print the starting feedback for one peer
    Summary(SummaryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The configuration file in effect: `--config` if given, otherwise the
    /// default location.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Peers(PeersCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "peerfb");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_session() {
        let cli = Cli::try_parse_from(["peerfb", "session"]).unwrap();
        assert!(matches!(cli.command, Command::Session(SessionCommand { panel: None })));
    }

    #[test]
    fn test_parse_session_with_panel() {
        let cli = Cli::try_parse_from(["peerfb", "session", "--panel", "summary"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Session(SessionCommand {
                panel: Some(PanelArg::Summary)
            })
        ));
    }

    #[test]
    fn test_parse_summary() {
        let cli =
            Cli::try_parse_from(["peerfb", "summary", "Lee Bi Ying", "--format", "json"]).unwrap();
        match cli.command {
            Command::Summary(cmd) => {
                assert_eq!(cmd.peer, "Lee Bi Ying");
                assert_eq!(cmd.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_summary_requires_peer() {
        assert!(Cli::try_parse_from(["peerfb", "summary"]).is_err());
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["peerfb", "config", "validate", "-f", "/tmp/c.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["peerfb", "-c", "/custom/config.toml", "peers"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_config_path_defaults() {
        let cli = cli_with(0, false);
        assert_eq!(cli.config_path(), crate::config::Config::default_config_path());
    }

    #[test]
    fn test_config_commands_parse_without_loading_a_bad_file() {
        let path = std::env::temp_dir().join(format!(
            "peerfeedback_cli_bad_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[summary]\nanonymous_label = \" \"\n").unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["peerfb", "-c", path_arg.as_str(), "config", "path"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
        assert_eq!(cli.config_path(), path);

        let cli = Cli::try_parse_from(["peerfb", "-c", path_arg.as_str(), "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: None })
        ));
        let result = crate::config::Config::load_from(Some(cli.config_path()));
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(crate::error::Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["peerfb", "-vv", "peers"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["peerfb", "peers", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
