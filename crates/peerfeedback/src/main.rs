//! `peerfb` - CLI for peerfeedback
//!
//! Runs an interactive feedback session, or prints the starting roster and
//! per-peer summaries non-interactively.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use peerfeedback::cli::{Cli, Command, ConfigCommand, PeersCommand, SessionCommand, SummaryCommand};
use peerfeedback::config::SummaryFormat;
use peerfeedback::{init_logging, Config, Error, FeedbackBoard, Session, Summary};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Each handler loads configuration itself, so `config path` and
    // `config validate` still run when the file is broken
    let config_path = cli.config_path();

    match cli.command {
        Command::Session(cmd) => handle_session(load_config(&config_path)?, &cmd),
        Command::Peers(cmd) => handle_peers(&cmd),
        Command::Summary(cmd) => handle_summary(&load_config(&config_path)?, &cmd),
        Command::Config(cmd) => handle_config(&config_path, cmd),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(Some(path.to_path_buf()))
        .with_context(|| format!("loading configuration from {}", path.display()))
}

fn handle_session(mut config: Config, cmd: &SessionCommand) -> anyhow::Result<()> {
    if let Some(panel) = cmd.panel {
        config.session.start_panel = panel.into();
    }

    let mut session = Session::new(FeedbackBoard::seeded(), config);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("running session")?;
    Ok(())
}

fn handle_peers(cmd: &PeersCommand) -> anyhow::Result<()> {
    let peers = FeedbackBoard::seeded().list_peers();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&peers)?);
    } else {
        for peer in peers {
            println!("{peer}");
        }
    }
    Ok(())
}

fn handle_summary(config: &Config, cmd: &SummaryCommand) -> anyhow::Result<()> {
    let board = FeedbackBoard::seeded();
    let peer = board
        .roster()
        .find(&cmd.peer)
        .ok_or_else(|| Error::not_found(cmd.peer.trim()))?;

    let format = cmd
        .format
        .map_or(config.summary.format, SummaryFormat::from);
    let summary = Summary::new(peer, &board.feedback_for(peer), &config.summary);
    println!("{}", summary.render(format)?);
    Ok(())
}

fn handle_config(config_path: &Path, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Session]");
                println!("  Prompt:             {}", config.session.prompt);
                println!("  Start panel:        {}", config.session.start_panel);
                println!("  Echo commands:      {}", config.session.echo_commands);
                println!();
                println!("[Summary]");
                println!("  Anonymous label:    {}", config.summary.anonymous_label);
                println!("  Format:             {}", config.summary.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(|| config_path.to_path_buf());
            println!("Validating configuration: {}", path.display());
            load_config(&path)?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
