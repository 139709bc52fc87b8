//! Line-oriented terminal session over a [`FeedbackBoard`].
//!
//! The session owns the presentation state: which panel is active, which peer
//! is selected as the feedback target and which peer's summary is on screen.
//! Board operations return plain results; this module turns them into text.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::board::FeedbackBoard;
use crate::config::{Config, Panel};
use crate::error::{Error, Result};
use crate::summary::{Summary, NO_SELECTION};

const HELP: &str = "\
Commands:
  peers            list the roster
  add NAME         add a peer to the roster
  remove NAME      remove a peer from the roster (their feedback is kept)
  target NAME      choose who to give feedback to
  submit COMMENT   submit anonymous feedback for the chosen peer
  view NAME        show all feedback for a peer
  summary          switch to the summary view
  give             switch to the feedback form
  help             show this help
  quit             end the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List the roster.
    Peers,
    /// Add a peer.
    Add(String),
    /// Remove a peer.
    Remove(String),
    /// Select the feedback target.
    Target(String),
    /// Submit a comment for the selected target.
    Submit(String),
    /// Select a peer and show their summary.
    View(String),
    /// Switch to the summary panel.
    ShowSummaryPanel,
    /// Switch to the submit panel.
    ShowSubmitPanel,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl Action {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The keyword is case-insensitive;
    /// everything after it is the argument, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] or [`Error::MissingArgument`].
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let argument = |command: &'static str, argument: &'static str| {
            if rest.is_empty() {
                Err(Error::MissingArgument { command, argument })
            } else {
                Ok(rest.to_string())
            }
        };

        let action = match keyword.to_lowercase().as_str() {
            "peers" | "list" => Self::Peers,
            "add" => Self::Add(argument("add", "a peer name")?),
            "remove" | "rm" => Self::Remove(argument("remove", "a peer name")?),
            "target" => Self::Target(argument("target", "a peer name")?),
            "submit" => Self::Submit(argument("submit", "a comment")?),
            "view" => Self::View(argument("view", "a peer name")?),
            "summary" => Self::ShowSummaryPanel,
            "give" => Self::ShowSubmitPanel,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                return Err(Error::UnknownCommand {
                    command: keyword.to_string(),
                })
            }
        };
        Ok(Some(action))
    }
}

/// What the session has to say after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text blocks to print, in order.
    Output(Vec<String>),
    /// The session is over.
    Quit,
}

/// Interactive session state.
#[derive(Debug)]
pub struct Session {
    board: FeedbackBoard,
    config: Config,
    panel: Panel,
    target: Option<String>,
    viewing: Option<String>,
}

impl Session {
    /// Start a session over `board`.
    #[must_use]
    pub fn new(board: FeedbackBoard, config: Config) -> Self {
        let panel = config.session.start_panel;
        Self {
            board,
            config,
            panel,
            target: None,
            viewing: None,
        }
    }

    /// The board this session drives.
    #[must_use]
    pub fn board(&self) -> &FeedbackBoard {
        &self.board
    }

    /// The active panel.
    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// The peer currently chosen to receive feedback.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The peer whose summary is on screen.
    #[must_use]
    pub fn viewing(&self) -> Option<&str> {
        self.viewing.as_deref()
    }

    /// The prompt, including the active panel.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}[{}]> ", self.config.session.prompt, self.panel)
    }

    /// Parse and execute one input line.
    ///
    /// # Errors
    ///
    /// Any parse or board error.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Action::parse(line)? {
            Some(action) => self.execute(action),
            None => Ok(Reply::Output(Vec::new())),
        }
    }

    /// Execute one command against the board.
    ///
    /// State only changes when the command succeeds.
    ///
    /// # Errors
    ///
    /// Any board error, or [`Error::NotFound`] when a selection names a peer
    /// who is not on the roster.
    pub fn execute(&mut self, action: Action) -> Result<Reply> {
        debug!(?action, "Executing session command");
        let output = match action {
            Action::Peers => vec![self.render_peers()],
            Action::Add(name) => {
                self.board.add_peer(&name)?;
                vec![format!("Peer '{}' added successfully.", name.trim())]
            }
            Action::Remove(name) => self.remove(&name)?,
            Action::Target(name) => {
                let peer = self.resolve(&name)?;
                let line = format!("Giving feedback to {peer}.");
                self.target = Some(peer);
                vec![line]
            }
            Action::Submit(comment) => {
                let target = self.target.clone().unwrap_or_default();
                self.board.submit_feedback(&target, &comment)?;
                self.target = None;
                vec![format!(
                    "Anonymous feedback successfully submitted for {target}."
                )]
            }
            Action::View(name) => {
                let peer = self.resolve(&name)?;
                let rendered = self.render_summary(&peer)?;
                self.panel = Panel::Summary;
                self.viewing = Some(peer);
                vec![rendered]
            }
            Action::ShowSummaryPanel => {
                self.panel = Panel::Summary;
                self.viewing = None;
                vec![NO_SELECTION.to_string()]
            }
            Action::ShowSubmitPanel => {
                self.panel = Panel::Submit;
                let line = match &self.target {
                    Some(peer) => format!("Giving feedback to {peer}."),
                    None => "Choose a peer with 'target NAME'.".to_string(),
                };
                vec![line]
            }
            Action::Help => vec![HELP.to_string()],
            Action::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }

    /// Run until `quit` or end of input.
    ///
    /// Command errors are printed and the session carries on; only I/O and
    /// serialization failures end it early.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!(
            peers = self.board.roster().len(),
            entries = self.board.store().len(),
            panel = %self.panel,
            "Session started"
        );

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            if self.config.session.echo_commands {
                writeln!(output, "{line}")?;
            }

            match self.handle_line(&line) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Output(blocks)) => {
                    for block in blocks {
                        writeln!(output, "{block}")?;
                    }
                }
                Err(err) if err.is_user_error() => writeln!(output, "error: {err}")?,
                Err(err) => return Err(err),
            }
        }

        info!(entries = self.board.store().len(), "Session ended");
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Vec<String>> {
        let removed = self.board.remove_peer(name)?;
        let mut output = vec![format!(
            "Peer '{removed}' removed successfully. (Existing feedback remains in memory)"
        )];

        if self.target.as_deref() == Some(removed.as_str()) {
            self.target = None;
        }
        if self.viewing.as_deref() == Some(removed.as_str()) {
            self.viewing = None;
            output.push(NO_SELECTION.to_string());
        }
        Ok(output)
    }

    /// Map typed input to the roster's own spelling, as picking from a list would.
    fn resolve(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("peer name"));
        }
        self.board
            .roster()
            .find(name)
            .map(str::to_string)
            .ok_or_else(|| Error::not_found(name))
    }

    fn render_peers(&self) -> String {
        let peers = self.board.list_peers();
        if peers.is_empty() {
            return "The roster is empty.".to_string();
        }
        peers
            .iter()
            .map(|peer| format!("  {peer}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_summary(&self, peer: &str) -> Result<String> {
        let entries = self.board.feedback_for(peer);
        Summary::new(peer, &entries, &self.config.summary).render(self.config.summary.format)
    }
}
