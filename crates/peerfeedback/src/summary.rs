//! Rendering aggregated feedback for one peer.

use std::fmt;

use serde::Serialize;

use crate::config::{SummaryConfig, SummaryFormat};
use crate::error::Result;
use crate::feedback::FeedbackEntry;

/// Shown when no peer is selected for the summary view.
pub const NO_SELECTION: &str = "Please select a peer to view their feedback.";

/// One numbered comment in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    /// Position in submission order, starting at 1.
    pub ordinal: usize,
    /// The comment text.
    pub comment: String,
}

/// All feedback about one peer, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The peer the feedback is about.
    pub target: String,
    /// Numbered comments, oldest first.
    pub entries: Vec<SummaryCard>,
    #[serde(skip)]
    label: String,
}

impl Summary {
    /// Build a summary from aggregated entries.
    #[must_use]
    pub fn new(target: impl Into<String>, entries: &[FeedbackEntry], config: &SummaryConfig) -> Self {
        Self {
            target: target.into(),
            entries: entries
                .iter()
                .enumerate()
                .map(|(i, entry)| SummaryCard {
                    ordinal: i + 1,
                    comment: entry.comment().to_string(),
                })
                .collect(),
            label: config.anonymous_label.clone(),
        }
    }

    /// Whether nobody has left feedback for this peer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Plain => Ok(self.to_string()),
            SummaryFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(
                f,
                "No anonymous feedback has been submitted for {} yet.",
                self.target
            );
        }

        write!(f, "Feedback for {} ({})", self.target, self.entries.len())?;
        for card in &self.entries {
            write!(
                f,
                "\n\n  \"{}\"\n    - {} #{}",
                card.comment, self.label, card.ordinal
            )?;
        }
        Ok(())
    }
}
