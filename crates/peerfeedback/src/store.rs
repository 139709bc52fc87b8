//! Append-only store of feedback entries.
//!
//! Entries are never removed, including when their target leaves the roster.

use tracing::debug;

use crate::error::{Error, Result};
use crate::feedback::FeedbackEntry;

/// Ordered log of every feedback entry submitted in this process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackStore {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a comment about `target`.
    ///
    /// The comment is trimmed; the target is stored verbatim. Repeated
    /// submissions for the same target are all kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `target` is blank or the trimmed
    /// comment is empty.
    pub fn submit(&mut self, target: &str, comment: &str) -> Result<()> {
        if target.trim().is_empty() {
            return Err(Error::validation("feedback target"));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(Error::validation("comment"));
        }

        self.entries.push(FeedbackEntry::new(target, comment));
        debug!(target_peer = %target, total = self.entries.len(), "Feedback recorded");
        Ok(())
    }

    /// Every entry whose target is exactly `target`, in submission order.
    ///
    /// Matching is exact: no trimming and no case folding.
    #[must_use]
    pub fn aggregate(&self, target: &str) -> Vec<FeedbackEntry> {
        if target.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.target() == target)
            .cloned()
            .collect()
    }

    /// Iterate over all entries in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &FeedbackEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
