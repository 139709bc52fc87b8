//! The feedback entry type.

use serde::Serialize;

/// One anonymous comment directed at one peer.
///
/// There is deliberately no author field. Entries are immutable once built;
/// the fields are only reachable through accessors.
///
/// Entries serialize for display but cannot be deserialized, so the only way
/// to create one is through [`crate::FeedbackStore::submit`]:
///
/// ```compile_fail
/// let entry: peerfeedback::FeedbackEntry =
///     serde_json::from_str(r#"{"target": "", "comment": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedbackEntry {
    target: String,
    comment: String,
}

impl FeedbackEntry {
    /// Build an entry. Callers are expected to have validated both parts;
    /// [`crate::FeedbackStore::submit`] is the guarded way in.
    #[must_use]
    pub(crate) fn new(target: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            comment: comment.into(),
        }
    }

    /// The peer this feedback is about, verbatim as submitted.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The trimmed comment text.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }
}
