//! The feedback board: one roster and one feedback store behind the five
//! operations a presentation layer needs.
//!
//! The two halves are independent. Removing a peer never touches the store,
//! so feedback about a removed peer stays retrievable through
//! [`FeedbackBoard::feedback_for`].
//!
//! # Example
//!
//! ```
//! use peerfeedback::FeedbackBoard;
//!
//! let mut board = FeedbackBoard::new();
//! board.add_peer("Dina").unwrap();
//! board.submit_feedback("Dina", "Great work").unwrap();
//!
//! let entries = board.feedback_for("Dina");
//! assert_eq!(entries.last().unwrap().comment(), "Great work");
//! ```

use tracing::{debug, warn};

use crate::error::Result;
use crate::feedback::FeedbackEntry;
use crate::roster::Roster;
use crate::seed;
use crate::store::FeedbackStore;

/// Owns the roster and the feedback log for one process.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    roster: Roster,
    store: FeedbackStore,
}

impl FeedbackBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board holding the startup roster and feedback.
    #[must_use]
    pub fn seeded() -> Self {
        let mut roster = Roster::new();
        for name in seed::ROSTER {
            let added = roster.add(name);
            debug_assert!(added.is_ok(), "seed peer {name:?} rejected");
            if let Err(err) = added {
                warn!(peer = %name, error = %err, "Dropped seed peer");
            }
        }

        let mut store = FeedbackStore::new();
        for (target, comment) in seed::FEEDBACK {
            let submitted = store.submit(target, comment);
            debug_assert!(submitted.is_ok(), "seed feedback for {target:?} rejected");
            if let Err(err) = submitted {
                warn!(target_peer = %target, error = %err, "Dropped seed feedback");
            }
        }
        debug!(
            peers = roster.len(),
            entries = store.len(),
            "Seeded feedback board"
        );
        Self { roster, store }
    }

    /// Add a peer to the roster.
    ///
    /// # Errors
    ///
    /// Validation or duplicate errors from [`Roster::add`].
    pub fn add_peer(&mut self, name: &str) -> Result<()> {
        self.roster.add(name).inspect_err(|err| {
            debug!(error = %err, "Rejected add_peer");
        })
    }

    /// Remove a peer from the roster, returning the stored name.
    ///
    /// Feedback about the peer is kept.
    ///
    /// # Errors
    ///
    /// Validation or not-found errors from [`Roster::remove`].
    pub fn remove_peer(&mut self, name: &str) -> Result<String> {
        self.roster.remove(name).inspect_err(|err| {
            debug!(error = %err, "Rejected remove_peer");
        })
    }

    /// Roster names sorted ignoring case.
    #[must_use]
    pub fn list_peers(&self) -> Vec<String> {
        self.roster.list()
    }

    /// Record anonymous feedback about `target`.
    ///
    /// # Errors
    ///
    /// Validation errors from [`FeedbackStore::submit`].
    pub fn submit_feedback(&mut self, target: &str, comment: &str) -> Result<()> {
        self.store.submit(target, comment).inspect_err(|err| {
            debug!(error = %err, "Rejected submit_feedback");
        })
    }

    /// All feedback about exactly `target`, oldest first.
    #[must_use]
    pub fn feedback_for(&self, target: &str) -> Vec<FeedbackEntry> {
        self.store.aggregate(target)
    }

    /// Read access to the roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to the feedback log.
    #[must_use]
    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted_ignoring_case(names: &[String]) -> bool {
        names
            .windows(2)
            .all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase())
    }

    #[test]
    fn test_seeded_board() {
        let board = FeedbackBoard::seeded();

        assert_eq!(
            board.list_peers(),
            vec![
                "Dina Kamelia Binti Muhamad Husaini",
                "Fathima Nuha Nizar",
                "Lee Bi Ying",
                "Liau Ze Xi",
            ]
        );
        assert_eq!(board.store().len(), 4);
        assert_eq!(board.feedback_for("Fathima Nuha Nizar").len(), 2);
        assert!(board.feedback_for("Liau Ze Xi").is_empty());
    }

    #[test]
    fn test_seeded_board_keeps_every_seed_entry() {
        let board = FeedbackBoard::seeded();

        assert_eq!(board.roster().len(), seed::ROSTER.len());
        assert_eq!(board.store().len(), seed::FEEDBACK.len());
        for ((target, comment), entry) in seed::FEEDBACK.iter().zip(board.store().iter()) {
            assert_eq!(entry.target(), *target);
            assert_eq!(entry.comment(), *comment);
        }
    }

    #[test]
    fn test_added_peer_listed_once_in_trimmed_form() {
        let mut board = FeedbackBoard::new();
        board.add_peer("  Zara Tan ").unwrap();

        let peers = board.list_peers();
        assert_eq!(peers.iter().filter(|p| *p == "Zara Tan").count(), 1);
        assert!(!peers.iter().any(|p| p.contains("  ")));
    }

    #[test]
    fn test_add_peer_duplicate_ignoring_case() {
        let mut board = FeedbackBoard::new();
        board.add_peer("Alice").unwrap();

        assert!(board.add_peer("alice").unwrap_err().is_duplicate());
        assert_eq!(board.list_peers(), vec!["Alice"]);
    }

    #[test]
    fn test_add_peer_blank() {
        let mut board = FeedbackBoard::new();

        assert!(board.add_peer("").unwrap_err().is_validation());
        assert!(board.add_peer("   ").unwrap_err().is_validation());
        assert!(board.list_peers().is_empty());
    }

    #[test]
    fn test_remove_absent_peer() {
        let mut board = FeedbackBoard::seeded();
        let before = board.list_peers();

        assert!(board.remove_peer("Nobody").unwrap_err().is_not_found());
        assert_eq!(board.list_peers(), before);
    }

    #[test]
    fn test_add_then_remove() {
        let mut board = FeedbackBoard::seeded();
        board.add_peer("Bob").unwrap();
        assert_eq!(board.remove_peer("Bob").unwrap(), "Bob");

        assert!(!board.list_peers().contains(&"Bob".to_string()));
    }

    #[test]
    fn test_submit_then_feedback_for() {
        let mut board = FeedbackBoard::new();
        board.add_peer("Dina").unwrap();
        board.submit_feedback("Dina", "Great work").unwrap();

        let entries = board.feedback_for("Dina");
        let last = entries.last().unwrap();
        assert_eq!(last.target(), "Dina");
        assert_eq!(last.comment(), "Great work");
    }

    #[test]
    fn test_submit_does_not_require_roster_membership() {
        let mut board = FeedbackBoard::new();
        board.submit_feedback("Ghost", "Still counted").unwrap();

        assert_eq!(board.feedback_for("Ghost").len(), 1);
    }

    #[test]
    fn test_feedback_for_unknown_peer() {
        let board = FeedbackBoard::seeded();
        assert!(board.feedback_for("NonexistentPeer").is_empty());
    }

    #[test]
    fn test_removing_peer_keeps_feedback() {
        let mut board = FeedbackBoard::seeded();
        let before = board.feedback_for("Lee Bi Ying");

        board.remove_peer("lee bi ying").unwrap();

        assert!(!board.roster().exists("Lee Bi Ying"));
        assert_eq!(board.feedback_for("Lee Bi Ying"), before);
    }

    #[test]
    fn test_list_sorted_after_every_mutation() {
        let mut board = FeedbackBoard::seeded();

        for name in ["zed", "Amy", "bart", "Yvonne", "aaron"] {
            board.add_peer(name).unwrap();
            assert!(is_sorted_ignoring_case(&board.list_peers()));
        }
        for name in ["AMY", "Liau Ze Xi"] {
            board.remove_peer(name).unwrap();
            assert!(is_sorted_ignoring_case(&board.list_peers()));
        }
    }

    #[test]
    fn test_rejected_operations_do_not_mutate() {
        let mut board = FeedbackBoard::seeded();
        let peers = board.list_peers();
        let entries = board.store().len();

        let _ = board.add_peer(" ");
        let _ = board.add_peer("LIAU ZE XI");
        let _ = board.remove_peer("missing");
        let _ = board.submit_feedback("", "orphan");
        let _ = board.submit_feedback("Liau Ze Xi", "\t");

        assert_eq!(board.list_peers(), peers);
        assert_eq!(board.store().len(), entries);
    }
}
