//! The roster of peers eligible to receive feedback.
//!
//! Names are unique ignoring case. Insertion order is kept internally but has
//! no meaning; [`Roster::list`] always returns names sorted case-insensitively.

use tracing::debug;

use crate::error::{Error, Result};

/// Case folding used for every roster comparison.
fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Ordered set of unique peer names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a peer.
    ///
    /// The name is trimmed before it is checked and stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the trimmed name is empty, or
    /// [`Error::Duplicate`] if a peer with the same name ignoring case exists.
    pub fn add(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("peer name"));
        }
        if self.position(name).is_some() {
            return Err(Error::duplicate(name));
        }

        self.names.push(name.to_string());
        debug!(peer = %name, size = self.names.len(), "Peer added to roster");
        Ok(())
    }

    /// Remove a peer, matching the name ignoring case.
    ///
    /// Returns the name as it was stored on the roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the trimmed name is empty, or
    /// [`Error::NotFound`] if no peer matches.
    pub fn remove(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("peer name"));
        }

        let index = self.position(name).ok_or_else(|| Error::not_found(name))?;
        let removed = self.names.remove(index);
        debug!(peer = %removed, size = self.names.len(), "Peer removed from roster");
        Ok(removed)
    }

    /// All peers, sorted ignoring case.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut sorted = self.names.clone();
        sorted.sort_by_cached_key(|name| fold(name));
        sorted
    }

    /// Whether a peer with this name (trimmed, ignoring case) is on the roster.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look up a peer ignoring case and return the stored spelling.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&str> {
        self.position(name.trim())
            .map(|index| self.names[index].as_str())
    }

    /// Number of peers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no peers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = fold(name);
        self.names.iter().position(|existing| fold(existing) == wanted)
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    /// Collect names into a roster, skipping blanks and case-insensitive
    /// duplicates.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut roster = Self::new();
        for name in iter {
            let name: String = name.into();
            if let Err(err) = roster.add(&name) {
                debug!(peer = %name, error = %err, "Skipped name while collecting roster");
            }
        }
        roster
    }
}
