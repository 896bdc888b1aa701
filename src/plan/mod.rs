// SPDX-License-Identifier: MPL-2.0
//! Minimal training-plan document model.
//!
//! Persistence and the full document schema live outside this crate; the
//! shell only needs a title, free-form notes, and a dirty flag for the
//! unsaved-changes watcher to observe.

use serde::{Deserialize, Serialize};

/// A training-plan document as edited in the shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlanDocument {
    pub title: String,
    pub notes: String,
}

impl PlanDocument {
    /// Creates a plan with the given title and empty notes.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: String::new(),
        }
    }
}

/// Tracks whether the open document has unsaved edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSession {
    dirty: bool,
}

impl EditSession {
    /// Creates a clean session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the document as having unsaved edits.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the dirty flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns whether there are unsaved edits.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_tracks_dirty_transitions() {
        let mut session = EditSession::new();
        assert!(!session.is_dirty());

        session.mark_dirty();
        assert!(session.is_dirty());

        session.mark_saved();
        assert!(!session.is_dirty());
    }
}
