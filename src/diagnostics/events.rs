// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a captured diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A warning surfaced to the user.
    Warning { message: String },
    /// An error surfaced to the user.
    Error { message: String },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was captured.
    pub at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }

    /// Returns the message carried by this event.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.kind {
            DiagnosticEventKind::Warning { message } | DiagnosticEventKind::Error { message } => {
                message
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_reachable_for_both_kinds() {
        let warning = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "w".to_string(),
        });
        let error = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: "e".to_string(),
        });
        assert_eq!(warning.message(), "w");
        assert_eq!(error.message(), "e");
    }
}
