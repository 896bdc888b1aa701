// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for user-visible warnings and errors.
//!
//! Alert producers and the alert store report Warning/Error severities
//! here so a session's recent problems can be inspected without scrolling
//! back through transient UI. Events live in a memory-bounded circular
//! buffer behind a cheaply cloneable handle.

mod buffer;
mod events;

pub use buffer::EventBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};

use std::sync::{Arc, Mutex, MutexGuard};

/// Handle for recording diagnostic events.
///
/// Cheap to clone; all clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<EventBuffer>>,
}

impl DiagnosticsHandle {
    /// Creates a handle over a fresh buffer with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle over a fresh buffer retaining `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(EventBuffer::with_capacity(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EventBuffer> {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Records a warning event.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.lock().push(DiagnosticEvent::new(
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
        ));
    }

    /// Records an error event.
    pub fn log_error(&self, message: impl Into<String>) {
        self.lock().push(DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        }));
    }

    /// Returns the retained events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::new();
        let clone = handle.clone();

        handle.log_warning("from original");
        clone.log_error("from clone");

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "from original");
        assert_eq!(events[1].message(), "from clone");
    }
}
