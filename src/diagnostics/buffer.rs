// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded circular buffer for diagnostic events.

use super::events::DiagnosticEvent;
use crate::config::defaults::DEFAULT_DIAGNOSTICS_CAPACITY;
use std::collections::VecDeque;

/// Ring buffer that evicts the oldest event once full.
#[derive(Debug)]
pub struct EventBuffer {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl EventBuffer {
    /// Creates a buffer retaining at most `capacity` events.
    ///
    /// A zero capacity is bumped to one so pushes are never silently lost
    /// without retaining anything.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an event, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the buffer holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the retained events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.events.iter().cloned().collect()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::super::events::DiagnosticEventKind;
    use super::*;

    fn warning(message: &str) -> DiagnosticEvent {
        DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.to_string(),
        })
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut buffer = EventBuffer::with_capacity(2);
        buffer.push(warning("a"));
        buffer.push(warning("b"));
        buffer.push(warning("c"));

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].message(), "b");
        assert_eq!(snapshot[1].message(), "c");
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut buffer = EventBuffer::with_capacity(0);
        buffer.push(warning("only"));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn default_capacity_comes_from_the_config_defaults() {
        let mut buffer = EventBuffer::default();
        for i in 0..=DEFAULT_DIAGNOSTICS_CAPACITY {
            buffer.push(warning(&format!("event {i}")));
        }
        assert_eq!(buffer.len(), DEFAULT_DIAGNOSTICS_CAPACITY);
    }
}
