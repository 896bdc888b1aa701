// SPDX-License-Identifier: MPL-2.0
//! Generation-keyed cancellable timers for alert transitions.
//!
//! The controller owns the "which delayed transitions are still allowed to
//! happen" question and nothing else: it knows no alert content. Every
//! `cancel_all` advances a generation counter, so handles issued for a
//! previous alert can never cancel (and its deadlines can never fire into)
//! the state of a successor.

use std::time::{Duration, Instant};

/// Identifies which delayed transition a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Fully dismiss the alert.
    AutoClose,
    /// Collapse the alert to its minimal presentation.
    Collapse,
}

/// Opaque handle returned by [`TimerController::schedule`].
///
/// A handle from an older generation is stale: cancelling it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
    key: TimerKey,
}

#[derive(Debug)]
struct Pending {
    key: TimerKey,
    deadline: Instant,
}

/// Deadline-based timer set for the current alert generation.
///
/// Timers are polled by a periodic tick rather than spawned tasks, so
/// firing and cancellation stay synchronous with the rest of the state
/// machine.
#[derive(Debug, Default)]
pub struct TimerController {
    generation: u64,
    pending: Vec<Pending>,
}

impl TimerController {
    /// Creates a controller with no pending timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `now + delay`.
    ///
    /// At most one timer per key is pending; scheduling an already-pending
    /// key replaces its deadline.
    pub fn schedule(&mut self, key: TimerKey, delay: Duration, now: Instant) -> TimerHandle {
        self.pending.retain(|p| p.key != key);
        self.pending.push(Pending {
            key,
            deadline: now + delay,
        });
        TimerHandle {
            generation: self.generation,
            key,
        }
    }

    /// Cancels the timer behind `handle`, ignoring stale handles.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if handle.generation == self.generation {
            self.pending.retain(|p| p.key != handle.key);
        }
    }

    /// Drops every pending timer and invalidates all previously issued
    /// handles. Called at the start of every show and on every hide.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.generation += 1;
    }

    /// Removes and returns the keys whose deadline has passed, in deadline
    /// order.
    pub fn due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut fired: Vec<(Instant, TimerKey)> = Vec::new();
        self.pending.retain(|p| {
            if p.deadline <= now {
                fired.push((p.deadline, p.key));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, key)| key).collect()
    }

    /// Returns whether any timer is still pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }
}
