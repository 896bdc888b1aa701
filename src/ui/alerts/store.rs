// SPDX-License-Identifier: MPL-2.0
//! Single-slot alert state machine.
//!
//! The store is the only place alert state is mutated. Showing an alert
//! atomically replaces whatever was active before it: the previous alert's
//! timers are cancelled (generation bump in [`TimerController`]) before the
//! new alert's timers are scheduled, so two generations of timers are never
//! live at the same time.
//!
//! Every method that involves time takes an explicit `now` so the state
//! machine is fully deterministic; the shared handle supplies
//! `Instant::now()` for interactive use.

use super::alert::{AlertOptions, AlertState, AlertTag, Severity};
use super::timer::{TimerController, TimerKey};
use crate::diagnostics::DiagnosticsHandle;
use std::time::Instant;

/// Identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&AlertState) + Send>;

/// Owns the singleton alert slot, its timers, and its subscribers.
#[derive(Default)]
pub struct AlertStore {
    state: AlertState,
    timers: TimerController,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl std::fmt::Debug for AlertStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertStore")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AlertStore {
    /// Creates an empty store with no alert visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires a diagnostics handle so Warning/Error alerts leave a trace.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns the current alert state.
    #[must_use]
    pub fn state(&self) -> &AlertState {
        &self.state
    }

    /// Shows an alert, replacing any active one.
    ///
    /// Cancels every timer belonging to the previous alert before
    /// scheduling the new alert's auto-close and collapse timers, then
    /// notifies listeners synchronously. An empty message is ignored.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        options: AlertOptions,
        now: Instant,
    ) {
        self.show_tagged(None, message, severity, options, now);
    }

    /// Shows an alert carrying a producer's stable tag.
    pub fn show_tagged(
        &mut self,
        tag: Option<AlertTag>,
        message: impl Into<String>,
        severity: Severity,
        options: AlertOptions,
        now: Instant,
    ) {
        let message = message.into();
        if message.is_empty() {
            return;
        }

        self.timers.cancel_all();

        if let Some(delay) = options.auto_close_delay {
            self.timers.schedule(TimerKey::AutoClose, delay, now);
        }
        if options.collapsible {
            if let Some(delay) = options.collapse_delay {
                self.timers.schedule(TimerKey::Collapse, delay, now);
            }
        }

        if let Some(diagnostics) = &self.diagnostics {
            match severity {
                Severity::Warning => diagnostics.log_warning(message.clone()),
                Severity::Error => diagnostics.log_error(message.clone()),
                Severity::Info | Severity::Edit => {}
            }
        }

        self.state = AlertState {
            is_visible: true,
            message,
            severity,
            options,
            is_collapsed: false,
            tag,
        };
        self.notify();
    }

    /// Hides the active alert and cancels all of its timers.
    ///
    /// Idempotent: with no alert active this only notifies listeners.
    pub fn hide(&mut self) {
        self.timers.cancel_all();
        self.state = AlertState::default();
        self.notify();
    }

    /// Re-expands a collapsed alert (hover enter).
    ///
    /// Does not reschedule the collapse timer; the alert stays expanded
    /// until the consumer collapses it again, typically on pointer leave.
    /// Ignored unless the active alert is visible and collapsible.
    pub fn expand(&mut self) {
        if self.state.is_visible && self.state.options.collapsible && self.state.is_collapsed {
            self.state.is_collapsed = false;
            self.notify();
        }
    }

    /// Collapses the alert immediately (pointer leave).
    ///
    /// Ignored unless the active alert is visible and collapsible.
    pub fn collapse_now(&mut self) {
        if self.state.is_visible && self.state.options.collapsible && !self.state.is_collapsed {
            self.state.is_collapsed = true;
            self.notify();
        }
    }

    /// Fires any timers that are due at `now`.
    ///
    /// A due collapse timer sets `is_collapsed`; a due auto-close timer
    /// hides the alert, which also cancels a still-pending collapse timer.
    pub fn tick(&mut self, now: Instant) {
        for key in self.timers.due(now) {
            match key {
                TimerKey::Collapse => {
                    if self.state.is_visible && self.state.options.collapsible {
                        self.state.is_collapsed = true;
                        self.notify();
                    }
                }
                TimerKey::AutoClose => self.hide(),
            }
        }
    }

    /// Returns whether any timer is still pending for the active alert.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timers.has_pending()
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Registers a listener called synchronously on every state transition.
    pub fn subscribe(&mut self, listener: impl Fn(&AlertState) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered listener.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}
