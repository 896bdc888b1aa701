// SPDX-License-Identifier: MPL-2.0
//! Shared access surface for the alert store.
//!
//! Every consumer (screens, producers, the banner message handlers) holds a
//! clone of the same [`AlertsHandle`]; identity is stable for the lifetime
//! of the application, so producers can keep references without the
//! operations "changing out from under them" between update cycles.

use super::alert::{AlertOptions, AlertState, AlertTag, Severity};
use super::store::{AlertStore, ListenerId};
use crate::diagnostics::DiagnosticsHandle;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Cheaply cloneable handle to the single [`AlertStore`] instance.
#[derive(Debug, Clone, Default)]
pub struct AlertsHandle {
    store: Arc<Mutex<AlertStore>>,
}

impl AlertsHandle {
    /// Creates a handle over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle whose store reports Warning/Error alerts to
    /// `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(diagnostics: DiagnosticsHandle) -> Self {
        let handle = Self::new();
        handle.lock().set_diagnostics(diagnostics);
        handle
    }

    fn lock(&self) -> MutexGuard<'_, AlertStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Shows an alert, replacing any active one.
    pub fn show_alert(&self, message: impl Into<String>, severity: Severity, options: AlertOptions) {
        self.show_alert_at(message, severity, options, Instant::now());
    }

    /// Shows an alert with an explicitly supplied clock reading.
    ///
    /// Used by headless embeddings and deterministic tests that drive time
    /// themselves; interactive callers use [`Self::show_alert`].
    pub fn show_alert_at(
        &self,
        message: impl Into<String>,
        severity: Severity,
        options: AlertOptions,
        now: Instant,
    ) {
        self.lock().show(message, severity, options, now);
    }

    /// Shows a tagged alert on behalf of a producer.
    pub fn show_tagged_at(
        &self,
        tag: AlertTag,
        message: impl Into<String>,
        severity: Severity,
        options: AlertOptions,
        now: Instant,
    ) {
        self.lock().show_tagged(Some(tag), message, severity, options, now);
    }

    /// Hides the active alert, cancelling its timers. Idempotent.
    pub fn hide_alert(&self) {
        self.lock().hide();
    }

    /// Returns a snapshot of the current alert state.
    #[must_use]
    pub fn state(&self) -> AlertState {
        self.lock().state().clone()
    }

    /// Re-expands a collapsed alert (hover enter). No-op otherwise.
    pub fn expand(&self) {
        self.lock().expand();
    }

    /// Collapses the alert immediately (pointer leave). No-op otherwise.
    pub fn collapse_now(&self) {
        self.lock().collapse_now();
    }

    /// Fires any timers due at `now`.
    pub fn tick(&self, now: Instant) {
        self.lock().tick(now);
    }

    /// Returns whether the active alert still has pending timers.
    ///
    /// The application uses this to gate its periodic tick subscription.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.lock().has_pending_timers()
    }

    /// Registers a listener invoked synchronously on every transition.
    ///
    /// The listener runs while the store is borrowed, so it must not call
    /// back into this handle.
    pub fn subscribe(&self, listener: impl Fn(&AlertState) + Send + 'static) -> ListenerId {
        self.lock().subscribe(listener)
    }

    /// Removes a previously registered listener.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.lock().unsubscribe(id);
    }

    /// Cancels outstanding timers and clears the slot on shutdown.
    ///
    /// Hosts that outlive the UI (long-lived test runners, embedding
    /// environments) call this so no timer outlives its observers.
    pub fn shutdown(&self) {
        self.lock().hide();
    }
}
