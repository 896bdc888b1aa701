// SPDX-License-Identifier: MPL-2.0
//! Standing "unsaved changes" alert producer.
//!
//! On every relevant state change the watcher recomputes whether the
//! standing warning should be visible: there are unsaved edits and the user
//! is not on the editor screen where they could address them. It compares
//! against the *currently active* alert via the stable tag, severity and
//! message text; if an equivalent alert is already showing it does nothing,
//! so the alert's collapse timer is never reset by unrelated update cycles.
//!
//! The watcher is not invoked for banner interactions, so a manual
//! dismissal stands until the underlying inputs change again.

use super::Screen;
use crate::config::AlertTimings;
use crate::ui::alerts::{AlertOptions, AlertTag, AlertsHandle, Severity};
use std::time::Instant;

/// Tag identifying the standing unsaved-changes alert.
pub const UNSAVED_CHANGES_TAG: AlertTag = AlertTag("unsaved-changes");

/// Label used when the watched plan has no title yet.
pub const UNTITLED_PLAN_LABEL: &str = "Untitled plan";

/// Inputs the watcher derives the standing alert from.
///
/// `plan_title` may be absent while upstream state is still loading; the
/// watcher substitutes a placeholder instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct WatchInputs<'a> {
    pub screen: Screen,
    pub dirty: bool,
    pub plan_title: Option<&'a str>,
}

/// Derived-alert producer for unsaved edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsavedChangesWatcher;

impl UnsavedChangesWatcher {
    /// Reconciles the standing alert with the current inputs.
    pub fn sync(&self, alerts: &AlertsHandle, inputs: &WatchInputs<'_>, timings: &AlertTimings) {
        self.sync_at(alerts, inputs, timings, Instant::now());
    }

    /// Reconciles with an explicitly supplied clock reading.
    pub fn sync_at(
        &self,
        alerts: &AlertsHandle,
        inputs: &WatchInputs<'_>,
        timings: &AlertTimings,
        now: Instant,
    ) {
        let should_show = inputs.dirty && inputs.screen != Screen::Editor;
        let message = standing_message(inputs.plan_title);
        let state = alerts.state();

        if should_show {
            if !state.matches(UNSAVED_CHANGES_TAG, Severity::Edit, &message) {
                alerts.show_tagged_at(
                    UNSAVED_CHANGES_TAG,
                    message,
                    Severity::Edit,
                    AlertOptions::collapsible_after(timings.collapse_delay),
                    now,
                );
            }
        } else if state.is_visible && state.tag == Some(UNSAVED_CHANGES_TAG) {
            alerts.hide_alert();
        }
    }
}

fn standing_message(plan_title: Option<&str>) -> String {
    let title = match plan_title {
        Some(title) if !title.is_empty() => title,
        _ => UNTITLED_PLAN_LABEL,
    };
    format!("\u{201c}{title}\u{201d} has unsaved changes")
}
