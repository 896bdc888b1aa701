// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the severity levels, per-alert presentation options,
//! and the observable `AlertState` snapshot shared with every consumer.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Severity level determines visual styling and diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block editing (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
    /// Standing editing-related notice, e.g. unsaved changes (violet).
    Edit,
}

impl Severity {
    /// Parses a severity name, coercing unknown values to `Info`.
    ///
    /// Used wherever an untyped severity reaches the crate boundary, e.g.
    /// the `save_confirmation_severity` configuration key.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            "edit" => Severity::Edit,
            _ => Severity::Info,
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
            Severity::Edit => palette::EDIT_500,
        }
    }
}

/// Stable identifier a producer attaches to a standing alert it controls.
///
/// Producers compare this tag (together with severity and message text)
/// against the active alert to decide whether they need to act, instead of
/// comparing rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertTag(pub &'static str);

/// Per-alert presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertOptions {
    /// Whether the alert collapses to a minimal pill after `collapse_delay`
    /// and re-expands on hover.
    pub collapsible: bool,
    /// Delay before auto-collapse. Only meaningful when `collapsible`.
    pub collapse_delay: Option<Duration>,
    /// Delay before the alert is fully dismissed. `None` means the alert
    /// stays until manually dismissed or replaced.
    pub auto_close_delay: Option<Duration>,
}

impl AlertOptions {
    /// Options for an alert that collapses after `delay` and re-expands on hover.
    #[must_use]
    pub fn collapsible_after(delay: Duration) -> Self {
        Self {
            collapsible: true,
            collapse_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Options for an alert that dismisses itself after `delay`.
    #[must_use]
    pub fn auto_close_after(delay: Duration) -> Self {
        Self {
            auto_close_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Sets the auto-close delay, keeping the other options.
    #[must_use]
    pub fn with_auto_close(mut self, delay: Duration) -> Self {
        self.auto_close_delay = Some(delay);
        self
    }
}

/// Observable snapshot of the single alert slot.
///
/// `is_collapsed` is presentation sub-state: it can only be `true` while the
/// alert is visible and its options are `collapsible`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertState {
    pub is_visible: bool,
    pub message: String,
    pub severity: Severity,
    pub options: AlertOptions,
    pub is_collapsed: bool,
    pub tag: Option<AlertTag>,
}

impl AlertState {
    /// Returns whether the active alert matches a producer's standing alert.
    #[must_use]
    pub fn matches(&self, tag: AlertTag, severity: Severity, message: &str) -> bool {
        self.is_visible
            && self.tag == Some(tag)
            && self.severity == severity
            && self.message == message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_coerces_to_info() {
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("edit"), Severity::Edit);
        assert_eq!(Severity::parse("fatal"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
            Severity::Edit.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_state_is_empty_and_hidden() {
        let state = AlertState::default();
        assert!(!state.is_visible);
        assert!(state.message.is_empty());
        assert_eq!(state.severity, Severity::Info);
        assert!(!state.is_collapsed);
        assert!(state.tag.is_none());
    }

    #[test]
    fn matches_requires_visibility_tag_severity_and_message() {
        let tag = AlertTag("standing");
        let state = AlertState {
            is_visible: true,
            message: "unsaved".to_string(),
            severity: Severity::Edit,
            tag: Some(tag),
            ..AlertState::default()
        };

        assert!(state.matches(tag, Severity::Edit, "unsaved"));
        assert!(!state.matches(tag, Severity::Warning, "unsaved"));
        assert!(!state.matches(tag, Severity::Edit, "other"));
        assert!(!state.matches(AlertTag("different"), Severity::Edit, "unsaved"));

        let hidden = AlertState {
            is_visible: false,
            ..state
        };
        assert!(!hidden.matches(tag, Severity::Edit, "unsaved"));
    }
}
