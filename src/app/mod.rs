// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the plan scaffolding, the alert subsystem, and
//! the unsaved-changes watcher together, and keeps the policy decisions
//! (when the watcher runs, when the tick subscription is live, what happens
//! on window close) close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod screen;
mod subscription;
pub mod unsaved_changes;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, AlertTimings, Config};
use crate::diagnostics::DiagnosticsHandle;
use crate::plan::{EditSession, PlanDocument};
use crate::ui::alerts::{AlertsHandle, Severity};
use unsaved_changes::{UnsavedChangesWatcher, WatchInputs};

use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    plan: PlanDocument,
    session: EditSession,
    /// Shared access surface for the single alert slot.
    alerts: AlertsHandle,
    watcher: UnsavedChangesWatcher,
    timings: AlertTimings,
    /// Severity of the "Plan saved" confirmation, coerced from config.
    confirmation_severity: Severity,
    /// Session diagnostics; Warning/Error alerts leave a trace here.
    diagnostics: DiagnosticsHandle,
}

impl App {
    /// Builds the initial application state from CLI flags and the
    /// persisted configuration.
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        Self::from_config(config::load().unwrap_or_default(), flags)
    }

    /// Builds the application state from an explicit configuration.
    #[must_use]
    pub fn from_config(config: Config, flags: Flags) -> Self {
        let diagnostics = DiagnosticsHandle::new();

        Self {
            screen: Screen::Overview,
            plan: flags.title.map(PlanDocument::with_title).unwrap_or_default(),
            session: EditSession::new(),
            alerts: AlertsHandle::with_diagnostics(diagnostics.clone()),
            watcher: UnsavedChangesWatcher,
            timings: config.alert_timings(),
            confirmation_severity: Severity::parse(
                config.save_confirmation_severity.as_deref().unwrap_or("info"),
            ),
            diagnostics,
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        if self.plan.title.is_empty() {
            "PlanLens".to_string()
        } else {
            format!("PlanLens — {}", self.plan.title)
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Routes a message through the update logic.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    /// Renders the current screen with the alert banner stacked on top.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Batches the native event and alert tick subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.alerts.has_pending_timers()),
        ])
    }

    /// Shared handle to the alert subsystem.
    #[must_use]
    pub fn alerts(&self) -> &AlertsHandle {
        &self.alerts
    }

    /// Session diagnostics handle.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    /// Reconciles the standing unsaved-changes alert with current state.
    fn sync_unsaved_alert(&self) {
        let inputs = WatchInputs {
            screen: self.screen,
            dirty: self.session.is_dirty(),
            plan_title: if self.plan.title.is_empty() {
                None
            } else {
                Some(self.plan.title.as_str())
            },
        };
        self.watcher.sync(&self.alerts, &inputs, &self.timings);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
