// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::alerts;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigate to another screen.
    SwitchScreen(Screen),
    /// Alert banner interaction (dismiss, hover enter/leave).
    Alert(alerts::BannerMessage),
    /// The plan title was edited.
    TitleEdited(String),
    /// The plan notes were edited.
    NotesEdited(String),
    /// Persist the current plan.
    SavePlan,
    /// Periodic tick that fires due alert timers.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional title for the initially open plan.
    pub title: Option<String>,
}
