// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::alerts::{AlertOptions, BannerMessage};
use iced::{window, Task};

/// Routes a top-level message, returning any follow-up task.
///
/// The unsaved-changes watcher runs after every change to its inputs
/// (screen, dirty flag, title) but deliberately NOT after banner
/// interactions: a manual dismissal must stand until the inputs change.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            app.sync_unsaved_alert();
            Task::none()
        }
        Message::TitleEdited(title) => {
            app.plan.title = title;
            app.session.mark_dirty();
            app.sync_unsaved_alert();
            Task::none()
        }
        Message::NotesEdited(notes) => {
            app.plan.notes = notes;
            app.session.mark_dirty();
            app.sync_unsaved_alert();
            Task::none()
        }
        Message::SavePlan => {
            app.session.mark_saved();
            app.alerts.show_alert(
                "Plan saved",
                app.confirmation_severity,
                AlertOptions::auto_close_after(app.timings.save_confirmation_delay),
            );
            app.sync_unsaved_alert();
            Task::none()
        }
        Message::Alert(BannerMessage::Dismiss) => {
            app.alerts.hide_alert();
            Task::none()
        }
        Message::Alert(BannerMessage::HoverEntered) => {
            app.alerts.expand();
            Task::none()
        }
        Message::Alert(BannerMessage::HoverLeft) => {
            app.alerts.collapse_now();
            Task::none()
        }
        Message::Tick(now) => {
            app.alerts.tick(now);
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            // No timer may outlive its observers.
            app.alerts.shutdown();
            window::close(id)
        }
    }
}
