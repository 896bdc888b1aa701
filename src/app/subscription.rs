// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ALERT_TICK_INTERVAL_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription that fires due alert timers.
///
/// Active only while at least one timer is pending, so an idle application
/// schedules no wakeups.
pub fn create_tick_subscription(timers_pending: bool) -> Subscription<Message> {
    if timers_pending {
        time::every(Duration::from_millis(ALERT_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the native event subscription.
///
/// Window close requests are surfaced so outstanding alert timers can be
/// cancelled before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}
