// SPDX-License-Identifier: MPL-2.0
//! Behavioral suite for the transient-alert subsystem.
//!
//! Time never passes for real here: every sequence drives the store with
//! explicit clock readings so the timed properties are deterministic.

use plan_lens::ui::alerts::{AlertOptions, AlertState, AlertsHandle, Severity};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn alert_is_visible_immediately_after_show() {
    let alerts = AlertsHandle::new();
    alerts.show_alert("Plan saved", Severity::Info, AlertOptions::default());

    let state = alerts.state();
    assert!(state.is_visible);
    assert_eq!(state.message, "Plan saved");
    assert_eq!(state.severity, Severity::Info);
    assert!(!state.is_collapsed);
}

#[test]
fn auto_close_dismisses_without_observer_action() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();
    alerts.show_alert_at(
        "done",
        Severity::Info,
        AlertOptions::auto_close_after(ms(5000)),
        t0,
    );

    alerts.tick(t0 + ms(4999));
    assert!(alerts.state().is_visible);

    alerts.tick(t0 + ms(5001));
    assert!(!alerts.state().is_visible);
    assert!(!alerts.has_pending_timers());
}

#[test]
fn replacement_shows_only_the_newest_alert() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();
    alerts.show_alert_at(
        "low battery",
        Severity::Warning,
        AlertOptions::auto_close_after(ms(1000)),
        t0,
    );
    alerts.show_alert_at("sync failed", Severity::Error, AlertOptions::default(), t0);

    let state = alerts.state();
    assert_eq!(state.message, "sync failed");
    assert_eq!(state.severity, Severity::Error);

    // The replaced alert's auto-close must never fire into the new one.
    alerts.tick(t0 + ms(60_000));
    let state = alerts.state();
    assert!(state.is_visible);
    assert_eq!(state.message, "sync failed");
}

#[test]
fn rapid_replacement_chains_keep_a_single_live_generation() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();

    for i in 0..50u64 {
        alerts.show_alert_at(
            format!("alert {i}"),
            Severity::Info,
            AlertOptions::collapsible_after(ms(10)).with_auto_close(ms(20)),
            t0 + ms(i),
        );
    }

    // Only the final generation's timers exist; they fire exactly once.
    let state = alerts.state();
    assert_eq!(state.message, "alert 49");
    alerts.tick(t0 + ms(49) + ms(15));
    assert!(alerts.state().is_collapsed);
    alerts.tick(t0 + ms(49) + ms(25));
    assert!(!alerts.state().is_visible);
    assert!(!alerts.has_pending_timers());
}

#[test]
fn manual_dismissal_is_synchronous() {
    let alerts = AlertsHandle::new();
    alerts.show_alert(
        "sticky",
        Severity::Error,
        AlertOptions::auto_close_after(ms(60_000)),
    );
    assert!(alerts.state().is_visible);

    alerts.hide_alert();
    assert!(!alerts.state().is_visible);
    assert!(!alerts.has_pending_timers());
}

#[test]
fn collapse_expand_cycle_follows_hover() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();
    alerts.show_alert_at(
        "unsaved changes",
        Severity::Edit,
        AlertOptions::collapsible_after(ms(3000)),
        t0,
    );

    // Visible and expanded immediately.
    let state = alerts.state();
    assert!(state.is_visible);
    assert!(!state.is_collapsed);

    // Collapsed shortly after the delay.
    alerts.tick(t0 + ms(3001));
    assert!(alerts.state().is_collapsed);

    // Hover expands immediately and does not reschedule the collapse.
    alerts.expand();
    assert!(!alerts.state().is_collapsed);
    alerts.tick(t0 + ms(60_000));
    assert!(!alerts.state().is_collapsed);

    // Pointer leave collapses again without waiting for the delay.
    alerts.collapse_now();
    assert!(alerts.state().is_collapsed);
}

#[test]
fn collapse_delay_is_ignored_without_collapsible() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();
    alerts.show_alert_at(
        "rigid",
        Severity::Info,
        AlertOptions {
            collapsible: false,
            collapse_delay: Some(ms(100)),
            auto_close_delay: None,
        },
        t0,
    );

    alerts.tick(t0 + ms(10_000));
    let state = alerts.state();
    assert!(state.is_visible);
    assert!(!state.is_collapsed);
    assert!(!alerts.has_pending_timers());
}

#[test]
fn hide_is_idempotent_and_side_effect_free() {
    let alerts = AlertsHandle::new();

    alerts.hide_alert();
    assert_eq!(alerts.state(), AlertState::default());

    alerts.hide_alert();
    alerts.hide_alert();
    assert_eq!(alerts.state(), AlertState::default());
    assert!(!alerts.has_pending_timers());
}

#[test]
fn expand_and_collapse_with_no_alert_are_noops() {
    let alerts = AlertsHandle::new();
    alerts.expand();
    alerts.collapse_now();
    assert_eq!(alerts.state(), AlertState::default());
}

#[test]
fn listeners_observe_every_transition_until_unsubscribed() {
    let alerts = AlertsHandle::new();
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&transitions);
    let id = alerts.subscribe(move |_state| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let t0 = Instant::now();
    alerts.show_alert_at(
        "observed",
        Severity::Info,
        AlertOptions::auto_close_after(ms(100)),
        t0,
    );
    alerts.tick(t0 + ms(200));
    assert_eq!(transitions.load(Ordering::SeqCst), 2); // show + auto-close

    alerts.unsubscribe(id);
    alerts.show_alert("unobserved", Severity::Info, AlertOptions::default());
    assert_eq!(transitions.load(Ordering::SeqCst), 2);
}

#[test]
fn auto_close_cancels_a_later_collapse() {
    let alerts = AlertsHandle::new();
    let t0 = Instant::now();
    alerts.show_alert_at(
        "short lived",
        Severity::Info,
        AlertOptions::collapsible_after(ms(5000)).with_auto_close(ms(2000)),
        t0,
    );

    alerts.tick(t0 + ms(2001));
    assert!(!alerts.state().is_visible);
    assert!(!alerts.has_pending_timers());

    // The collapse deadline passing later must not resurrect anything.
    alerts.tick(t0 + ms(6000));
    assert_eq!(alerts.state(), AlertState::default());
}
