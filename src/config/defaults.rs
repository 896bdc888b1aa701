// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for the timing knobs of the alert subsystem.

// ==========================================================================
// Alert Timing Defaults
// ==========================================================================

/// Delay before a standing collapsible alert collapses to its pill (ms).
pub const DEFAULT_ALERT_COLLAPSE_DELAY_MS: u64 = 4000;

/// How long a save confirmation stays on screen before auto-closing (ms).
pub const DEFAULT_SAVE_CONFIRMATION_DELAY_MS: u64 = 5000;

/// Interval of the periodic tick that fires due alert timers (ms).
///
/// The tick only runs while at least one timer is pending.
pub const ALERT_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events retained in the session ring buffer.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;
