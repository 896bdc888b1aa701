// SPDX-License-Identifier: MPL-2.0
//! Global transient-alert subsystem.
//!
//! At most one alert exists at any time. Showing a new one atomically
//! replaces the previous alert and cancels its timers; alerts can close
//! themselves after a delay, or collapse to a minimal pill and re-expand on
//! hover.
//!
//! # Components
//!
//! - [`alert`] - `AlertState`, `Severity`, `AlertOptions`, `AlertTag`
//! - [`timer`] - generation-keyed cancellable timers
//! - [`store`] - the single-slot state machine and its subscribers
//! - [`handle`] - cloneable shared access surface
//! - [`banner`] - the rendering component with hover routing
//!
//! # Usage
//!
//! ```
//! use plan_lens::ui::alerts::{AlertOptions, AlertsHandle, Severity};
//! use std::time::Duration;
//!
//! let alerts = AlertsHandle::new();
//! alerts.show_alert(
//!     "Plan saved",
//!     Severity::Info,
//!     AlertOptions::auto_close_after(Duration::from_secs(5)),
//! );
//! assert!(alerts.state().is_visible);
//! alerts.hide_alert();
//! ```

mod alert;
mod banner;
mod handle;
mod store;
mod timer;

pub use alert::{AlertOptions, AlertState, AlertTag, Severity};
pub use banner::{Banner, Message as BannerMessage};
pub use handle::AlertsHandle;
pub use store::{AlertStore, ListenerId};
pub use timer::{TimerController, TimerHandle, TimerKey};
