// SPDX-License-Identifier: MPL-2.0
//! `plan_lens` is a small training-plan authoring and viewing tool built
//! with the Iced GUI framework.
//!
//! Its correctness-sensitive core is the global transient-alert subsystem
//! in [`ui::alerts`]: a single-slot status banner with per-alert severity,
//! timed auto-close, and a collapse-then-expand-on-hover presentation
//! policy.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod plan;
pub mod ui;
