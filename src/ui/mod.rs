// SPDX-License-Identifier: MPL-2.0
//! UI building blocks shared across screens.

pub mod alerts;
pub mod design_tokens;
