// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml`
//! file under the platform config directory.
//!
//! All timing values are optional in the file; missing values fall back to
//! the defaults in [`defaults`].

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    ALERT_TICK_INTERVAL_MS, DEFAULT_ALERT_COLLAPSE_DELAY_MS, DEFAULT_SAVE_CONFIRMATION_DELAY_MS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlanLens";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Delay in milliseconds before a standing alert collapses.
    #[serde(default)]
    pub alert_collapse_delay_ms: Option<u64>,
    /// Delay in milliseconds before a save confirmation auto-closes.
    #[serde(default)]
    pub save_confirmation_delay_ms: Option<u64>,
    /// Severity name used for save confirmations; unknown names fall back
    /// to `info`.
    #[serde(default)]
    pub save_confirmation_severity: Option<String>,
}

impl Config {
    /// Resolves the configured (or default) alert timings.
    #[must_use]
    pub fn alert_timings(&self) -> AlertTimings {
        AlertTimings {
            collapse_delay: Duration::from_millis(
                self.alert_collapse_delay_ms
                    .unwrap_or(DEFAULT_ALERT_COLLAPSE_DELAY_MS),
            ),
            save_confirmation_delay: Duration::from_millis(
                self.save_confirmation_delay_ms
                    .unwrap_or(DEFAULT_SAVE_CONFIRMATION_DELAY_MS),
            ),
        }
    }
}

/// Resolved timing knobs consumed by alert producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTimings {
    /// Delay before a standing collapsible alert collapses.
    pub collapse_delay: Duration,
    /// Lifetime of an auto-closing save confirmation.
    pub save_confirmation_delay: Duration,
}

impl Default for AlertTimings {
    fn default() -> Self {
        Config::default().alert_timings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
