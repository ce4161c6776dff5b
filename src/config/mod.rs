// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast store configuration, including loading and saving
//! user preferences to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep toasts around a little longer
//! config.duration_ms = Some(6000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.duration_ms, Some(6000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;
mod tick_interval;

pub use defaults::*;
pub use tick_interval::TickInterval;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lifetime of a toast pushed without an explicit duration.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub dismissable: Option<bool>,
    #[serde(default)]
    pub pausable: Option<bool>,
    /// Period of the progress recomputation, clamped by [`TickInterval`].
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_DURATION_MS),
            dismissable: Some(DEFAULT_DISMISSABLE),
            pausable: Some(DEFAULT_PAUSABLE),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
