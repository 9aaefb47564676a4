//! User settings.
//!
//! Settings are read once at startup from a JSON file in the platform config
//! directory. They are never written back by the viewer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::{WindowHours, DEFAULT_BASE_URL};

/// Errors that can occur while reading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User settings loaded at startup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Base URL of the reporting service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Initial time window, one of the window option values
    #[serde(default = "default_window_hours")]
    pub default_window_hours: String,
}

fn default_version() -> u32 {
    1
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_window_hours() -> String {
    let window = WindowHours::default();
    let value: &str = window.as_ref();
    value.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            base_url: default_base_url(),
            default_window_hours: default_window_hours(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for the viewer
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nexrain-viewer"))
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The configured default window, or the built-in default when the
    /// configured value is not an option
    pub fn default_window(&self) -> WindowHours {
        WindowHours::from_param(&self.default_window_hours).unwrap_or_else(|| {
            tracing::warn!(
                "Ignoring unsupported default window {:?}",
                self.default_window_hours
            );
            WindowHours::default()
        })
    }
}
