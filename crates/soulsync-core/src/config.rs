//! TOML-based application configuration.
//!
//! Stores user preferences for the reminder core:
//! - Notification preferences (enabled, vibration, custom sound)
//! - Hydration goal and reminder cadence
//!
//! Configuration is stored at `~/.config/soulsync/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub vibration: bool,
    /// Platform sound name to use instead of the default.
    #[serde(default)]
    pub custom_sound: Option<String>,
}

/// Hydration tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Daily intake goal in liters.
    #[serde(default = "default_goal_liters")]
    pub goal_liters: f64,
    /// Minutes between hydration reminders while below goal.
    #[serde(default = "default_reminder_interval_min")]
    pub reminder_interval_min: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/soulsync/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub hydration: HydrationConfig,
}

fn default_true() -> bool {
    true
}
fn default_goal_liters() -> f64 {
    4.0
}
fn default_reminder_interval_min() -> u32 {
    120
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            vibration: true,
            custom_sound: None,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            goal_liters: default_goal_liters(),
            reminder_interval_min: default_reminder_interval_min(),
        }
    }
}

/// Resolve the configuration directory, creating it if needed.
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("soulsync");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path (used by tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
