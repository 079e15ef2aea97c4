// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification service's configuration, loaded from
//! a `notifications.toml` file in the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use global_notifications::config::{self, Config};
//! use global_notifications::notifications::IdPolicy;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Opt into the legacy id assignment
//! config.id_policy = IdPolicy::ListLength;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/notifications.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.id_policy, IdPolicy::ListLength);
//! ```

mod defaults;

pub use defaults::*;

use crate::animation::AnimationTimings;
use crate::design_tokens::Palette;
use crate::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::notifications::IdPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "GlobalNotifications";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether non-persistent notifications expire on their own.
    pub auto_dismiss: bool,
    pub display_duration_ms: u64,
    pub id_policy: IdPolicy,
    pub diagnostics_capacity: usize,
    pub animation: AnimationConfig,
    /// Palette overrides, `token = "#rrggbb"`.
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            display_duration_ms: DEFAULT_DISPLAY_DURATION_MS,
            id_policy: IdPolicy::default(),
            diagnostics_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
            animation: AnimationConfig::default(),
            palette: BTreeMap::new(),
        }
    }
}

/// Durations of the enter/exit transitions, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub highlight_ms: u64,
    pub settle_ms: u64,
    pub exit_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            exit_ms: DEFAULT_EXIT_MS,
        }
    }
}

impl Config {
    /// Lifetime of a non-persistent notification, or `None` when auto-dismiss is off.
    ///
    /// Out-of-range values are clamped.
    #[must_use]
    pub fn display_duration(&self) -> Option<Duration> {
        self.auto_dismiss.then(|| {
            Duration::from_millis(
                self.display_duration_ms
                    .clamp(MIN_DISPLAY_DURATION_MS, MAX_DISPLAY_DURATION_MS),
            )
        })
    }

    /// Animation timings with each step clamped to [`MAX_ANIMATION_STEP_MS`].
    #[must_use]
    pub fn timings(&self) -> AnimationTimings {
        let clamp = |ms: u64| Duration::from_millis(ms.min(MAX_ANIMATION_STEP_MS));
        AnimationTimings {
            highlight: clamp(self.animation.highlight_ms),
            settle: clamp(self.animation.settle_ms),
            exit: clamp(self.animation.exit_ms),
            ..AnimationTimings::default()
        }
    }

    /// Builds the palette with the configured overrides applied.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::default().with_overrides(&self.palette)?)
    }

    /// Diagnostics buffer size clamped to the supported range.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.diagnostics_capacity)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ColorError, Error};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config {
            auto_dismiss: false,
            display_duration_ms: 8_000,
            id_policy: IdPolicy::ListLength,
            ..Config::default()
        };
        config
            .palette
            .insert("info-dark".to_string(), "#102030".to_string());
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("notifications.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "[animation]\nexit_ms = 750\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.animation.exit_ms, 750);
        assert_eq!(loaded.animation.highlight_ms, DEFAULT_HIGHLIGHT_MS);
        assert_eq!(loaded.display_duration_ms, DEFAULT_DISPLAY_DURATION_MS);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn display_duration_is_clamped_and_can_be_disabled() {
        let config = Config {
            display_duration_ms: 10,
            ..Config::default()
        };
        assert_eq!(
            config.display_duration(),
            Some(Duration::from_millis(MIN_DISPLAY_DURATION_MS))
        );

        let config = Config {
            auto_dismiss: false,
            ..Config::default()
        };
        assert_eq!(config.display_duration(), None);
    }

    #[test]
    fn timings_follow_animation_section() {
        let config = Config {
            animation: AnimationConfig {
                highlight_ms: 100,
                settle_ms: 200,
                exit_ms: 1_000_000,
            },
            ..Config::default()
        };
        let timings = config.timings();
        assert_eq!(timings.highlight, Duration::from_millis(100));
        assert_eq!(timings.settle, Duration::from_millis(200));
        assert_eq!(timings.exit, Duration::from_millis(MAX_ANIMATION_STEP_MS));
    }

    #[test]
    fn diagnostics_capacity_is_clamped() {
        let config = Config {
            diagnostics_capacity: 1,
            ..Config::default()
        };
        assert_eq!(
            config.diagnostics_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn palette_with_bad_override_is_color_error() {
        let mut config = Config::default();
        config
            .palette
            .insert("white".to_string(), "blanc".to_string());
        assert!(matches!(config.palette(), Err(Error::Color(_))));
    }

    #[test]
    fn palette_with_non_ascii_override_is_color_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "[palette]\nwhite = \"#aé\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(matches!(
            loaded.palette(),
            Err(Error::Color(ColorError::InvalidHex(_)))
        ));
    }
}
