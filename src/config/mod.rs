// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[display]` - Zoom multipliers, scaling filter, default root folder
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `REID_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use reid_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("zh-CN".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Resampling used when the displayed image is scaled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingFilter {
    /// Bilinear filtering.
    #[default]
    Smooth,
    /// Nearest neighbour; keeps pixel edges sharp when zoomed in.
    Nearest,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(
        default = "default_zoom_in_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_in_factor: Option<f64>,

    #[serde(
        default = "default_zoom_out_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_out_factor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_filter: Option<ScalingFilter>,

    /// Folder opened when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_root: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: default_zoom_in_factor(),
            zoom_out_factor: default_zoom_out_factor(),
            scaling_filter: Some(ScalingFilter::default()),
            default_root: None,
        }
    }
}

impl DisplayConfig {
    /// Zoom-in multiplier, falling back to the default when the configured
    /// value is not in `(1, MAX_ZOOM_FACTOR]`.
    #[must_use]
    pub fn effective_zoom_in_factor(&self) -> f64 {
        match self.zoom_in_factor {
            Some(factor) if factor.is_finite() && factor > 1.0 && factor <= MAX_ZOOM_FACTOR => {
                factor
            }
            _ => DEFAULT_ZOOM_IN_FACTOR,
        }
    }

    /// Zoom-out multiplier, falling back to the default when the configured
    /// value is not in `[1 / MAX_ZOOM_FACTOR, 1)`.
    #[must_use]
    pub fn effective_zoom_out_factor(&self) -> f64 {
        match self.zoom_out_factor {
            Some(factor)
                if factor.is_finite() && factor < 1.0 && factor >= 1.0 / MAX_ZOOM_FACTOR =>
            {
                factor
            }
            _ => DEFAULT_ZOOM_OUT_FACTOR,
        }
    }

    #[must_use]
    pub fn effective_scaling_filter(&self) -> ScalingFilter {
        self.scaling_filter.unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_zoom_in_factor() -> Option<f64> {
    Some(DEFAULT_ZOOM_IN_FACTOR)
}

fn default_zoom_out_factor() -> Option<f64> {
    Some(DEFAULT_ZOOM_OUT_FACTOR)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot load settings, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
            },
            display: DisplayConfig {
                zoom_in_factor: Some(1.5),
                zoom_out_factor: Some(0.5),
                scaling_filter: Some(ScalingFilter::Nearest),
                default_root: Some(PathBuf::from("/data/market1501")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.display.zoom_in_factor, Some(DEFAULT_ZOOM_IN_FACTOR));
        assert_eq!(loaded.display.zoom_out_factor, Some(DEFAULT_ZOOM_OUT_FACTOR));
    }

    #[test]
    fn scaling_filter_uses_kebab_case() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[display]\nscaling_filter = \"nearest\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.display.effective_scaling_filter(), ScalingFilter::Nearest);
    }

    #[test]
    fn out_of_range_zoom_factors_fall_back_to_defaults() {
        let display = DisplayConfig {
            zoom_in_factor: Some(0.5),
            zoom_out_factor: Some(3.0),
            ..DisplayConfig::default()
        };
        assert_relative_eq!(display.effective_zoom_in_factor(), DEFAULT_ZOOM_IN_FACTOR);
        assert_relative_eq!(display.effective_zoom_out_factor(), DEFAULT_ZOOM_OUT_FACTOR);

        let display = DisplayConfig {
            zoom_in_factor: Some(f64::INFINITY),
            zoom_out_factor: None,
            ..DisplayConfig::default()
        };
        assert_relative_eq!(display.effective_zoom_in_factor(), DEFAULT_ZOOM_IN_FACTOR);
        assert_relative_eq!(display.effective_zoom_out_factor(), DEFAULT_ZOOM_OUT_FACTOR);
    }

    #[test]
    fn valid_zoom_factors_are_kept() {
        let display = DisplayConfig {
            zoom_in_factor: Some(2.0),
            zoom_out_factor: Some(0.5),
            ..DisplayConfig::default()
        };
        assert_relative_eq!(display.effective_zoom_in_factor(), 2.0);
        assert_relative_eq!(display.effective_zoom_out_factor(), 0.5);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
