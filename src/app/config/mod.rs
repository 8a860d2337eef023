// SPDX-License-Identifier: MPL-2.0
//! User preferences read from a `settings.toml` file.
//!
//! The file is hand-edited; the application only reads it. The picked color
//! is never stored here, it lives only for the lifetime of the process.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[window]` - Initial window size
//!
//! ```toml
//! [general]
//! theme_mode = "dark"
//!
//! [window]
//! width = 480
//! height = 640
//! ```
//!
//! # Path Resolution
//!
//! 1. `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `ICED_SWATCH_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// `[general]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Light, dark, or follow the system (case-insensitive).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// `[window]` section. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct WindowConfig {
    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,
}

impl WindowConfig {
    /// Configured size, raised to the supported minimum.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (
            self.width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_WIDTH),
            self.height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

/// Location of `settings.toml`, optionally inside `base_dir`.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// malformed one yields defaults plus a warning to log.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], looking in `base_dir` instead of the default directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Parses the file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
