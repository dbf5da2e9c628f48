// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - API key, endpoint override, and page size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set the `ICED_GALLERY_CONFIG_DIR` environment
//!    variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    pub theme_mode: ThemeMode,
}

/// Search API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    /// API key for the image search service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Search endpoint. Only needs changing for self-hosted mirrors.
    pub endpoint: String,

    /// Hits requested per page.
    pub per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchConfig {
    /// Returns the configured API key, falling back to the environment.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty()))
    }
}

/// Root configuration, persisted as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub general: GeneralConfig,
    pub search: SearchConfig,
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the resolved config directory.
///
/// A missing file yields the defaults. Callers typically use
/// `load().unwrap_or_default()` so a corrupt file degrades gracefully.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Config> {
    match config_file_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;
    config.search.per_page = clamp_per_page(config.search.per_page);
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
