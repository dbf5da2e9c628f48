// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the application's config directory.
//!
//! # Path Resolution Order
//!
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variable** (`ICED_GALLERY_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Should be called once at application startup, before any path resolution.
/// Calling it again is a no-op (the first value wins).
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Returns the directory holding `settings.toml`, or `None` when the
/// platform provides no config location.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(Some(dir)) = CLI_CONFIG_DIR.get() {
        return Some(dir.clone());
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}
