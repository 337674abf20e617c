//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/bug-tracker/`, `~/.cache/bug-tracker/`
//! - macOS: `~/Library/Application Support/bug-tracker/`, `~/Library/Caches/bug-tracker/`
//! - Windows: `%APPDATA%\bug-tracker\`, `%LOCALAPPDATA%\bug-tracker\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "bug-tracker";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Log files are written here in release builds.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
