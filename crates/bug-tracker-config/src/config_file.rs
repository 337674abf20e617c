use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".bug-tracker.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for:
/// 1. `.bug-tracker.toml` in the current working directory
/// 2. `.bug-tracker.toml` in the home directory
/// 3. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    if let Ok(global_config) = crate::paths::app_config_path() {
        if let Ok(content) = std::fs::read_to_string(&global_config) {
            log::debug!("Loaded config from {}", global_config.display());
            return Some(content);
        }
    }

    None
}

/// Read an explicitly requested config file
///
/// Unlike [`load_config_file`], a missing file is an error here.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
