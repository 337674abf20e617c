//! Application configuration
//!
//! Configuration loaded from `.bug-tracker.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the configured API root
pub const BASE_URL_ENV: &str = "BUG_TRACKER_BASE_URL";

/// Application configuration loaded from `.bug-tracker.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the bug-tracking REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long a fetched bug list stays fresh before `load_bugs` hits the server again
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Per-request timeout for API calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:9001/api".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    10 * 60
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// `BUG_TRACKER_BASE_URL` wins over whatever the file says.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_env_overrides()
    }

    /// Load config from an explicit path
    ///
    /// Missing or malformed files are errors, since the user asked for this file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded app config from {}", path.display());
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                log::debug!("Using {} from environment", BASE_URL_ENV);
                self.base_url = base_url;
            }
        }
        self
    }

    /// Freshness window for the cached bug list
    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:9001/api");
        assert_eq!(config.cache_ttl_secs, 600);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.cache_ttl(), chrono::Duration::minutes(10));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            base_url = "https://bugs.example.com/api"
            cache_ttl_secs = 60
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://bugs.example.com/api");
        assert_eq!(config.cache_ttl(), chrono::Duration::minutes(1));
        // request timeout should use default
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let config = AppConfig {
            cache_ttl_secs: u64::MAX,
            ..AppConfig::default()
        };
        assert!(config.cache_ttl() > chrono::Duration::days(365));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let result = AppConfig::load_from(Path::new("/definitely/not/here.toml"));
        assert!(result.is_err());
    }
}
