//! Configuration and file locations for the bug tracker client
//!
//! This crate provides:
//! - Application configuration (AppConfig) loaded from TOML
//! - Config file discovery (CWD first, then home directory)
//! - Config and cache directory helpers

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, read_config_file};
pub use paths::{cache_dir, config_dir};
