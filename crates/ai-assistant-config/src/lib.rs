//! Configuration for the AI assistant feature store
//!
//! This crate provides:
//! - Store configuration (StoreConfig) loaded from TOML
//! - Config file discovery (CWD, home directory, platform config dir)
//! - Platform config directory paths

pub mod config_file;
pub mod paths;
pub mod store_config;

pub use config_file::{ConfigSearch, ConfigSource};
pub use paths::{app_config_path, config_dir};
pub use store_config::StoreConfig;
