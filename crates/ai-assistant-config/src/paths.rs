//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/ai-assistant-store/`
//! - macOS: `~/Library/Application Support/ai-assistant-store/`
//! - Windows: `%APPDATA%\ai-assistant-store\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "ai-assistant-store";

/// Get the application config directory
///
/// Only resolves the path, the directory is not created.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
