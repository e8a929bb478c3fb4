//! Store configuration
//!
//! Fallback values used when the bootstrap state is missing fields, and the
//! timing of the deferred feature sync. Loaded from .ai-assistant-store.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::config_file::ConfigSearch;

/// Requests allowed on the free plan before an upgrade is required
pub const DEFAULT_FREE_PLAN_REQUESTS_LIMIT: u64 = 20;

/// Delay between the countdown running out and the feature sync firing
pub const DEFAULT_ASYNC_REQUEST_TIMER_INTERVAL_MS: u64 = 5000;

/// Label shown for the unlimited tier
pub const DEFAULT_UNLIMITED_LABEL: &str = "Unlimited";

/// Store configuration loaded from .ai-assistant-store.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Request limit used when the bootstrap state has none (or zero)
    #[serde(default = "default_free_plan_requests_limit")]
    pub free_plan_requests_limit: u64,

    /// Delay before a scheduled feature sync fires, in milliseconds
    #[serde(default = "default_async_request_timer_interval_ms")]
    pub async_request_timer_interval_ms: u64,

    /// Readable limit of the default "next" tier
    #[serde(default = "default_unlimited_label")]
    pub unlimited_label: String,
}

fn default_free_plan_requests_limit() -> u64 {
    DEFAULT_FREE_PLAN_REQUESTS_LIMIT
}

fn default_async_request_timer_interval_ms() -> u64 {
    DEFAULT_ASYNC_REQUEST_TIMER_INTERVAL_MS
}

fn default_unlimited_label() -> String {
    DEFAULT_UNLIMITED_LABEL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            free_plan_requests_limit: default_free_plan_requests_limit(),
            async_request_timer_interval_ms: default_async_request_timer_interval_ms(),
            unlimited_label: default_unlimited_label(),
        }
    }
}

impl StoreConfig {
    /// Load config from the standard search locations, or use defaults
    pub fn load() -> Self {
        Self::load_with(&ConfigSearch::standard())
    }

    /// Load config from the first file `search` finds, or use defaults
    pub fn load_with(search: &ConfigSearch) -> Self {
        Self::parse_or_default(search.find().map(|source| source.content))
    }

    /// Parse config content; missing or malformed content yields defaults
    pub fn parse_or_default(content: Option<String>) -> Self {
        if let Some(content) = content {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded store config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file, using defaults: {}", e);
                }
            }
        }

        log::debug!("Using default store config");
        Self::default()
    }

    /// Load config from an explicit path
    ///
    /// Unlike [`StoreConfig::load`], a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded store config from {}", path.display());
        Ok(config)
    }

    pub fn async_request_timer_interval(&self) -> Duration {
        Duration::from_millis(self.async_request_timer_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.free_plan_requests_limit, 20);
        assert_eq!(config.async_request_timer_interval_ms, 5000);
        assert_eq!(config.unlimited_label, "Unlimited");
        assert_eq!(
            config.async_request_timer_interval(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            free_plan_requests_limit = 50
            unlimited_label = "Illimité"
        "#;
        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.free_plan_requests_limit, 50);
        assert_eq!(config.unlimited_label, "Illimité");
        // interval should use default
        assert_eq!(config.async_request_timer_interval_ms, 5000);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_malformed_content_falls_back_to_defaults() {
        let config = StoreConfig::parse_or_default(Some(
            "free_plan_requests_limit = \"lots\"".to_string(),
        ));
        assert_eq!(config, StoreConfig::default());

        let config = StoreConfig::parse_or_default(Some("not = [toml".to_string()));
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_no_content_uses_defaults() {
        assert_eq!(StoreConfig::parse_or_default(None), StoreConfig::default());
    }

    #[test]
    fn test_valid_content_is_used() {
        let config =
            StoreConfig::parse_or_default(Some("async_request_timer_interval_ms = 250".to_string()));
        assert_eq!(config.async_request_timer_interval(), Duration::from_millis(250));
        assert_eq!(config.free_plan_requests_limit, 20);
    }

    #[test]
    fn test_load_with_search() {
        let dir = tempfile::TempDir::new().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "free_plan_requests_limit = ").unwrap();
        std::fs::write(&valid, "free_plan_requests_limit = 40").unwrap();

        // The first readable file wins, even when it does not parse
        let search = ConfigSearch::new(vec![broken.clone(), valid.clone()]);
        assert_eq!(StoreConfig::load_with(&search), StoreConfig::default());

        let search = ConfigSearch::new(vec![dir.path().join("missing.toml"), valid]);
        assert_eq!(StoreConfig::load_with(&search).free_plan_requests_limit, 40);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = StoreConfig::load_from(Path::new("/nonexistent/ai-assistant-store.toml"));
        assert!(result.is_err());
    }
}
