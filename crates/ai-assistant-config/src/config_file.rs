//! Config file discovery
//!
//! The store config is looked up in an ordered list of candidate files; the
//! first one that can be read wins. [`ConfigSearch::standard`] checks the
//! working directory, then the home directory, then the platform config dir.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".ai-assistant-store.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub content: String,
}

/// Ordered list of candidate config files
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    candidates: Vec<PathBuf>,
}

impl ConfigSearch {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// CWD, then ~/.ai-assistant-store.toml, then the platform config.toml
    pub fn standard() -> Self {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(CONFIG_FILE));
        }
        if let Ok(app_config) = crate::paths::app_config_path() {
            candidates.push(app_config);
        }
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Read the first candidate that exists and is readable
    pub fn find(&self) -> Option<ConfigSource> {
        self.candidates.iter().find_map(|path| read_candidate(path))
    }
}

fn read_candidate(path: &Path) -> Option<ConfigSource> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(ConfigSource {
                path: path.to_path_buf(),
                content,
            })
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}
