//! Persisted settings for `ClassicText` tools
//!
//! Stored as JSON at `<config dir>/ClassicText/config.json`. A missing or
//! unreadable file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

// Default value functions for serde
fn default_search_limit() -> usize {
    50
}
fn default_preview_width() -> usize {
    100
}

/// Persistable configuration (saved to disk)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `TEXT.RSC` token dump used when a command is given no source
    #[serde(default)]
    pub text_rsc_dump: Option<PathBuf>,
    /// Maximum search results printed
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Characters of markup shown per search result
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_rsc_dump: None,
            search_limit: default_search_limit(),
            preview_width: default_preview_width(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ClassicText").join("config.json"))
    }

    /// Load config from the default location, or return default
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from `path`, or return default
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to the default location
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save config to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.search_limit, 50);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "search_limit": 5 }"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.preview_width, 100);
        assert!(config.text_rsc_dump.is_none());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            text_rsc_dump: Some(PathBuf::from("/data/text_rsc.json")),
            search_limit: 10,
            preview_width: 60,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
    }
}
