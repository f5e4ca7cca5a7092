//! Browser configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use manta_navigation::{InputResolver, DEFAULT_SEARCH_ENGINE};

use crate::error::CoreError;
use crate::Result;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine URL template
    pub search_engine: String,
    /// Page shown for the blank start entry
    pub homepage: String,
    /// Title of the native window
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Config {
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Manta"))
            .unwrap_or_else(|| PathBuf::from(".manta"))
    }

    pub fn default_path() -> PathBuf {
        Self::data_dir().join(CONFIG_FILE)
    }

    /// Read the config file; a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Like `load`, but an unreadable or invalid file falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        InputResolver::with_search_engine(self.search_engine.clone())?;

        if self.homepage.trim().is_empty() {
            return Err(CoreError::Config("homepage cannot be empty".to_string()));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(CoreError::Config(format!(
                "invalid window size {}x{}",
                self.window_width, self.window_height
            )));
        }

        Ok(())
    }

    /// Build the address bar resolver for this configuration
    pub fn input_resolver(&self) -> Result<InputResolver> {
        Ok(InputResolver::with_search_engine(
            self.search_engine.clone(),
        )?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            homepage: "about:blank".to_string(),
            window_title: "Manta Browser".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.search_engine, DEFAULT_SEARCH_ENGINE);
        assert_eq!(config.homepage, "about:blank");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = Config {
            search_engine: "https://duckduckgo.com/?q=%s".to_string(),
            homepage: "https://www.rhishav.com".to_string(),
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "homepage": "https://example.com" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.homepage, "https://example.com");
        assert_eq!(config.search_engine, DEFAULT_SEARCH_ENGINE);
    }

    #[test]
    fn test_invalid_search_engine_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "search_engine": "https://example.com/search" }"#).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(CoreError::Navigation(_))
        ));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load(&path), Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_load_or_default_ignores_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_default_path_in_data_dir() {
        let data_dir = Config::data_dir();
        assert!(data_dir.ends_with("Manta") || data_dir == Path::new(".manta"));
        assert_eq!(Config::default_path(), data_dir.join(CONFIG_FILE));
    }
}
