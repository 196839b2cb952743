//! Oracle configuration
//!
//! Read from `oracle/config.json` under the cadcards config directory:
//!
//! ```json
//! {"model": "gemini-2.5-flash", "image_model": "gemini-2.5-flash-image", "timeout_seconds": 10}
//! ```
//!
//! A missing file means "enabled with defaults"; the oracle still goes
//! offline on its own when the API key variable is unset.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Which backend to use ("gemini")
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Text model id
    #[serde(default = "default_model")]
    pub model: String,

    /// Image model id
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Log resolved prompts but skip API calls
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            backend: default_backend(),
            model: default_model(),
            image_model: default_image_model(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
            dry_run: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_backend() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl OracleConfig {
    /// Load `config.json` from `dir`
    ///
    /// Returns `None` when the directory does not exist. A directory without
    /// a config file, or with an unparseable one, yields defaults.
    pub fn load_from_dir(dir: &Path) -> Option<Self> {
        let config_path = dir.join("config.json");
        if !config_path.exists() {
            if dir.exists() {
                return Some(Self::default());
            }
            return None;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    Some(Self::default())
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Load from the platform config directory, falling back to defaults
    pub fn load_default() -> Self {
        default_oracle_dir()
            .and_then(|dir| Self::load_from_dir(&dir))
            .unwrap_or_default()
    }
}

/// `<config dir>/oracle`
pub fn default_oracle_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join("oracle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = OracleConfig::default();
        assert!(config.enabled);
        assert_eq!(config.backend, "gemini");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.api_key_env, "API_KEY");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_load_from_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(OracleConfig::load_from_dir(&dir.path().join("absent")).is_none());
        assert_eq!(
            OracleConfig::load_from_dir(dir.path()),
            Some(OracleConfig::default())
        );
    }

    #[test]
    fn test_load_partial_and_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{"model": "gemini-2.5-pro", "dry_run": true}"#).unwrap();
        let config = OracleConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert!(config.dry_run);
        assert_eq!(config.api_key_env, "API_KEY");

        std::fs::write(&path, "{ nope").unwrap();
        assert_eq!(
            OracleConfig::load_from_dir(dir.path()),
            Some(OracleConfig::default())
        );
    }
}
