//! Library settings
//!
//! Read from `config.yaml` in the platform config directory
//! (`~/.config/cadcards/config.yaml` on Linux) unless a path is given
//! explicitly. Every field has a default, so a missing file is not an error.
//!
//! ```yaml
//! favorites_path: /home/me/.local/share/cadcards/favorites.json
//! latency_ms: { min: 300, max: 600 }
//! default_sort: NAME_ASC
//! pad_to: 8
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::catalog::SortMode;
use crate::error::{CadcardsError, Result};

const CONFIG_FILE: &str = "config.yaml";
const FAVORITES_FILE: &str = "favorites.json";

/// Simulated fetch latency bounds, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRange {
    #[serde(default = "default_latency_min")]
    pub min: u64,
    #[serde(default = "default_latency_max")]
    pub max: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min: default_latency_min(),
            max: default_latency_max(),
        }
    }
}

impl LatencyRange {
    /// No simulated delay
    pub const NONE: LatencyRange = LatencyRange { min: 0, max: 0 };

    /// Pick a delay inside the range from an arbitrary seed
    pub fn pick(&self, seed: u64) -> Duration {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let span = (hi - lo).saturating_add(1);
        Duration::from_millis(lo + seed % span)
    }
}

fn default_latency_min() -> u64 {
    300
}

fn default_latency_max() -> u64 {
    600
}

fn default_pad_to() -> usize {
    8
}

/// Top-level library configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Where favorite ids are persisted; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_path: Option<PathBuf>,

    #[serde(default)]
    pub latency_ms: LatencyRange,

    /// Sort applied when a session starts
    #[serde(default)]
    pub default_sort: SortMode,

    /// Minimum number of cards per category; short categories are padded
    #[serde(default = "default_pad_to")]
    pub pad_to: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            favorites_path: None,
            latency_ms: LatencyRange::default(),
            default_sort: SortMode::default(),
            pad_to: default_pad_to(),
        }
    }
}

impl LibraryConfig {
    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match default_config_path() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: LibraryConfig = serde_yaml_ng::from_str(&content).map_err(|e| {
            CadcardsError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;

        debug!("Loaded library config from {}", path.display());
        Ok(config)
    }

    /// Write to a specific file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Favorites file, falling back to the platform data directory
    pub fn resolved_favorites_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.favorites_path {
            return Ok(path.clone());
        }
        data_dir()
            .map(|dir| dir.join(FAVORITES_FILE))
            .ok_or_else(|| CadcardsError::Config("Could not determine data directory".to_string()))
    }
}

/// Platform config directory for cadcards
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "acme", "cadcards")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| dirs::config_dir().map(|d| d.join("cadcards")))
}

/// Platform data directory for cadcards
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "acme", "cadcards")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .or_else(|| dirs::data_dir().map(|d| d.join("cadcards")))
}

/// Default location of `config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = LibraryConfig::load_from_path(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.latency_ms, LatencyRange { min: 300, max: 600 });
        assert_eq!(config.pad_to, 8);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_sort: USAGE_DESC\nlatency_ms: { min: 0, max: 0 }\n")
            .unwrap();

        let config = LibraryConfig::load_from_path(&path).unwrap();
        assert_eq!(config.default_sort, SortMode::UsageDesc);
        assert_eq!(config.latency_ms, LatencyRange::NONE);
        assert_eq!(config.pad_to, 8);
        assert!(config.favorites_path.is_none());
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_sort: SIDEWAYS\n").unwrap();

        let err = LibraryConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CadcardsError::Config(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = LibraryConfig {
            favorites_path: Some(dir.path().join("favs.json")),
            pad_to: 3,
            ..Default::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(LibraryConfig::load_from_path(&path).unwrap(), config);
        assert_eq!(
            config.resolved_favorites_path().unwrap(),
            dir.path().join("favs.json")
        );
    }

    #[test]
    fn test_latency_pick_stays_in_range() {
        let range = LatencyRange { min: 300, max: 600 };
        for seed in [0, 1, 299, 300, 301, u64::MAX] {
            let ms = range.pick(seed).as_millis() as u64;
            assert!((300..=600).contains(&ms), "{ms}");
        }
        assert_eq!(LatencyRange::NONE.pick(42), Duration::ZERO);
    }
}
