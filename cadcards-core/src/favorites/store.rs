//! Favorites persistence
//!
//! The store is a tiny key-value document. Favorites live under a single
//! fixed key and are always written as a whole list.
//!
//! ```json
//! { "acme_user_favorites": ["425", "1063"] }
//! ```

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{CadcardsError, Result};

/// Key the favorites list is stored under
pub const FAVORITES_KEY: &str = "acme_user_favorites";

/// Persisted set of favorite entry ids
pub trait FavoritesStore: Send + Sync {
    /// Stored ids; unreadable or malformed storage yields an empty list
    fn load_favorite_ids(&self) -> Vec<String>;

    /// Replace the stored list with `ids`
    fn save_favorite_ids(&self, ids: &[String]) -> Result<()>;
}

/// JSON document on disk
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
}

impl FileFavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Option<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read favorites from {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                warn!("Favorites file {} is not a JSON object", self.path.display());
                None
            }
            Err(e) => {
                warn!("Malformed favorites file {}: {e}", self.path.display());
                None
            }
        }
    }
}

impl FavoritesStore for FileFavoritesStore {
    fn load_favorite_ids(&self) -> Vec<String> {
        let Some(document) = self.read_document() else {
            return Vec::new();
        };

        match document.get(FAVORITES_KEY) {
            None => Vec::new(),
            Some(value) => match serde_json::from_value::<Vec<String>>(value.clone()) {
                Ok(ids) => {
                    debug!("Loaded {} favorites from {}", ids.len(), self.path.display());
                    ids
                }
                Err(e) => {
                    warn!("Ignoring malformed '{FAVORITES_KEY}' value: {e}");
                    Vec::new()
                }
            },
        }
    }

    fn save_favorite_ids(&self, ids: &[String]) -> Result<()> {
        // other keys in the document are preserved
        let mut document = self.read_document().unwrap_or_default();
        document.insert(FAVORITES_KEY.to_string(), serde_json::to_value(ids)?);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(document))?;
        std::fs::write(&self.path, content)?;

        debug!("Saved {} favorites to {}", ids.len(), self.path.display());
        Ok(())
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    ids: Mutex<Vec<String>>,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<String>) -> Self {
        Self {
            ids: Mutex::new(ids),
        }
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn load_favorite_ids(&self) -> Vec<String> {
        self.ids.lock().map(|ids| ids.clone()).unwrap_or_default()
    }

    fn save_favorite_ids(&self, ids: &[String]) -> Result<()> {
        let mut stored = self
            .ids
            .lock()
            .map_err(|_| CadcardsError::Favorites("favorites lock poisoned".to_string()))?;
        *stored = ids.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileFavoritesStore::new(dir.path().join("favorites.json"));
        assert!(store.load_favorite_ids().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FileFavoritesStore::new(dir.path().join("nested").join("favorites.json"));
        store.save_favorite_ids(&ids(&["425", "1063"])).unwrap();
        assert_eq!(store.load_favorite_ids(), ids(&["425", "1063"]));

        store.save_favorite_ids(&ids(&["1063"])).unwrap();
        assert_eq!(store.load_favorite_ids(), ids(&["1063"]));
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(FileFavoritesStore::new(&path).load_favorite_ids().is_empty());

        std::fs::write(&path, r#"{"acme_user_favorites": "425"}"#).unwrap();
        assert!(FileFavoritesStore::new(&path).load_favorite_ids().is_empty());

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(FileFavoritesStore::new(&path).load_favorite_ids().is_empty());
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"{"theme": "copper"}"#).unwrap();

        let store = FileFavoritesStore::new(&path);
        store.save_favorite_ids(&ids(&["8"])).unwrap();

        let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["theme"], "copper");
        assert_eq!(doc[FAVORITES_KEY], serde_json::json!(["8"]));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryFavoritesStore::with_ids(ids(&["1"]));
        assert_eq!(store.load_favorite_ids(), ids(&["1"]));
        store.save_favorite_ids(&[]).unwrap();
        assert!(store.load_favorite_ids().is_empty());
    }
}
