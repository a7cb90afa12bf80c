//! Session persistence.
//!
//! A string key-value surface mirroring the browser session storage the web
//! client uses, so the persisted shape stays interchangeable: the video ID
//! is stored as a plain string and the history as a JSON-serialized array
//! under well-known keys.

use crate::error::{AtytError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Storage key for the active video ID.
pub const VIDEO_ID_KEY: &str = "atyt_video_id";

/// Storage key for the JSON-serialized chat history.
pub const HISTORY_KEY: &str = "atyt_history";

/// Trait for session store implementations.
pub trait SessionStore: Send + Sync {
    /// Read a value, or None if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a single key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;
}

/// File-backed session store: one JSON object per session file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            AtytError::SessionStore(format!(
                "Corrupt session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory session store.
///
/// Useful for testing; nothing survives the process.
pub struct MemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(VIDEO_ID_KEY).unwrap(), None);

        store.set(VIDEO_ID_KEY, "dQw4w9WgXcQ").unwrap();
        assert_eq!(
            store.get(VIDEO_ID_KEY).unwrap(),
            Some("dQw4w9WgXcQ".to_string())
        );

        store.clear().unwrap();
        assert_eq!(store.get(VIDEO_ID_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);

        store.set(VIDEO_ID_KEY, "abc123def45").unwrap();
        store.set(HISTORY_KEY, r#"[{"role":"user","content":"hi"}]"#).unwrap();

        // A fresh store over the same file sees the same data.
        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            reopened.get(VIDEO_ID_KEY).unwrap(),
            Some("abc123def45".to_string())
        );
        assert_eq!(
            reopened.get(HISTORY_KEY).unwrap(),
            Some(r#"[{"role":"user","content":"hi"}]"#.to_string())
        );
    }

    #[test]
    fn test_file_store_remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        store.set(VIDEO_ID_KEY, "abc123def45").unwrap();
        store.set(HISTORY_KEY, "[]").unwrap();

        store.remove(HISTORY_KEY).unwrap();
        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
        assert!(store.get(VIDEO_ID_KEY).unwrap().is_some());

        store.clear().unwrap();
        assert_eq!(store.get(VIDEO_ID_KEY).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_missing_parent_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");
        let store = FileSessionStore::new(&path);

        store.set(VIDEO_ID_KEY, "abc123def45").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.get(VIDEO_ID_KEY).is_err());
    }
}
