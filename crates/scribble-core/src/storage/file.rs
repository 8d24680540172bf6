//! File-backed key-value store.
//!
//! The whole store lives in one JSON object (`{"key": "value", ...}`). Every
//! write rewrites the file through a sibling temp file so a crash mid-write
//! leaves the previous contents intact.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::Result;

/// Key-value store persisted to a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. A file that is not a JSON object of
    /// strings is logged and treated as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match std::fs::read(&path) {
            Ok(content) => parse_items(&content, &path),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("No store file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(error) => return Err(error.into()),
        };

        tracing::debug!("Opened store {} with {} keys", path.display(), items.len());
        Ok(Self { path, items })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(&self.items)?;
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, serialized)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

fn parse_items(content: &[u8], path: &Path) -> BTreeMap<String, String> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return BTreeMap::new();
    }

    match serde_json::from_slice(content) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(
                "Ignoring unreadable store file at {}: {}",
                path.display(),
                error
            );
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("local-storage.json")).unwrap();
        assert_eq!(store.get_item("count").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local-storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_item("count", "42").unwrap();
        store.set_item("notes", "[]").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("count").unwrap().as_deref(), Some("42"));
        assert_eq!(reopened.get_item("notes").unwrap().as_deref(), Some("[]"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupted_file_is_treated_as_empty_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get_item("count").unwrap(), None);

        store.set_item("count", "1").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("count").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_non_utf8_file_is_treated_as_empty_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get_item("notes").unwrap(), None);

        store.set_item("notes", "[]").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_whitespace_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        std::fs::write(&path, "  \n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get_item("count").unwrap(), None);
    }

    #[test]
    fn test_remove_item_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_item("count", "7").unwrap();
        store.remove_item("count").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("count").unwrap(), None);
    }
}
