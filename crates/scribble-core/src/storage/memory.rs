//! In-memory key-value store

use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::Result;

/// Volatile store used by tests and as a fallback when disk storage is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.set_item("count", "1").unwrap();
        store.set_item("count", "2").unwrap();

        assert_eq!(store.get_item("count").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_item("notes").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store: MemoryStore = [("count", "5")].into_iter().collect();
        store.remove_item("notes").unwrap();
        store.remove_item("count").unwrap();
        assert!(store.is_empty());
    }
}
