//! Persistence adapter for the counter and the notes list.
//!
//! Both values are stored as strings under independent keys. Loads never fail:
//! a missing or unreadable value falls back to the default. Saves are
//! fire-and-forget; store failures are logged and otherwise ignored.

use crate::models::Note;
use crate::storage::KeyValueStore;

/// Store key holding the stringified counter.
pub const COUNT_KEY: &str = "count";
/// Store key holding the JSON array of notes.
pub const NOTES_KEY: &str = "notes";

/// Reads and writes Scribble's two persisted fields through a key-value store.
#[derive(Debug, Clone, Default)]
pub struct LocalPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> LocalPersistence<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the counter, defaulting to 0 when missing or not an integer.
    pub fn load_counter(&self) -> i64 {
        let Some(raw) = self.read(COUNT_KEY) else {
            return 0;
        };

        match raw.trim() {
            "" => 0,
            value => value.parse().unwrap_or_else(|error| {
                tracing::warn!("Stored counter {:?} is not an integer: {}", raw, error);
                0
            }),
        }
    }

    pub fn save_counter(&mut self, count: i64) {
        self.write(COUNT_KEY, &count.to_string());
    }

    /// Load the notes list, defaulting to empty when missing or malformed.
    pub fn load_notes(&self) -> Vec<Note> {
        let Some(raw) = self.read(NOTES_KEY) else {
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!("Stored notes are unreadable, starting empty: {}", error);
            Vec::new()
        })
    }

    /// Overwrite the stored notes with the full list.
    pub fn save_notes(&mut self, notes: &[Note]) {
        match serde_json::to_string(notes) {
            Ok(serialized) => self.write(NOTES_KEY, &serialized),
            Err(error) => tracing::warn!("Failed to serialize notes: {}", error),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Failed to read {:?} from store: {}", key, error);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        match self.store.set_item(key, value) {
            Ok(()) => tracing::debug!("Saved {:?} ({} bytes)", key, value.len()),
            Err(error) => tracing::warn!("Failed to save {:?}: {}", key, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;

    fn persistence_with(items: &[(&str, &str)]) -> LocalPersistence<MemoryStore> {
        LocalPersistence::new(items.iter().copied().collect())
    }

    #[test]
    fn test_counter_defaults_to_zero_when_missing() {
        assert_eq!(persistence_with(&[]).load_counter(), 0);
    }

    #[test]
    fn test_counter_defaults_to_zero_when_invalid() {
        assert_eq!(persistence_with(&[("count", "abc")]).load_counter(), 0);
        assert_eq!(persistence_with(&[("count", "1.5")]).load_counter(), 0);
        assert_eq!(persistence_with(&[("count", "")]).load_counter(), 0);
    }

    #[test]
    fn test_counter_parses_negative_and_padded_values() {
        assert_eq!(persistence_with(&[("count", "-3")]).load_counter(), -3);
        assert_eq!(persistence_with(&[("count", " 12 ")]).load_counter(), 12);
    }

    #[test]
    fn test_save_counter_stores_decimal_string() {
        let mut persistence = persistence_with(&[]);
        persistence.save_counter(-7);

        assert_eq!(
            persistence.store().get_item(COUNT_KEY).unwrap().as_deref(),
            Some("-7")
        );
        assert_eq!(persistence.load_counter(), -7);
    }

    #[test]
    fn test_notes_round_trip_preserves_order() {
        let notes = vec![Note::new("Second", "newer"), Note::new("First", "older")];
        let mut persistence = persistence_with(&[]);
        persistence.save_notes(&notes);

        assert_eq!(persistence.load_notes(), notes);
    }

    #[test]
    fn test_notes_stored_as_json_array() {
        let mut persistence = persistence_with(&[]);
        persistence.save_notes(&[Note::new("A", "B")]);

        assert_eq!(
            persistence.store().get_item(NOTES_KEY).unwrap().as_deref(),
            Some(r#"[{"title":"A","body":"B"}]"#)
        );
    }

    #[test]
    fn test_notes_default_to_empty_when_malformed() {
        assert!(persistence_with(&[]).load_notes().is_empty());
        assert!(persistence_with(&[("notes", "not json")])
            .load_notes()
            .is_empty());
        assert!(persistence_with(&[("notes", r#"{"title":"A"}"#)])
            .load_notes()
            .is_empty());
    }

    #[test]
    fn test_counter_and_notes_use_independent_keys() {
        let mut persistence = persistence_with(&[]);
        persistence.save_counter(5);
        persistence.save_notes(&[]);

        assert_eq!(persistence.load_counter(), 5);
        assert!(persistence.load_notes().is_empty());
        assert_eq!(persistence.into_store().len(), 2);
    }
}
