//! Note model

use serde::{Deserialize, Serialize};

/// A title/body pair authored by the user.
///
/// Notes carry no identifier; their position in the notebook is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    /// Create a new note
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_as_title_body_object() {
        let note = Note::new("Groceries", "Milk and eggs");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"title":"Groceries","body":"Milk and eggs"}"#);
    }

    #[test]
    fn test_note_ignores_unknown_fields() {
        let note: Note =
            serde_json::from_str(r#"{"title":"T","body":"B","pinned":true}"#).unwrap();
        assert_eq!(note, Note::new("T", "B"));
    }

    #[test]
    fn test_note_requires_both_fields() {
        assert!(serde_json::from_str::<Note>(r#"{"title":"T"}"#).is_err());
    }
}
