//! Notebook controller
//!
//! Owns the counter, the notes, the form, and the warning slot. Every mutation
//! of a persisted field is written through to the store before returning.

use crate::export::render_text_export;
use crate::models::Note;
use crate::persistence::LocalPersistence;
use crate::storage::KeyValueStore;
use crate::validation::{NoteForm, ValidationError};

/// Application state backed by a key-value store.
#[derive(Debug, Clone)]
pub struct Notebook<S> {
    persistence: LocalPersistence<S>,
    count: i64,
    notes: Vec<Note>,
    form: NoteForm,
    warning: Option<String>,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Load the counter and notes from `store`.
    pub fn open(store: S) -> Self {
        let persistence = LocalPersistence::new(store);
        let count = persistence.load_counter();
        let notes = persistence.load_notes();
        tracing::info!("Loaded counter {} and {} notes", count, notes.len());

        Self {
            persistence,
            count,
            notes,
            form: NoteForm::default(),
            warning: None,
        }
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Notes, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub const fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.form.body = body.into();
    }

    pub fn increment(&mut self) {
        self.set_count(self.count.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_count(self.count.saturating_sub(1));
    }

    fn set_count(&mut self, count: i64) {
        self.count = count;
        self.persistence.save_counter(count);
    }

    /// Submit the form.
    ///
    /// On failure the warning slot holds the error message and nothing else
    /// changes. On success the note is prepended, persisted, and the form and
    /// warning are cleared.
    pub fn submit_note(&mut self) -> Result<(), ValidationError> {
        match self.form.take_note() {
            Ok(note) => {
                tracing::info!("Added note {:?}", note.title);
                self.notes.insert(0, note);
                self.persistence.save_notes(&self.notes);
                self.warning = None;
                Ok(())
            }
            Err(error) => {
                tracing::debug!("Rejected note submission: {}", error);
                self.warning = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Remove every note and persist the empty list.
    pub fn clear_notes(&mut self) {
        tracing::info!("Clearing {} notes", self.notes.len());
        self.notes.clear();
        self.persistence.save_notes(&self.notes);
    }

    /// Render the current notes as plain text.
    pub fn export_text(&self) -> String {
        render_text_export(&self.notes)
    }
}
