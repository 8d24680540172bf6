//! Note form validation

use thiserror::Error;

use crate::models::Note;

/// Reasons a note submission is rejected. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title can't be left blank.")]
    BlankTitle,
    #[error("Body can't be left blank.")]
    BlankBody,
}

/// Check a title/body pair, reporting the first failing rule.
///
/// Only zero-length text is blank; whitespace is accepted as typed.
pub fn validate_note(title: &str, body: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    if body.is_empty() {
        return Err(ValidationError::BlankBody);
    }
    Ok(())
}

/// Text currently typed into the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub body: String,
}

impl NoteForm {
    /// Validate the form and, if it passes, build the note and reset the fields.
    pub fn take_note(&mut self) -> Result<Note, ValidationError> {
        validate_note(&self.title, &self.body)?;
        let Self { title, body } = std::mem::take(self);
        Ok(Note { title, body })
    }
}
