//! Note export service for the "Download Notes" action.

use std::path::{Path, PathBuf};

use rfd::AsyncFileDialog;
use scribble_core::export::{render_text_export, EXPORT_FILE_NAME};
use scribble_core::Note;
use thiserror::Error;

/// Errors emitted by desktop note export flows.
#[derive(Debug, Error)]
pub enum NotesExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the plain-text rendering of `notes` to `output_path`.
///
/// Returns the number of exported notes.
pub fn export_notes_to_path(
    notes: &[Note],
    output_path: &Path,
) -> Result<usize, NotesExportError> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, render_text_export(notes))?;
    Ok(notes.len())
}

/// Directory the save dialog opens in.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Ask the user where to save `notes.txt`. Returns `None` if the dialog is cancelled.
pub async fn pick_export_path() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Download Notes")
        .set_directory(default_export_directory())
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("Text", &["txt"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn export_notes_to_path_writes_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join(EXPORT_FILE_NAME);
        let notes = vec![Note::new("T2", "B2"), Note::new("T1", "B1")];

        let exported_count = export_notes_to_path(&notes, &output_path).unwrap();
        assert_eq!(exported_count, 2);

        let exported = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(exported, "Title: T2\nBody: B2\n\nTitle: T1\nBody: B1\n\n");
    }

    #[test]
    fn export_notes_to_path_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("exports").join(EXPORT_FILE_NAME);

        let exported_count = export_notes_to_path(&[], &output_path).unwrap();
        assert_eq!(exported_count, 0);
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "");
    }

    #[test]
    fn export_notes_to_path_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_notes_to_path(&[Note::new("T", "B")], dir.path());
        assert!(matches!(result, Err(NotesExportError::Io(_))));
    }
}
