//! Plain-text note export.

use std::fmt::Write as _;

use crate::Note;

/// File name offered when notes are downloaded.
pub const EXPORT_FILE_NAME: &str = "notes.txt";

/// Render notes as `Title: ..\nBody: ..\n\n` blocks in list order.
#[must_use]
pub fn render_text_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for note in notes {
        let _ = write!(output, "Title: {}\nBody: {}\n\n", note.title, note.body);
    }

    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_text_export_single_note() {
        let notes = [Note::new("T1", "B1")];
        assert_eq!(render_text_export(&notes), "Title: T1\nBody: B1\n\n");
    }

    #[test]
    fn render_text_export_keeps_list_order() {
        let notes = [Note::new("Newest", "2"), Note::new("Oldest", "1")];
        assert_eq!(
            render_text_export(&notes),
            "Title: Newest\nBody: 2\n\nTitle: Oldest\nBody: 1\n\n"
        );
    }

    #[test]
    fn render_text_export_empty_list() {
        assert_eq!(render_text_export(&[]), "");
    }

    #[test]
    fn render_text_export_keeps_multiline_bodies_verbatim() {
        let notes = [Note::new("List", "one\ntwo")];
        assert_eq!(render_text_export(&notes), "Title: List\nBody: one\ntwo\n\n");
    }
}
