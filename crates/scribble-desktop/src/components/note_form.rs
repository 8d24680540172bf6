//! Note entry form with submit and download actions

use dioxus::prelude::*;

use super::button::Button;
use crate::services::{export_notes_to_path, pick_export_path};
use crate::state::AppState;

#[component]
pub fn NoteEntry() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let (title, body) = {
        let notebook = state.notebook.read();
        (notebook.form().title.clone(), notebook.form().body.clone())
    };

    let submit_note = move |_| {
        if state.notebook.write().submit_note().is_ok() {
            tracing::debug!("Note form submitted");
        }
    };

    let download_notes = move |_| {
        let notes = state.notebook.read().notes().to_vec();
        spawn(async move {
            let Some(path) = pick_export_path().await else {
                tracing::debug!("Note download cancelled");
                return;
            };
            match export_notes_to_path(&notes, &path) {
                Ok(count) => tracing::info!("Exported {} notes to {}", count, path.display()),
                Err(e) => tracing::error!("Failed to export notes to {}: {}", path.display(), e),
            }
        });
    };

    let field_style = format!(
        "
            width: 100%;
            box-sizing: border-box;
            padding: 8px 16px;
            border: 1px solid {};
            border-radius: 6px;
            font-size: 16px;
            font-family: inherit;
            background: {};
            color: {};
        ",
        colors.border, colors.surface, colors.text_primary
    );

    rsx! {
        div {
            class: "note-form",
            style: "display: flex; flex-direction: column; gap: 16px; margin-top: 32px;",

            input {
                style: "{field_style} height: 40px;",
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| state.notebook.write().set_title(evt.value()),
            }

            textarea {
                style: "{field_style} min-height: 80px; resize: vertical;",
                placeholder: "Body",
                value: "{body}",
                oninput: move |evt| state.notebook.write().set_body(evt.value()),
            }

            div {
                style: "display: flex; justify-content: center; gap: 8px;",

                Button { onclick: submit_note, "Submit Note" }
                Button { onclick: download_notes, "Download Notes" }
            }
        }
    }
}
