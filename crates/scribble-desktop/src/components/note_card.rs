//! Note card component

use dioxus::prelude::*;

use crate::state::AppState;

/// A single note rendered in the note list.
#[component]
pub fn NoteCard(title: String, body: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "note-item",
            style: "
                padding: 16px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                box-shadow: {colors.shadow};
                background: {colors.surface};
            ",

            h2 {
                class: "note-title",
                style: "margin: 0; font-size: 20px; color: {colors.text_primary};",
                "{title}"
            }

            p {
                class: "note-body",
                style: "margin: 8px 0 0 0; white-space: pre-wrap; color: {colors.text_primary};",
                "{body}"
            }
        }
    }
}
