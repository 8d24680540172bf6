//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;

/// Saved notes, newest first
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = state.notebook.read().notes().to_vec();

    rsx! {
        div {
            class: "note-list",
            style: "display: flex; flex-direction: column; gap: 16px; margin-top: 32px;",

            // Notes have no identity beyond their position
            for (index, note) in notes.into_iter().enumerate() {
                NoteCard {
                    key: "{index}",
                    title: note.title,
                    body: note.body,
                }
            }
        }
    }
}
