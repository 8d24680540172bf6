//! App-level actions: closing the window and clearing notes

use dioxus::desktop::window;
use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::services::confirm_close;
use crate::state::AppState;

/// Close App and Clear Notes buttons
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();

    let close_app = move |_| {
        spawn(async move {
            if confirm_close().await {
                tracing::info!("Closing app on user request");
                window().close();
            }
        });
    };

    let clear_notes = move |_| {
        state.notebook.write().clear_notes();
    };

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; margin-bottom: 16px;",

            Button {
                variant: ButtonVariant::Destructive,
                onclick: close_app,
                "Close App"
            }

            Button {
                variant: ButtonVariant::Destructive,
                onclick: clear_notes,
                "Clear Notes"
            }
        }
    }
}
