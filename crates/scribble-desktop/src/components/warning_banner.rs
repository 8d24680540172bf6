//! Validation warning banner

use dioxus::prelude::*;

use crate::state::AppState;

/// Shows the notebook's current warning, if any.
#[component]
pub fn WarningBanner() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let warning = state.notebook.read().warning().map(str::to_string);

    rsx! {
        if let Some(message) = warning {
            div {
                class: "warning",
                role: "alert",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    margin-top: 16px;
                    padding: 12px 16px;
                    border-radius: 6px;
                    background: {colors.warning_bg};
                    color: {colors.warning_text};
                ",
                span { "⚠" }
                "{message}"
            }
        }
    }
}
