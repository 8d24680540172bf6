//! Main application component

use dioxus::prelude::*;

use scribble_core::Notebook;

use crate::config::DesktopConfig;
use crate::services::open_local_storage;
use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<DesktopConfig>();
    let notebook = use_signal(|| Notebook::open(open_local_storage(&config)));
    let theme = use_signal(|| resolve_theme(config.theme));

    use_context_provider(|| AppState { notebook, theme });

    let current_theme = theme();
    let colors = current_theme.palette();

    rsx! {
        div {
            class: "app-container",
            "data-theme": current_theme.as_attr(),
            style: "
                min-height: 100vh;
                padding: 40px 16px;
                box-sizing: border-box;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.page_bg};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
