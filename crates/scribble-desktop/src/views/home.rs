//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{
    CounterPanel, Header, NoteEntry, NoteList, Toolbar, WarningBanner,
};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 960px;
                margin: 0 auto;
                padding: 24px;
                border-radius: 6px;
                box-shadow: {colors.shadow};
                background: {colors.surface};
            ",

            Header {}
            CounterPanel {}
            Toolbar {}
            NoteEntry {}
            WarningBanner {}
            NoteList {}
        }
    }
}
