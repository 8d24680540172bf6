//! Counter display and controls

use dioxus::prelude::*;

use super::button::Button;
use crate::state::AppState;

#[component]
pub fn CounterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let count = state.notebook.read().count();

    rsx! {
        div {
            class: "counter",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; margin: 16px 0;",

            span {
                class: "counter-value",
                style: "
                    padding: 4px;
                    background: {colors.mark_bg};
                    color: {colors.mark_text};
                    font-family: 'New York', Georgia, serif;
                    font-size: 18px;
                    font-weight: bold;
                ",
                "Count is Already {count}!"
            }

            Button {
                onclick: move |_| state.notebook.write().increment(),
                "Count Me!"
            }

            Button {
                onclick: move |_| state.notebook.write().decrement(),
                "Count Me Out!"
            }
        }
    }
}
