//! Shared action button

use dioxus::prelude::*;

use crate::state::AppState;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Destructive,
}

/// Fixed-size italic action button used throughout the app.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let text_color = match variant {
        ButtonVariant::Solid => colors.button_text,
        ButtonVariant::Destructive => colors.destructive,
    };

    rsx! {
        button {
            class: "action-button",
            style: "
                height: 48px;
                width: 200px;
                border: 2px solid {text_color};
                border-radius: 6px;
                background: {colors.button_bg};
                color: {text_color};
                font-size: 16px;
                font-style: italic;
                font-weight: 600;
                cursor: pointer;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
