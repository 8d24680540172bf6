//! Greeting heading and subtitle

use dioxus::prelude::*;

use crate::state::AppState;

const GREETING: &str = "Welcome Stranger 🎉";
const HIGHLIGHT_QUERY: &str = "stranger";
const SUBTITLE: &str = "This is my beautiful Rust desktop app!";

/// Split `text` into `(segment, is_match)` runs, matching `query` case-insensitively.
pub fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let haystack = text.to_ascii_lowercase();
    let needle = query.to_ascii_lowercase();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, matched) in haystack.match_indices(&needle) {
        if start > cursor {
            segments.push((text[cursor..start].to_string(), false));
        }
        let end = start + matched.len();
        segments.push((text[start..end].to_string(), true));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push((text[cursor..].to_string(), false));
    }

    segments
}

#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let segments = highlight_segments(GREETING, HIGHLIGHT_QUERY);

    rsx! {
        div {
            class: "header",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; margin-bottom: 16px;",

            h1 {
                style: "margin: 0; font-size: 36px; line-height: 2; color: {colors.text_primary};",
                for (index, (segment, highlighted)) in segments.into_iter().enumerate() {
                    if highlighted {
                        span {
                            key: "{index}",
                            style: "
                                padding: 4px 8px;
                                border-radius: 9999px;
                                background: {colors.highlight_bg};
                            ",
                            "{segment}"
                        }
                    } else {
                        span { key: "{index}", "{segment}" }
                    }
                }
            }

            p {
                style: "margin: 0; font-size: 16px; font-style: italic; color: {colors.text_secondary};",
                "{SUBTITLE}"
            }
        }
    }
}
