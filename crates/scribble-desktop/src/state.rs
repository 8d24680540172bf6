//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use scribble_core::{KeyValueStore, Notebook};

use crate::theme::ResolvedTheme;

/// Local storage backend chosen at startup.
pub type LocalStorage = Box<dyn KeyValueStore>;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Counter, notes, form text, and warning
    pub notebook: Signal<Notebook<LocalStorage>>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
}
