//! Runtime configuration for the desktop app.
//!
//! Values come from the process environment (after `.env` is loaded in `main`).

use std::path::PathBuf;

use crate::theme::ThemeMode;

const ENV_DATA_DIR: &str = "SCRIBBLE_DATA_DIR";
const ENV_THEME: &str = "SCRIBBLE_THEME";
const APP_DIR_NAME: &str = "scribble";
const STORE_FILE_NAME: &str = "local-storage.json";

/// Resolved desktop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Directory holding the local key-value store
    pub data_dir: PathBuf,
    /// Requested theme mode
    pub theme: ThemeMode,
}

impl DesktopConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = normalize(lookup(ENV_DATA_DIR))
            .map_or_else(default_data_dir, PathBuf::from);
        let theme = normalize(lookup(ENV_THEME))
            .map(|value| parse_theme_mode(&value))
            .unwrap_or_default();

        Self { data_dir, theme }
    }

    /// Path of the JSON file backing local storage
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn parse_theme_mode(value: &str) -> ThemeMode {
    match value.to_ascii_lowercase().as_str() {
        "light" => ThemeMode::Light,
        "dark" => ThemeMode::Dark,
        "system" => ThemeMode::System,
        _ => {
            tracing::warn!("Unknown {} value {:?}, following system theme", ENV_THEME, value);
            ThemeMode::System
        }
    }
}
