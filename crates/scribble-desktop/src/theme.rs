//! Theme configuration for the desktop app

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if is_system_dark_mode() => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(|| {
        let is_dark = detect_system_dark_mode();
        tracing::debug!(
            "System theme detected: {}",
            if is_dark { "dark" } else { "light" }
        );
        is_dark
    })
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        })
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub page_bg: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub highlight_bg: &'static str,
    pub mark_bg: &'static str,
    pub mark_text: &'static str,
    pub button_bg: &'static str,
    pub button_text: &'static str,
    pub destructive: &'static str,
    pub warning_bg: &'static str,
    pub warning_text: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    page_bg: "#f0f4f8",
    surface: "#ffffff",
    text_primary: "#1a202c",
    text_secondary: "#4a5568",
    border: "#e2e8f0",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    highlight_bg: "#fed7d7",
    mark_bg: "#000000",
    mark_text: "#ffffff",
    button_bg: "#edf2f7",
    button_text: "#1a202c",
    destructive: "#c53030",
    warning_bg: "#feebc8",
    warning_text: "#7b341e",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    page_bg: "#171923",
    surface: "#1a202c",
    text_primary: "#e2e8f0",
    text_secondary: "#a0aec0",
    border: "#2d3748",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.4)",
    highlight_bg: "#9b2c2c",
    mark_bg: "#f7fafc",
    mark_text: "#1a202c",
    button_bg: "#2d3748",
    button_text: "#e2e8f0",
    destructive: "#fc8181",
    warning_bg: "#7b341e",
    warning_text: "#feebc8",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
