//! Scribble Desktop Application
//!
//! A counter and quick-notes widget with local persistence.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::DesktopConfig;

const DEFAULT_LOG_FILTER: &str = "scribble_core=debug,scribble_desktop=debug";

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Scribble...");

    let config = DesktopConfig::from_env();
    tracing::info!("Data directory: {}", config.data_dir.display());

    let window = WindowBuilder::new()
        .with_title("Scribble")
        .with_inner_size(LogicalSize::new(960.0, 860.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}
