//! Nibble Desktop Application
//!
//! A small desktop client for recording and browsing food ideas.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nibble_desktop=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Nibble...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Nibble")
            .with_inner_size(LogicalSize::new(1100.0, 720.0)),
    );

    // Launch the app
    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
