//! Coopdir Desktop Application
//!
//! Advanced search over the cooperative and credit-union directory.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod embedded_config;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coopdir=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting coopdir...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Coop Directory Search"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
