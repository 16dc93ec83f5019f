// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! CRX Builder - Main Entry Point
//!
//! A desktop playground for Chrome extension sources: HTML/CSS/JavaScript
//! editors with abbreviation expansion, a live preview and SEO starter
//! templates. Built with Rust and egui.
//!
//! Usage: `crx-builder [route]`, e.g. `crx-builder /templates/serp-analyzer`.

mod app;
mod config;
mod editor;
mod error;
mod preview;
mod project;
mod routes;
mod state;
mod string_utils;
mod theme;
mod ui;

use app::CrxBuilderApp;
use config::load_config;
use log::info;
use routes::Route;

/// Application name constant.
const APP_NAME: &str = "CRX Builder";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let initial_route = std::env::args()
        .nth(1)
        .map(|path| Route::resolve(&path))
        .unwrap_or_default();
    info!("Initial route: {}", initial_route.path());

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0]);

    // Apply position if saved
    let viewport = if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport.with_position([x, y])
    } else {
        viewport
    };

    let viewport = if window_size.maximized {
        viewport.with_maximized(true)
    } else {
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(CrxBuilderApp::new(cc, initial_route)))),
    )
}
