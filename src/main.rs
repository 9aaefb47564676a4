//! NEXRAIN Viewer - desktop viewer for radar reflectivity by point
//!
//! Shows the recent DBZ series of a monitoring point, filtered by a trailing
//! time window, with the point list and records served by the NEXRAIN
//! reporting service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use std::sync::Arc;

use nexrain_viewer::app::NexrainApp;
use nexrain_viewer::client::HttpClient;
use nexrain_viewer::params::Cli;
use nexrain_viewer::settings::UserSettings;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = UserSettings::load();

    let params = cli.launch_params();
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| settings.base_url.clone());
    let window = params.window().unwrap_or_else(|| settings.default_window());

    tracing::info!("Using service at {}", base_url);
    let source = Arc::new(HttpClient::new(base_url));

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("NEXRAIN DBZ Viewer")
            .with_app_id("nexrain-viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "NEXRAIN Viewer",
        native_options,
        Box::new(move |cc| Ok(Box::new(NexrainApp::new(cc, source, params, window)))),
    )
}
