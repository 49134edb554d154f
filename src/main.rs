//! PieView - Pie Chart Dashboard & Interactive Viewer
//!
//! Shows a hardcoded color sample pie immediately and a day schedule pie
//! once its chart package finishes loading.

mod charts;
mod data;
mod gui;
mod loader;
mod targets;

use eframe::egui;
use gui::PieViewApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 640.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("PieView"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PieView",
        options,
        Box::new(|cc| Ok(Box::new(PieViewApp::new(cc)?))),
    )
}
