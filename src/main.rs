#![windows_subsystem = "windows"]
mod actions;
mod app;
mod config;
mod dialogs;
mod error;
mod exporter;
mod qr;
mod types;
mod ui;

use app::QrCodeApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 500.0])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(false)
            .with_drag_and_drop(true)
            .with_title("QRCode Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "QRCode Generator",
        options,
        Box::new(|cc| Ok(Box::new(QrCodeApp::new(cc)))),
    )
}
