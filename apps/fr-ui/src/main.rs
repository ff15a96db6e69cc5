#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::FractionateApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let case_path = std::env::args_os().nth(1).map(PathBuf::from);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Fractionate"),
        ..Default::default()
    };

    eframe::run_native(
        "Fractionate",
        options,
        Box::new(|_cc| Ok(Box::new(FractionateApp::new(case_path)))),
    )
}
