#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod notices;
mod predict_worker;
mod views;

use app::MoldcastApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 840.0])
            .with_title("Moldcast"),
        ..Default::default()
    };

    eframe::run_native(
        "Moldcast",
        options,
        Box::new(|cc| Ok(Box::new(MoldcastApp::new(cc)))),
    )
}
