#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sketchpad::{SketchApp, SketchError};

fn main() -> Result<(), SketchError> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 400.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchpad",
        options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc)))),
    )
    // A window/GL context we cannot create means no paintable surface; there
    // is no degraded mode to fall back to.
    .map_err(|err| SketchError::Surface(err.to_string()))
}
