mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context as _;
use eframe::egui;

use crate::app::EduTownApp;
use crate::data::loader::load_dataset;
use crate::state::AppState;

/// Bundled dataset, resolved relative to the working directory.
const DATA_PATH: &str = "data/educational_levels.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Load before the event loop starts: the UI either gets a full dataset
    // or a terminal error screen, never a half-initialised dashboard.
    let app = match load_dataset(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))
    {
        Ok(dataset) => {
            log::info!("loaded {} towns from {DATA_PATH}", dataset.towns().len());
            EduTownApp::Dashboard(AppState::new(dataset))
        }
        Err(e) => {
            log::error!("failed to load dataset: {e:#}");
            EduTownApp::LoadFailed(format!("Failed to load dataset: {e:#}"))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Educational Levels by Town in Lebanon",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
