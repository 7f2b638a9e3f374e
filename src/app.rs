use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The dataset is loaded before the UI starts, so the app is either a live
/// dashboard or a terminal error screen. The error screen deliberately has
/// no selection controls: with no data there is nothing to select.
pub enum EduTownApp {
    Dashboard(AppState),
    LoadFailed(String),
}

impl eframe::App for EduTownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self {
            EduTownApp::Dashboard(state) => dashboard(ctx, state),
            EduTownApp::LoadFailed(message) => load_failed(ctx, message),
        }
    }
}

fn dashboard(ctx: &egui::Context, state: &mut AppState) {
    // ---- Top panel: summary bar ----
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        panels::top_bar(ui, state);
    });

    // ---- Left side panel: per-view selections ----
    egui::SidePanel::left("selection_panel")
        .default_width(240.0)
        .resizable(true)
        .show(ctx, |ui| {
            panels::side_panel(ui, state);
        });

    // ---- Central panel: the two views, stacked ----
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                ui.label(
                    "This app allows you to explore the educational levels across various \
                     towns in Lebanon. You can select multiple towns and educational levels \
                     to visualize the data in both bar charts and heatmaps.",
                );
                ui.add_space(12.0);

                ui.heading("Comparing Educational Levels Across Selected Towns");
                ui.label(
                    "This bar chart compares the educational levels of residents in the \
                     selected towns. Select multiple towns and educational levels to explore \
                     how educational attainment varies across regions.",
                );
                ui.add_space(8.0);
                plot::comparison_chart(ui, state);

                ui.add_space(16.0);
                ui.separator();
                ui.add_space(16.0);

                ui.heading("Heatmap of Educational Levels by Town");
                ui.label(
                    "This heatmap shows the intensity of educational levels across different \
                     towns. You can use it to visually compare educational levels and see \
                     patterns across regions.",
                );
                ui.add_space(8.0);
                plot::heatmap_grid(ui, state);
            });
    });
}

fn load_failed(ctx: &egui::Context, message: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(message).heading().color(Color32::RED));
        });
    });
}
