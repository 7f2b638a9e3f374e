use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::generate_palette;
use crate::data::model::EducationLevel;
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel: one block of pickers per view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selections");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Comparison chart");
            selection_controls(ui, state, View::Comparison);

            ui.add_space(8.0);
            ui.separator();

            ui.strong("Heatmap");
            selection_controls(ui, state, View::Heatmap);
        });
}

/// Town and level pickers for one view. The two views never share state, so
/// every widget id is salted with the view.
fn selection_controls(ui: &mut Ui, state: &mut AppState, view: View) {
    // Clone the town list so we can mutate state inside the loops.
    let towns = state.dataset.towns().to_vec();

    let n_selected = state.selection(view).towns().len();
    let header = format!("Towns  ({n_selected}/{})", towns.len());
    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt((view, "towns"))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_towns(view);
                }
                if ui.small_button("None").clicked() {
                    state.clear_towns(view);
                }
            });

            // In the comparison view, selected towns are tinted with the bar
            // colour they will get in the chart.
            let palette = generate_palette(state.selection(view).towns().len());
            for town in &towns {
                let position = state
                    .selection(view)
                    .towns()
                    .iter()
                    .position(|t| t == town);

                let mut text = RichText::new(town);
                if view == View::Comparison {
                    if let Some(color) = position.and_then(|i| palette.get(i)) {
                        text = text.color(*color);
                    }
                }

                let mut checked = position.is_some();
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_town(view, town);
                }
            }
        });

    let n_selected = state.selection(view).levels().len();
    let header = format!("Education levels  ({n_selected}/{})", EducationLevel::ALL.len());
    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt((view, "levels"))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_levels(view);
                }
                if ui.small_button("None").clicked() {
                    state.clear_levels(view);
                }
            });

            for level in EducationLevel::ALL {
                let mut checked = state.selection(view).contains_level(level);
                if ui.checkbox(&mut checked, level.label()).changed() {
                    state.toggle_level(view, level);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset summary and any status message.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Educational Levels by Town in Lebanon");

        ui.separator();

        ui.label(format!(
            "{} towns · {} education levels",
            state.dataset.towns().len(),
            EducationLevel::ALL.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
