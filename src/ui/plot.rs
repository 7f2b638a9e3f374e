use eframe::egui::{self, vec2, Align2, FontId, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{contrast_text, generate_palette, heat_color};
use crate::data::table::ComparisonRow;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison chart – grouped bars, one group per level, one colour per town
// ---------------------------------------------------------------------------

/// Render the grouped bar chart for the comparison view.
pub fn comparison_chart(ui: &mut Ui, state: &AppState) {
    let rows = &state.comparison_rows;
    if rows.is_empty() {
        placeholder(
            ui,
            "Please select both towns and educational levels to see the comparison.",
        );
        return;
    }

    // Levels sit at integer x positions; each town's bar is nudged sideways
    // within its group. The cached rows come town-major, so one chunk per
    // town covers every selected level in order.
    let levels = state.comparison.levels().to_vec();
    let n_levels = levels.len();
    let groups: Vec<&[ComparisonRow]> = rows.chunks(n_levels).collect();
    let n_towns = groups.len();
    let bar_width = 0.8 / n_towns as f64;
    let palette = generate_palette(n_towns);

    Plot::new("comparison_chart")
        .legend(Legend::default())
        .x_axis_label("Education Level")
        .y_axis_label("Percentage")
        .x_axis_formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() > 0.05 || nearest < 0.0 {
                return String::new();
            }
            levels
                .get(nearest as usize)
                .map(|l| l.label().to_string())
                .unwrap_or_default()
        })
        .include_y(0.0)
        .height(340.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, chunk) in groups.iter().enumerate() {
                let offset = (i as f64 - (n_towns as f64 - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = chunk
                    .iter()
                    .enumerate()
                    .map(|(g, row)| {
                        Bar::new(g as f64 + offset, row.percentage)
                            .width(bar_width)
                            .name(format!("{} – {}", row.town, row.level))
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(palette[i])
                        .name(&chunk[0].town),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Heatmap – coloured grid, levels as rows and towns as columns
// ---------------------------------------------------------------------------

/// Render the heatmap view: a coloured cell per (level, town) with the
/// percentage printed on top, plus a small colour-scale legend.
pub fn heatmap_grid(ui: &mut Ui, state: &AppState) {
    let Some(matrix) = &state.heatmap_matrix else {
        placeholder(
            ui,
            "Please select both towns and educational levels to see the heatmap.",
        );
        return;
    };

    let (min, max) = matrix.value_range();
    let span = max - min;
    let normalized = move |v: f64| -> f32 {
        if span.abs() < f64::EPSILON {
            0.5
        } else {
            ((v - min) / span) as f32
        }
    };

    let towns = matrix.towns();
    TableBuilder::new(ui)
        .striped(false)
        .vscroll(false)
        .column(Column::auto().at_least(130.0))
        .columns(Column::remainder().at_least(70.0), towns.len())
        .header(22.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Educational Level");
            });
            for town in towns {
                header.col(|ui: &mut Ui| {
                    ui.strong(town);
                });
            }
        })
        .body(|body| {
            body.rows(26.0, matrix.rows().len(), |mut table_row| {
                let row = &matrix.rows()[table_row.index()];
                table_row.col(|ui: &mut Ui| {
                    ui.label(row.level.label());
                });
                for (j, &value) in row.values.iter().enumerate() {
                    table_row.col(|ui: &mut Ui| {
                        let fill = heat_color(normalized(value));
                        let size = vec2(ui.available_width(), ui.available_height());
                        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, fill);
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            format!("{value:.1}"),
                            FontId::proportional(12.0),
                            contrast_text(fill),
                        );
                        response.on_hover_text(format!(
                            "{} – {}: {value:.1}%",
                            towns[j], row.level
                        ));
                    });
                }
            });
        });

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{min:.1}%")).weak());
        gradient_strip(ui);
        ui.label(RichText::new(format!("{max:.1}%")).weak());
        ui.label(RichText::new("Percentage").weak());
    });
}

/// The colour-scale bar under the heatmap, cold on the left, hot on the right.
fn gradient_strip(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(vec2(160.0, 12.0), Sense::hover());
    let slices = 32;
    let slice_width = rect.width() / slices as f32;
    for i in 0..slices {
        let t = (i as f32 + 0.5) / slices as f32;
        let slice = egui::Rect::from_min_size(
            egui::pos2(rect.left() + i as f32 * slice_width, rect.top()),
            vec2(slice_width + 0.5, rect.height()),
        );
        ui.painter().rect_filled(slice, 0.0, heat_color(t));
    }
}

// ---------------------------------------------------------------------------
// Placeholder
// ---------------------------------------------------------------------------

fn placeholder(ui: &mut Ui, text: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(text).italics().weak());
    });
    ui.add_space(24.0);
}
