use crate::data::model::{Dataset, EducationLevel};
use crate::data::table::{
    comparison_table, heatmap_matrix, ComparisonRow, HeatmapMatrix, Selection, TownNotFound,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The two independent views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Comparison,
    Heatmap,
}

/// The full UI state, independent of rendering.
///
/// Each view keeps its own [`Selection`] and its own cached derived table;
/// changing one view's selection rebuilds only that view's table. All
/// mutation goes through the methods below so the caches never go stale.
pub struct AppState {
    /// Loaded and cleaned dataset, fixed for the lifetime of the app.
    pub dataset: Dataset,

    /// Selection driving the comparison chart.
    pub comparison: Selection,

    /// Selection driving the heatmap.
    pub heatmap: Selection,

    /// Cached long-form table behind the comparison chart.
    pub comparison_rows: Vec<ComparisonRow>,

    /// Cached matrix behind the heatmap (None while the selection is empty).
    pub heatmap_matrix: Option<HeatmapMatrix>,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start with the dataset loaded and nothing selected: both views show
    /// their placeholder until the user picks towns and levels.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            comparison: Selection::default(),
            heatmap: Selection::default(),
            comparison_rows: Vec::new(),
            heatmap_matrix: None,
            status_message: None,
        }
    }

    /// The selection backing the given view.
    pub fn selection(&self, view: View) -> &Selection {
        match view {
            View::Comparison => &self.comparison,
            View::Heatmap => &self.heatmap,
        }
    }

    fn selection_mut(&mut self, view: View) -> &mut Selection {
        match view {
            View::Comparison => &mut self.comparison,
            View::Heatmap => &mut self.heatmap,
        }
    }

    /// Replace a view's chosen towns outright.
    pub fn set_towns(&mut self, view: View, towns: Vec<String>) {
        self.selection_mut(view).set_towns(towns);
        self.recompute(view);
    }

    /// Replace a view's chosen levels outright.
    pub fn set_levels(&mut self, view: View, levels: Vec<EducationLevel>) {
        self.selection_mut(view).set_levels(levels);
        self.recompute(view);
    }

    /// Toggle a single town in a view's selection.
    pub fn toggle_town(&mut self, view: View, town: &str) {
        self.selection_mut(view).toggle_town(town);
        self.recompute(view);
    }

    /// Toggle a single education level in a view's selection.
    pub fn toggle_level(&mut self, view: View, level: EducationLevel) {
        self.selection_mut(view).toggle_level(level);
        self.recompute(view);
    }

    /// Select every town in the dataset, in dataset order.
    pub fn select_all_towns(&mut self, view: View) {
        let towns = self.dataset.towns().to_vec();
        self.set_towns(view, towns);
    }

    pub fn clear_towns(&mut self, view: View) {
        self.selection_mut(view).clear_towns();
        self.recompute(view);
    }

    /// Select every education level, in catalog order.
    pub fn select_all_levels(&mut self, view: View) {
        self.set_levels(view, EducationLevel::ALL.to_vec());
    }

    pub fn clear_levels(&mut self, view: View) {
        self.selection_mut(view).clear_levels();
        self.recompute(view);
    }

    /// Rebuild the derived table for the view whose selection changed. The
    /// other view's cache is left untouched.
    fn recompute(&mut self, view: View) {
        self.status_message = None;
        match view {
            View::Comparison => self.recompute_comparison(),
            View::Heatmap => self.recompute_heatmap(),
        }
    }

    /// Builds on a working copy of the selection so a stale town can be
    /// skipped without editing what the user picked.
    fn recompute_comparison(&mut self) {
        let mut selection = self.comparison.clone();
        loop {
            match comparison_table(&self.dataset, &selection) {
                Ok(rows) => {
                    self.comparison_rows = rows;
                    return;
                }
                Err(TownNotFound(town)) => {
                    log::warn!("comparison selection names unknown town {town:?}; skipping it");
                    self.status_message = Some(format!("Skipped unknown town {town:?}."));
                    selection.remove_town(&town);
                }
            }
        }
    }

    fn recompute_heatmap(&mut self) {
        let mut selection = self.heatmap.clone();
        loop {
            match heatmap_matrix(&self.dataset, &selection) {
                Ok(matrix) => {
                    self.heatmap_matrix = matrix;
                    return;
                }
                Err(TownNotFound(town)) => {
                    log::warn!("heatmap selection names unknown town {town:?}; skipping it");
                    self.status_message = Some(format!("Skipped unknown town {town:?}."));
                    selection.remove_town(&town);
                }
            }
        }
    }
}
