use thiserror::Error;

use super::model::{Dataset, EducationLevel};

// ---------------------------------------------------------------------------
// Selection – chosen towns and levels for one view
// ---------------------------------------------------------------------------

/// The towns and education levels chosen in one view's selectors.
///
/// Both axes behave as sets that remember insertion order: the order things
/// were picked in is the order the derived tables use. Town names are not
/// validated against the dataset here; an unknown name surfaces as
/// [`TownNotFound`] when a table is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    towns: Vec<String>,
    levels: Vec<EducationLevel>,
}

impl Selection {
    /// Chosen towns, in selection order.
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Chosen levels, in selection order.
    pub fn levels(&self) -> &[EducationLevel] {
        &self.levels
    }

    /// True when either axis has nothing chosen — the placeholder state.
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty() || self.levels.is_empty()
    }

    pub fn contains_town(&self, town: &str) -> bool {
        self.towns.iter().any(|t| t == town)
    }

    pub fn contains_level(&self, level: EducationLevel) -> bool {
        self.levels.contains(&level)
    }

    /// Replace the chosen towns. Duplicates keep their first position.
    pub fn set_towns<I>(&mut self, towns: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.towns.clear();
        for town in towns {
            if !self.contains_town(&town) {
                self.towns.push(town);
            }
        }
    }

    /// Replace the chosen levels. Duplicates keep their first position.
    pub fn set_levels<I>(&mut self, levels: I)
    where
        I: IntoIterator<Item = EducationLevel>,
    {
        self.levels.clear();
        for level in levels {
            if !self.contains_level(level) {
                self.levels.push(level);
            }
        }
    }

    /// Add the town if absent, remove it if present.
    pub fn toggle_town(&mut self, town: &str) {
        if self.contains_town(town) {
            self.towns.retain(|t| t != town);
        } else {
            self.towns.push(town.to_string());
        }
    }

    /// Add the level if absent, remove it if present.
    pub fn toggle_level(&mut self, level: EducationLevel) {
        if self.contains_level(level) {
            self.levels.retain(|l| *l != level);
        } else {
            self.levels.push(level);
        }
    }

    pub fn remove_town(&mut self, town: &str) {
        self.towns.retain(|t| t != town);
    }

    pub fn clear_towns(&mut self) {
        self.towns.clear();
    }

    pub fn clear_levels(&mut self) {
        self.levels.clear();
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A chosen town with no record in the dataset.
///
/// The selectors only offer names taken from the dataset, so hitting this
/// means the selection got out of sync with the data. The view layer recovers
/// by skipping the town instead of dropping the whole chart.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("town {0:?} is not in the dataset")]
pub struct TownNotFound(pub String);

// ---------------------------------------------------------------------------
// Comparison table – long form, one row per (town, level) pair
// ---------------------------------------------------------------------------

/// One bar of the comparison chart: a town's percentage for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub town: String,
    pub level: EducationLevel,
    pub percentage: f64,
}

/// Build the long-form comparison table for the current selection.
///
/// Rows are ordered town-outer / level-inner so all of a town's bars stay
/// together in the grouped chart. Either axis empty yields an empty table
/// before any lookup happens.
pub fn comparison_table(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<Vec<ComparisonRow>, TownNotFound> {
    if selection.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::with_capacity(selection.towns().len() * selection.levels().len());
    for town in selection.towns() {
        let record = dataset.get(town).ok_or_else(|| TownNotFound(town.clone()))?;
        for &level in selection.levels() {
            rows.push(ComparisonRow {
                town: town.clone(),
                level,
                percentage: level.percentage_of(record),
            });
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Heatmap matrix – wide form, levels as rows and towns as columns
// ---------------------------------------------------------------------------

/// One heatmap row: a level's percentage per chosen town, parallel to
/// [`HeatmapMatrix::towns`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapRow {
    pub level: EducationLevel,
    pub values: Vec<f64>,
}

/// The level-major matrix behind the heatmap: `rows()[i].values[j]` is the
/// percentage for level `i` in town `j`. Only built non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapMatrix {
    towns: Vec<String>,
    rows: Vec<HeatmapRow>,
}

impl HeatmapMatrix {
    /// Column headers, in selection order.
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Rows, in level selection order.
    pub fn rows(&self) -> &[HeatmapRow] {
        &self.rows
    }

    /// Cell lookup by level and town.
    pub fn value(&self, level: EducationLevel, town: &str) -> Option<f64> {
        let col = self.towns.iter().position(|t| t == town)?;
        let row = self.rows.iter().find(|r| r.level == level)?;
        row.values.get(col).copied()
    }

    /// Smallest and largest cell values, for color-intensity scaling.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.rows {
            for &v in &row.values {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }
}

/// Build the heatmap matrix for the current selection, or `None` when either
/// axis is empty.
///
/// The table is assembled town-major (one column of values per chosen town)
/// and then transposed, because the chart convention puts towns on the x axis
/// and levels on the y axis.
pub fn heatmap_matrix(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<Option<HeatmapMatrix>, TownNotFound> {
    if selection.is_empty() {
        return Ok(None);
    }

    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(selection.towns().len());
    for town in selection.towns() {
        let record = dataset.get(town).ok_or_else(|| TownNotFound(town.clone()))?;
        columns.push(
            selection
                .levels()
                .iter()
                .map(|l| l.percentage_of(record))
                .collect(),
        );
    }

    let rows = selection
        .levels()
        .iter()
        .enumerate()
        .map(|(i, &level)| HeatmapRow {
            level,
            values: columns.iter().map(|col| col[i]).collect(),
        })
        .collect();

    Ok(Some(HeatmapMatrix {
        towns: selection.towns().to_vec(),
        rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TownRecord;
    use EducationLevel::{Illiterate, SchoolDropout, University};

    /// Values are in catalog order: illiterate, school dropout, university,
    /// secondary, intermediate, vocational, elementary, higher education.
    fn record(town: &str, values: [f64; 8]) -> TownRecord {
        TownRecord {
            town: town.to_string(),
            illiterate: values[0],
            school_dropout: values[1],
            university: values[2],
            secondary: values[3],
            intermediate: values[4],
            vocational: values[5],
            elementary: values[6],
            higher_education: values[7],
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Byblos", [5.0, 3.5, 20.0, 18.0, 12.0, 6.0, 25.0, 9.0]),
            record("Tyre", [15.0, 4.0, 10.0, 16.0, 14.0, 5.0, 30.0, 6.5]),
        ])
    }

    fn selection(towns: &[&str], levels: &[EducationLevel]) -> Selection {
        let mut sel = Selection::default();
        sel.set_towns(towns.iter().map(|t| t.to_string()));
        sel.set_levels(levels.iter().copied());
        sel
    }

    fn row(town: &str, level: EducationLevel, percentage: f64) -> ComparisonRow {
        ComparisonRow {
            town: town.to_string(),
            level,
            percentage,
        }
    }

    #[test]
    fn comparison_rows_follow_selection_order() {
        let sel = selection(&["Byblos", "Tyre"], &[University, Illiterate]);
        let rows = comparison_table(&dataset(), &sel).unwrap();

        assert_eq!(
            rows,
            vec![
                row("Byblos", University, 20.0),
                row("Byblos", Illiterate, 5.0),
                row("Tyre", University, 10.0),
                row("Tyre", Illiterate, 15.0),
            ]
        );
    }

    #[test]
    fn comparison_length_is_towns_times_levels() {
        let ds = dataset();
        let sel = selection(&["Tyre", "Byblos"], &[Illiterate, SchoolDropout, University]);
        let rows = comparison_table(&ds, &sel).unwrap();

        assert_eq!(rows.len(), 2 * 3);
        for r in &rows {
            let stored = r.level.percentage_of(ds.get(&r.town).unwrap());
            assert_eq!(r.percentage, stored);
        }
    }

    #[test]
    fn either_axis_empty_yields_empty_output() {
        let ds = dataset();

        let no_towns = selection(&[], &[University]);
        assert_eq!(comparison_table(&ds, &no_towns).unwrap(), vec![]);
        assert_eq!(heatmap_matrix(&ds, &no_towns).unwrap(), None);

        let no_levels = selection(&["Byblos"], &[]);
        assert_eq!(comparison_table(&ds, &no_levels).unwrap(), vec![]);
        assert_eq!(heatmap_matrix(&ds, &no_levels).unwrap(), None);
    }

    #[test]
    fn empty_levels_short_circuit_before_town_lookup() {
        // An unknown town is irrelevant while the other axis is empty.
        let sel = selection(&["Atlantis"], &[]);
        assert_eq!(comparison_table(&dataset(), &sel).unwrap(), vec![]);
        assert_eq!(heatmap_matrix(&dataset(), &sel).unwrap(), None);
    }

    #[test]
    fn unknown_town_is_reported_by_name() {
        let sel = selection(&["Byblos", "Atlantis"], &[University]);

        let err = comparison_table(&dataset(), &sel).unwrap_err();
        assert_eq!(err, TownNotFound("Atlantis".to_string()));

        let err = heatmap_matrix(&dataset(), &sel).unwrap_err();
        assert_eq!(err, TownNotFound("Atlantis".to_string()));
    }

    #[test]
    fn heatmap_has_levels_as_rows_and_towns_as_columns() {
        let sel = selection(&["Byblos", "Tyre"], &[University, Illiterate]);
        let matrix = heatmap_matrix(&dataset(), &sel).unwrap().unwrap();

        assert_eq!(matrix.towns(), ["Byblos".to_string(), "Tyre".to_string()]);
        assert_eq!(matrix.rows().len(), 2);
        assert_eq!(matrix.rows()[0].level, University);
        assert_eq!(matrix.rows()[0].values, [20.0, 10.0]);
        assert_eq!(matrix.rows()[1].level, Illiterate);
        assert_eq!(matrix.rows()[1].values, [5.0, 15.0]);
    }

    #[test]
    fn heatmap_agrees_with_comparison_cell_for_cell() {
        let ds = dataset();
        let sel = selection(&["Tyre", "Byblos"], &[SchoolDropout, University, Illiterate]);

        let rows = comparison_table(&ds, &sel).unwrap();
        let matrix = heatmap_matrix(&ds, &sel).unwrap().unwrap();

        assert_eq!(matrix.rows().len(), sel.levels().len());
        assert_eq!(matrix.towns().len(), sel.towns().len());
        for r in &rows {
            assert_eq!(matrix.value(r.level, &r.town), Some(r.percentage));
        }
    }

    #[test]
    fn rebuilding_from_unchanged_inputs_is_identical() {
        let ds = dataset();
        let sel = selection(&["Byblos", "Tyre"], &[Illiterate, University]);

        assert_eq!(
            comparison_table(&ds, &sel).unwrap(),
            comparison_table(&ds, &sel).unwrap()
        );
        assert_eq!(
            heatmap_matrix(&ds, &sel).unwrap(),
            heatmap_matrix(&ds, &sel).unwrap()
        );
    }

    #[test]
    fn value_range_spans_all_cells() {
        let sel = selection(&["Byblos", "Tyre"], &[Illiterate, University]);
        let matrix = heatmap_matrix(&dataset(), &sel).unwrap().unwrap();
        assert_eq!(matrix.value_range(), (5.0, 20.0));
    }

    #[test]
    fn selection_axes_keep_insertion_order_without_duplicates() {
        let mut sel = Selection::default();
        sel.toggle_town("Tyre");
        sel.toggle_town("Byblos");
        sel.toggle_level(University);
        sel.toggle_level(Illiterate);
        assert_eq!(sel.towns(), ["Tyre".to_string(), "Byblos".to_string()]);
        assert_eq!(sel.levels(), [University, Illiterate]);

        // A second toggle deselects.
        sel.toggle_town("Tyre");
        assert_eq!(sel.towns(), ["Byblos".to_string()]);
        sel.toggle_level(University);
        assert_eq!(sel.levels(), [Illiterate]);

        // Replacing keeps the first occurrence of any duplicate.
        sel.set_towns(
            ["Sidon", "Byblos", "Sidon"]
                .iter()
                .map(|t| t.to_string()),
        );
        assert_eq!(sel.towns(), ["Sidon".to_string(), "Byblos".to_string()]);
    }
}
