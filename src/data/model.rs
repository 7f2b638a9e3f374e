use std::fmt;

// ---------------------------------------------------------------------------
// EducationLevel – the fixed catalog of tracked education categories
// ---------------------------------------------------------------------------

/// One of the eight tracked education categories.
///
/// The variant order is the display order used by every level selector and
/// matches the order the categories are listed in the source dataset's
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    Illiterate,
    SchoolDropout,
    University,
    Secondary,
    Intermediate,
    Vocational,
    Elementary,
    HigherEducation,
}

impl EducationLevel {
    /// All levels, in display order.
    pub const ALL: [EducationLevel; 8] = [
        EducationLevel::Illiterate,
        EducationLevel::SchoolDropout,
        EducationLevel::University,
        EducationLevel::Secondary,
        EducationLevel::Intermediate,
        EducationLevel::Vocational,
        EducationLevel::Elementary,
        EducationLevel::HigherEducation,
    ];

    /// Human-readable label shown in selectors, legends and axis ticks.
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Illiterate => "Illiterate",
            EducationLevel::SchoolDropout => "School Dropout",
            EducationLevel::University => "University",
            EducationLevel::Secondary => "Secondary",
            EducationLevel::Intermediate => "Intermediate",
            EducationLevel::Vocational => "Vocational",
            EducationLevel::Elementary => "Elementary",
            EducationLevel::HigherEducation => "Higher Education",
        }
    }

    /// Name of the column holding this level in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            EducationLevel::Illiterate => {
                "PercentageofEducationlevelofresidents-illeterate"
            }
            EducationLevel::SchoolDropout => "PercentageofSchooldropout",
            EducationLevel::University => {
                "PercentageofEducationlevelofresidents-university"
            }
            EducationLevel::Secondary => {
                "PercentageofEducationlevelofresidents-secondary"
            }
            EducationLevel::Intermediate => {
                "PercentageofEducationlevelofresidents-intermediate"
            }
            EducationLevel::Vocational => {
                "PercentageofEducationlevelofresidents-vocational"
            }
            EducationLevel::Elementary => {
                "PercentageofEducationlevelofresidents-elementary"
            }
            EducationLevel::HigherEducation => {
                "PercentageofEducationlevelofresidents-highereducation"
            }
        }
    }

    /// Read this level's percentage out of a record.
    pub fn percentage_of(self, record: &TownRecord) -> f64 {
        match self {
            EducationLevel::Illiterate => record.illiterate,
            EducationLevel::SchoolDropout => record.school_dropout,
            EducationLevel::University => record.university,
            EducationLevel::Secondary => record.secondary,
            EducationLevel::Intermediate => record.intermediate,
            EducationLevel::Vocational => record.vocational,
            EducationLevel::Elementary => record.elementary,
            EducationLevel::HigherEducation => record.higher_education,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TownRecord – one row of the source table
// ---------------------------------------------------------------------------

/// Name of the town-key column in the source CSV.
pub const TOWN_COLUMN: &str = "Town";

/// Educational-attainment percentages for a single town.
///
/// Every value is a percentage of residents in `[0, 100]`. The eight
/// categories are related but do not have to sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct TownRecord {
    pub town: String,
    pub illiterate: f64,
    pub school_dropout: f64,
    pub university: f64,
    pub secondary: f64,
    pub intermediate: f64,
    pub vocational: f64,
    pub elementary: f64,
    pub higher_education: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The cleaned dataset, in source-file order, with the distinct town names
/// precomputed for the selector widgets.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TownRecord>,
    towns: Vec<String>,
}

impl Dataset {
    /// Build the town index from loaded records.
    pub fn from_records(records: Vec<TownRecord>) -> Self {
        let mut towns: Vec<String> = Vec::new();
        for rec in &records {
            if !towns.iter().any(|t| t == &rec.town) {
                towns.push(rec.town.clone());
            }
        }
        Dataset { records, towns }
    }

    /// Distinct town names in first-occurrence order.
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    /// Look up the record for a town. When a town name is duplicated in the
    /// source, the first matching record wins.
    pub fn get(&self, town: &str) -> Option<&TownRecord> {
        self.records.iter().find(|r| r.town == town)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(town: &str, base: f64) -> TownRecord {
        TownRecord {
            town: town.to_string(),
            illiterate: base,
            school_dropout: base + 1.0,
            university: base + 2.0,
            secondary: base + 3.0,
            intermediate: base + 4.0,
            vocational: base + 5.0,
            elementary: base + 6.0,
            higher_education: base + 7.0,
        }
    }

    #[test]
    fn catalog_lists_all_eight_levels_in_display_order() {
        let labels: Vec<&str> = EducationLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            [
                "Illiterate",
                "School Dropout",
                "University",
                "Secondary",
                "Intermediate",
                "Vocational",
                "Elementary",
                "Higher Education",
            ]
        );
    }

    #[test]
    fn catalog_columns_are_distinct() {
        let mut columns: Vec<&str> = EducationLevel::ALL.iter().map(|l| l.column()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), EducationLevel::ALL.len());
    }

    #[test]
    fn each_level_reads_its_own_field() {
        let rec = record("Byblos", 10.0);
        let values: Vec<f64> = EducationLevel::ALL
            .iter()
            .map(|l| l.percentage_of(&rec))
            .collect();
        assert_eq!(values, [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
    }

    #[test]
    fn town_index_keeps_first_occurrence_order() {
        let ds = Dataset::from_records(vec![
            record("Tyre", 1.0),
            record("Byblos", 2.0),
            record("Tyre", 3.0),
        ]);
        assert_eq!(ds.towns(), ["Tyre".to_string(), "Byblos".to_string()]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn lookup_returns_first_match_for_duplicate_towns() {
        let ds = Dataset::from_records(vec![record("Tyre", 1.0), record("Tyre", 9.0)]);
        let rec = ds.get("Tyre").unwrap();
        assert_eq!(rec.illiterate, 1.0);
        assert!(ds.get("Sidon").is_none());
    }
}
