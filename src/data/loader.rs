use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, EducationLevel, TownRecord, TOWN_COLUMN};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons the dataset can be unavailable.
///
/// Any of these at startup leaves the app on the error screen instead of the
/// selectors: there is nothing to select from.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset")]
    Malformed(#[from] csv::Error),

    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("no usable rows after dropping incomplete ones")]
    Empty,
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Serde image of one CSV row.
///
/// Every field is an `Option` so that an empty cell deserializes to `None`
/// instead of failing the whole file; a non-empty cell that does not parse as
/// a number is still a hard error. Columns are matched by header name, so
/// their order in the file does not matter.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Town")]
    town: Option<String>,
    #[serde(rename = "PercentageofEducationlevelofresidents-illeterate")]
    illiterate: Option<f64>,
    #[serde(rename = "PercentageofSchooldropout")]
    school_dropout: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-university")]
    university: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-secondary")]
    secondary: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-intermediate")]
    intermediate: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-vocational")]
    vocational: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-elementary")]
    elementary: Option<f64>,
    #[serde(rename = "PercentageofEducationlevelofresidents-highereducation")]
    higher_education: Option<f64>,
}

impl RawRecord {
    /// Promote to a full record, or `None` when any field is missing.
    fn complete(self) -> Option<TownRecord> {
        Some(TownRecord {
            town: self.town?,
            illiterate: self.illiterate?,
            school_dropout: self.school_dropout?,
            university: self.university?,
            secondary: self.secondary?,
            intermediate: self.intermediate?,
            vocational: self.vocational?,
            elementary: self.elementary?,
            higher_education: self.higher_education?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the educational-attainment table from a CSV file.
///
/// Cleaning mirrors a dataframe `dropna()`: a row with a missing value in any
/// required column is discarded whole, and the drop is logged. The header is
/// validated up front so a renamed column fails with its name rather than as
/// an empty dataset.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let mut required: Vec<&'static str> = vec![TOWN_COLUMN];
    required.extend(EducationLevel::ALL.iter().map(|l| l.column()));
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records: Vec<TownRecord> = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize() {
        let raw: RawRecord = row?;
        match raw.complete() {
            Some(rec) => records.push(rec),
            None => dropped += 1,
        }
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    if dropped > 0 {
        warn!("dropped {dropped} incomplete rows from {}", path.display());
    }

    let dataset = Dataset::from_records(records);
    let duplicates = dataset.len() - dataset.towns().len();
    if duplicates > 0 {
        warn!(
            "{duplicates} duplicate town names in {}; lookups use the first match",
            path.display()
        );
    }

    info!(
        "loaded {} towns from {} ({} rows kept)",
        dataset.towns().len(),
        path.display(),
        dataset.len()
    );
    Ok(dataset)
}
