/// Data layer: core types, loading, and table building.
///
/// Architecture:
/// ```text
///  educational_levels.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<TownRecord>, town index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  Selection → comparison rows / heatmap matrix
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod table;
