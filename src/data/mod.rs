/// Data layer: core types, loading, filtering, and selection reconciliation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Row>, cached column stats
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterState → plotted row indices (or NoUpdate)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ selection │  plot box-select indices → table rows (or NoUpdate)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod selection;
