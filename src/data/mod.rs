/// Data layer: core types, loading, and cohort grouping.
///
/// Architecture:
/// ```text
///  inflammation-04.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  DataFolder::load → parse v4 lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  ordered Vec<Patient>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cohort   │  group by stratification label → mean series
///   └──────────┘
/// ```

pub mod cohort;
pub mod loader;
pub mod model;
