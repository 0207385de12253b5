/// Data layer: core types, literal datasets, and filtering.
///
/// Architecture:
/// ```text
///   literal constants
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  efflux TimeSeries, diluted OD600 / OD420 tables
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   analysis    │  difference, undilute, reporter activity, z-scores
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  numeric-only pairs minus the exclusion list
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
