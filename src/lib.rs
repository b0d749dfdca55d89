//! Medalboard - Olympic Games CSV loading, filtering & aggregation core
//!
//! The reusable core behind an Olympic analytics dashboard: load the fixed
//! set of Paris 2024 CSV tables, attach continent labels, cache the result
//! process-wide, then filter and aggregate for ranking and drill-down
//! displays. Presentation (charts, pages, styling) lives elsewhere and
//! consumes this crate's DataFrames.

pub mod data;
pub mod filter;

pub use data::{GamesData, LoaderError};
pub use filter::{FilterError, FilterSelection, MedalSummary};
