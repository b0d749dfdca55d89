//! Filter module - multi-select filtering and drill-down aggregation

mod aggregate;
mod selection;

pub use aggregate::{count_by, count_rollup, MedalSummary};
pub use selection::{FilterError, FilterSelection};
