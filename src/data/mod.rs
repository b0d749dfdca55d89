//! Data module - CSV loading, continent mapping and the process-wide cache

mod continent;
mod loader;
mod store;

pub use continent::{continent_for_noc, CONTINENTS, UNKNOWN_CONTINENT};
pub use loader::{GamesData, LoaderError};
pub use store::cached;

pub(crate) use loader::has_column;
