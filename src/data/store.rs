//! Process-Wide Data Store Module
//! Lazily-initialized, read-only singleton over the CSV loader.

use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use super::loader::{GamesData, LoaderError};

static CACHE: OnceLock<GamesData> = OnceLock::new();

/// Load the dataset once per process and hand out shared references.
///
/// The first successful load is cached for the process lifetime; later
/// calls return the cached tables without touching disk, regardless of
/// the directory passed. There is no invalidation short of a process
/// restart. A failed load caches nothing, so the next call retries.
pub fn cached(dir: &Path) -> Result<&'static GamesData, LoaderError> {
    if let Some(data) = CACHE.get() {
        debug!("dataset cache hit");
        return Ok(data);
    }

    let data = GamesData::load(dir)?;
    // Two racing loaders both read disk; the first to publish wins.
    Ok(CACHE.get_or_init(|| data))
}
