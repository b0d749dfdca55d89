//! Filter Selection Module
//! Transient, user-driven multi-select constraints applied to any table.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::has_column;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Column names a dimension may use, probed in order.
///
/// The medal table calls its sport column `discipline` while the event
/// table calls it `sport`; the medal column is `medal_type` in the medal
/// table and `medal` in the medalist table.
const COUNTRY_COLUMNS: &[&str] = &["country_code"];
const SPORT_COLUMNS: &[&str] = &["sport", "discipline"];
const MEDAL_COLUMNS: &[&str] = &["medal_type", "medal"];
const GENDER_COLUMNS: &[&str] = &["gender"];
const CONTINENT_COLUMNS: &[&str] = &["continent"];

/// A user's multi-select filter state.
///
/// Dimensions combine with AND; values within a dimension combine with OR.
/// An empty dimension places no constraint, so the default selection is
/// the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub countries: Vec<String>,
    pub sports: Vec<String>,
    pub medals: Vec<String>,
    pub genders: Vec<String>,
    pub continents: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.sports.is_empty()
            && self.medals.is_empty()
            && self.genders.is_empty()
            && self.continents.is_empty()
    }

    /// Apply the selection to a table, returning the matching subset.
    ///
    /// A dimension whose column is absent from the table is skipped, so
    /// the same selection can be applied to every loaded table. An empty
    /// result set is a valid outcome, not an error. Row order is not
    /// guaranteed.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame, FilterError> {
        if self.is_empty() {
            return Ok(df.clone());
        }

        let dimensions: [(&[String], &[&str]); 5] = [
            (&self.countries, COUNTRY_COLUMNS),
            (&self.sports, SPORT_COLUMNS),
            (&self.medals, MEDAL_COLUMNS),
            (&self.genders, GENDER_COLUMNS),
            (&self.continents, CONTINENT_COLUMNS),
        ];

        let mut lf = df.clone().lazy();
        for (values, candidates) in dimensions {
            if values.is_empty() {
                continue;
            }
            let Some(column) = candidates.iter().find(|c| has_column(df, c)) else {
                continue;
            };
            let wanted = Series::new("".into(), values.to_vec());
            lf = lf.filter(col(*column).is_in(lit(wanted)));
        }

        Ok(lf.collect()?)
    }
}
