//! Aggregation Module
//! Grouped row counts and the precomputed drill-down bundle consumed by
//! ranking and hierarchy displays.

use polars::prelude::*;
use rayon::prelude::*;

use crate::data::has_column;

use super::selection::FilterError;

/// Column name used for the count in every aggregate output.
pub const COUNT_COLUMN: &str = "count";

/// Count rows grouped by one column, sorted by count descending.
pub fn count_by(df: &DataFrame, dimension: &str) -> Result<DataFrame, FilterError> {
    count_rollup(df, &[dimension])
}

/// Count rows grouped by two or more columns for drill-down hierarchies
/// (continent -> country, sport -> medal type), sorted by count descending.
pub fn count_rollup(df: &DataFrame, dimensions: &[&str]) -> Result<DataFrame, FilterError> {
    let group_cols: Vec<Expr> = dimensions.iter().map(|d| col(*d)).collect();

    let counts = df
        .clone()
        .lazy()
        .group_by(group_cols)
        .agg([len().alias(COUNT_COLUMN)])
        .sort(
            [COUNT_COLUMN],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    Ok(counts)
}

/// The aggregate bundle a dashboard page consumes: one ranking table per
/// filter dimension plus the two-level rollups behind drill-down charts.
#[derive(Debug, Clone)]
pub struct MedalSummary {
    pub by_country: DataFrame,
    pub by_sport: DataFrame,
    pub by_medal: DataFrame,
    pub by_continent: DataFrame,
    pub by_continent_country: DataFrame,
    pub by_sport_medal: DataFrame,
}

impl MedalSummary {
    /// Compute every aggregate over a (typically pre-filtered) medal table.
    ///
    /// Expects the loader's medal table shape: a `country_code` and
    /// `continent` column plus sport and medal columns under either of
    /// their known names. The six group-bys run in parallel.
    pub fn compute(medals: &DataFrame) -> Result<Self, FilterError> {
        let sport_col = if has_column(medals, "discipline") {
            "discipline"
        } else {
            "sport"
        };
        let medal_col = if has_column(medals, "medal_type") {
            "medal_type"
        } else {
            "medal"
        };

        let jobs: [&[&str]; 6] = [
            &["country_code"],
            &[sport_col],
            &[medal_col],
            &["continent"],
            &["continent", "country_code"],
            &[sport_col, medal_col],
        ];

        let results: Vec<DataFrame> = jobs
            .par_iter()
            .map(|dimensions| count_rollup(medals, dimensions))
            .collect::<Result<_, _>>()?;

        // par_iter preserves input order.
        let mut results = results.into_iter();
        Ok(Self {
            by_country: results.next().unwrap_or_default(),
            by_sport: results.next().unwrap_or_default(),
            by_medal: results.next().unwrap_or_default(),
            by_continent: results.next().unwrap_or_default(),
            by_continent_country: results.next().unwrap_or_default(),
            by_sport_medal: results.next().unwrap_or_default(),
        })
    }

    /// Total filtered medal rows, equal to the sum of `by_medal` counts.
    pub fn total_medals(&self) -> u64 {
        sum_counts(&self.by_medal)
    }
}

/// Sum the count column of an aggregate output.
pub(crate) fn sum_counts(counts: &DataFrame) -> u64 {
    counts
        .column(COUNT_COLUMN)
        .ok()
        .and_then(|col| col.cast(&DataType::UInt64).ok())
        .and_then(|col| col.u64().ok().map(|ca| ca.sum().unwrap_or(0)))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn medal_table() -> DataFrame {
        df!(
            "country_code" => ["USA", "USA", "USA", "FRA", "FRA", "KEN"],
            "discipline" => ["Judo", "Judo", "Swimming", "Judo", "Fencing", "Athletics"],
            "medal_type" => ["Gold Medal", "Silver Medal", "Gold Medal", "Gold Medal", "Bronze Medal", "Gold Medal"],
            "continent" => ["North America", "North America", "North America", "Europe", "Europe", "Africa"],
        )
        .unwrap()
    }

    fn counts_of(df: &DataFrame) -> Vec<u64> {
        let casted = df
            .column(COUNT_COLUMN)
            .unwrap()
            .cast(&DataType::UInt64)
            .unwrap();
        casted.u64().unwrap().into_iter().flatten().collect()
    }

    #[test]
    fn count_by_is_sorted_descending() {
        let counts = count_by(&medal_table(), "country_code").unwrap();
        assert_eq!(counts.height(), 3);

        let values = counts_of(&counts);
        assert_eq!(values, vec![3, 2, 1]);

        let top = counts.column("country_code").unwrap().get(0).unwrap();
        assert_eq!(top.to_string().trim_matches('"'), "USA");
    }

    #[test]
    fn rollup_groups_on_every_dimension() {
        let counts = count_rollup(&medal_table(), &["continent", "country_code"]).unwrap();
        // One row per (continent, country) pair present in the data.
        assert_eq!(counts.height(), 3);
        assert_eq!(sum_counts(&counts), 6);
    }

    #[test]
    fn medal_tally_sums_to_filtered_total() {
        let df = medal_table();
        let summary = MedalSummary::compute(&df).unwrap();
        assert_eq!(summary.total_medals(), df.height() as u64);

        let tally = counts_of(&summary.by_medal);
        assert_eq!(tally.iter().sum::<u64>(), df.height() as u64);
    }

    #[test]
    fn summary_covers_every_dimension() {
        let summary = MedalSummary::compute(&medal_table()).unwrap();
        assert_eq!(summary.by_country.height(), 3);
        assert_eq!(summary.by_sport.height(), 4);
        assert_eq!(summary.by_medal.height(), 3);
        assert_eq!(summary.by_continent.height(), 3);
        assert_eq!(summary.by_sport_medal.height(), 5);
    }

    #[test]
    fn empty_table_yields_empty_aggregates() {
        let df = medal_table().head(Some(0));
        let summary = MedalSummary::compute(&df).unwrap();
        assert_eq!(summary.by_country.height(), 0);
        assert_eq!(summary.total_medals(), 0);
    }
}
