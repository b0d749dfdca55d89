//! CSV Data Loader Module
//! Reads the fixed set of Olympic CSV files into Polars DataFrames,
//! normalizes column names and joins a continent label onto
//! country-bearing tables.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::continent::{continent_for_noc, UNKNOWN_CONTINENT};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing data file '{file}' in {}", dir.display())]
    MissingFile { file: String, dir: PathBuf },
}

/// The loaded Olympic dataset, one DataFrame per source CSV.
///
/// Tables with a `country_code` column carry an extra `continent` column
/// after loading. All tables are immutable once loaded.
#[derive(Debug, Clone)]
pub struct GamesData {
    pub athletes: DataFrame,
    pub medals: DataFrame,
    pub medals_total: DataFrame,
    pub events: DataFrame,
    pub nocs: DataFrame,
    pub schedules: DataFrame,
    pub venues: DataFrame,
    pub coaches: DataFrame,
    pub medalists: DataFrame,
}

impl GamesData {
    /// Load every table from `dir`.
    ///
    /// Single-shot batch load: a missing or malformed file fails the whole
    /// load, there is no partial-load recovery.
    pub fn load(dir: &Path) -> Result<Self, LoaderError> {
        info!("loading Olympic dataset from {}", dir.display());

        let athletes = read_table(dir, "athletes.csv")?;
        let medals = read_table(dir, "medals.csv")?;
        let mut medals_total = read_table(dir, "medals_total.csv")?;
        let events = read_table(dir, "events.csv")?;
        let mut nocs = read_table(dir, "nocs.csv")?;
        let schedules = read_table(dir, "schedules.csv")?;
        let venues = read_table(dir, "venues.csv")?;
        let coaches = read_table(dir, "coaches.csv")?;
        // The source dataset spells it with two Ls.
        let medalists = read_table(dir, "medallists.csv")?;

        // The NOC table calls its country code plain `code`.
        rename_if_present(&mut nocs, "code", "country_code")?;

        // medals_total ships medal columns with a " Medal" suffix.
        rename_if_present(&mut medals_total, "Gold Medal", "Gold")?;
        rename_if_present(&mut medals_total, "Silver Medal", "Silver")?;
        rename_if_present(&mut medals_total, "Bronze Medal", "Bronze")?;

        // The medal table marks gender as M/W while athletes use Male/Female.
        let medals = normalize_gender(medals)?;

        let data = Self {
            athletes: with_continent(athletes)?,
            medals: with_continent(medals)?,
            medals_total: with_continent(medals_total)?,
            events,
            nocs: with_continent(nocs)?,
            schedules,
            venues,
            coaches,
            medalists: with_continent(medalists)?,
        };

        debug!(
            "loaded {} athletes, {} medal rows, {} events",
            data.athletes.height(),
            data.medals.height(),
            data.events.height()
        );
        Ok(data)
    }

    /// All NOC country codes, sorted.
    pub fn country_codes(&self) -> Vec<String> {
        unique_strings(&self.nocs, "country_code")
    }

    /// All sports from the event table, sorted.
    pub fn sports(&self) -> Vec<String> {
        unique_strings(&self.events, "sport")
    }

    /// Medal type values as they appear in the medal table, sorted.
    pub fn medal_types(&self) -> Vec<String> {
        let column = if has_column(&self.medals, "medal_type") {
            "medal_type"
        } else {
            "medal"
        };
        unique_strings(&self.medals, column)
    }

    /// Continents present in the NOC table, sorted, `Unknown` excluded.
    pub fn continents(&self) -> Vec<String> {
        unique_strings(&self.nocs, "continent")
            .into_iter()
            .filter(|c| c != UNKNOWN_CONTINENT)
            .collect()
    }
}

fn read_table(dir: &Path, file: &str) -> Result<DataFrame, LoaderError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(LoaderError::MissingFile {
            file: file.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    // Lazy scan with schema inference, then collect
    let df = LazyCsvReader::new(path.as_path())
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    debug!("read {} ({} rows)", file, df.height());
    Ok(df)
}

/// Check whether a DataFrame has a column of the given name.
pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

fn rename_if_present(df: &mut DataFrame, from: &str, to: &str) -> Result<(), LoaderError> {
    if has_column(df, from) && !has_column(df, to) {
        df.rename(from, to.into())?;
    }
    Ok(())
}

/// Rewrite M/W gender markers to Male/Female so every table agrees.
fn normalize_gender(df: DataFrame) -> Result<DataFrame, LoaderError> {
    if !has_column(&df, "gender") || df.column("gender")?.dtype() != &DataType::String {
        return Ok(df);
    }

    let df = df
        .lazy()
        .with_column(
            when(col("gender").eq(lit("M")))
                .then(lit("Male"))
                .when(col("gender").eq(lit("W")))
                .then(lit("Female"))
                .otherwise(col("gender"))
                .alias("gender"),
        )
        .collect()?;
    Ok(df)
}

/// Attach a `continent` column derived from `country_code`.
///
/// Rows with a null or unmapped code get the explicit `Unknown` label;
/// no row is ever dropped. A table without a `country_code` column gets
/// `Unknown` throughout.
pub(crate) fn with_continent(mut df: DataFrame) -> Result<DataFrame, LoaderError> {
    let labels: Vec<&str> = if has_column(&df, "country_code") {
        let codes = df.column("country_code")?.cast(&DataType::String)?;
        let codes = codes.str()?;
        codes
            .into_iter()
            .map(|code| code.map_or(UNKNOWN_CONTINENT, continent_for_noc))
            .collect()
    } else {
        vec![UNKNOWN_CONTINENT; df.height()]
    };

    df.with_column(Column::new("continent".into(), labels))?;
    Ok(df)
}

/// Get sorted unique non-null values of a column as strings.
pub(crate) fn unique_strings(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .ok()
        .and_then(|col| col.unique().ok())
        .map(|unique| {
            let series = unique.as_materialized_series();
            let mut values: Vec<String> = series
                .iter()
                .filter_map(|v| {
                    if v.is_null() {
                        None
                    } else {
                        Some(v.to_string().trim_matches('"').to_string())
                    }
                })
                .collect();
            values.sort();
            values
        })
        .unwrap_or_default()
}
