//! Medalboard CLI
//!
//! Loads the Olympic CSV dataset, applies the selected filters and prints
//! KPI and ranking tables to the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::DataFrame;
use tracing_subscriber::EnvFilter;

use medalboard::{data, FilterSelection, MedalSummary};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing the Olympic CSV files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Filter by NOC country code (repeatable)
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Filter by sport (repeatable)
    #[arg(long = "sport")]
    sports: Vec<String>,

    /// Filter by medal type, e.g. "Gold Medal" (repeatable)
    #[arg(long = "medal")]
    medals: Vec<String>,

    /// Filter by continent (repeatable)
    #[arg(long = "continent")]
    continents: Vec<String>,

    /// Filter by gender (repeatable)
    #[arg(long = "gender")]
    genders: Vec<String>,

    /// Number of rows shown in ranking tables
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("medalboard=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medalboard=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let games = data::cached(&cli.data_dir).context("loading Olympic dataset")?;

    let selection = FilterSelection {
        countries: cli.countries,
        sports: cli.sports,
        medals: cli.medals,
        genders: cli.genders,
        continents: cli.continents,
    };

    let athletes = selection.apply(&games.athletes)?;
    let medals = selection.apply(&games.medals)?;

    println!(
        "Athletes: {}   Medal rows: {}   Countries: {}   Sports: {}",
        athletes.height(),
        medals.height(),
        games.country_codes().len(),
        games.sports().len(),
    );

    let summary = MedalSummary::compute(&medals)?;
    print_counts("Medal tally", &summary.by_medal, usize::MAX);
    print_counts("Top countries", &summary.by_country, cli.top);
    print_counts("Top sports", &summary.by_sport, cli.top);
    print_counts("Medals by continent", &summary.by_continent, usize::MAX);

    Ok(())
}

/// Print an aggregate DataFrame as a terminal table.
fn print_counts(title: &str, counts: &DataFrame, limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(counts.get_column_names().iter().map(|c| c.to_string()));

    let columns = counts.get_columns();
    let rows = counts.height().min(limit);
    for i in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                column
                    .get(i)
                    .map(|v| v.to_string().trim_matches('"').to_string())
                    .unwrap_or_default()
            })
            .collect();
        table.add_row(cells);
    }

    println!("\n{title}");
    println!("{table}");
}
