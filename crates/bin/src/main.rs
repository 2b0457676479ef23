//! Art index CLI binary.
//!
//! Command-line interface over the art auction index: growth tables,
//! historical series, overbid summaries and report assembly.

use artindex::index::overbid::{OVERBID_COLUMN, TOTAL_SALES_COLUMN};
use artindex::index::{
    AggregateMode, GroupGrowth, GrowthCalculator, GrowthRow, available_metrics, overbid_summary,
    with_overbid,
};
use artindex::output::{Exporter, ExportFormat, ReportBuilder};
use artindex::data::LoadOptions;
use artindex::{IndexService, default_relabels};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "artindex")]
#[command(about = "Art index: growth analytics over public auction sales", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank groups by annualized growth rate
    Growth {
        /// Auction CSV file
        #[arg(long)]
        data: PathBuf,

        /// Column to group by (category, author, technique, source)
        #[arg(long, default_value = "category")]
        group: String,

        /// Rank by summed yearly volume instead of mean price
        #[arg(long)]
        volume: bool,

        /// Only rank the N groups with the largest turnover
        #[arg(long)]
        top: Option<usize>,

        /// First auction year to include
        #[arg(long, default_value = "2001")]
        min_year: i32,

        /// Last auction year to include
        #[arg(long, default_value = "2021")]
        max_year: i32,

        /// Normalize raw English labels to the canonical catalog
        #[arg(long)]
        normalize: bool,

        /// Output format (text, csv, json, pretty-json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Per-year average price and volume series
    Series {
        /// Auction CSV file
        #[arg(long)]
        data: PathBuf,

        /// First auction year to include
        #[arg(long, default_value = "2001")]
        min_year: i32,

        /// Last auction year to include
        #[arg(long, default_value = "2021")]
        max_year: i32,

        /// Output format (text, csv, json, pretty-json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Overbid summary by group columns
    Overbid {
        /// Auction CSV file
        #[arg(long)]
        data: PathBuf,

        /// Columns to group by
        #[arg(long, value_delimiter = ',', default_value = "author,technique,category")]
        by: Vec<String>,

        /// Number of rows to show
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// List available metrics
    Metrics,

    /// Assemble a full index report as JSON
    Report {
        /// Auction CSV file
        #[arg(long)]
        data: PathBuf,

        /// First auction year to include
        #[arg(long, default_value = "2001")]
        min_year: i32,

        /// Last auction year to include
        #[arg(long, default_value = "2021")]
        max_year: i32,

        /// How many top authors to rank
        #[arg(long, default_value = "10")]
        top_authors: usize,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Growth {
            data,
            group,
            volume,
            top,
            min_year,
            max_year,
            normalize,
            format,
            output,
        } => {
            let options = load_options(min_year, max_year, normalize).require(group.clone());
            let service = IndexService::from_csv(&data, &options)?;

            let groups = match top {
                Some(n) => service.top(&group, n)?,
                None => distinct_groups(service.frame(), &group)?,
            };
            let mode = if volume {
                AggregateMode::SumVolume
            } else {
                AggregateMode::MeanPrice
            };

            let detailed = compute_with_progress(service.frame(), &group, &groups, mode)?;
            emit_growth(&detailed, &group, &format, output.as_deref())?;
        }
        Commands::Series {
            data,
            min_year,
            max_year,
            format,
            output,
        } => {
            let options = load_options(min_year, max_year, false);
            let service = IndexService::from_csv(&data, &options)?;
            let series = service.historical()?;

            if format == "text" {
                println!("{:<6} {:>14} {:>14}", "Year", "Avg price", "Volume");
                for stat in &series {
                    println!(
                        "{:<6} {:>14.2} {:>14.2}",
                        stat.year, stat.avg_price, stat.volume
                    );
                }
            } else {
                emit(&series, &format, output.as_deref())?;
            }
        }
        Commands::Overbid { data, by, top } => {
            let options = LoadOptions::default();
            let service = IndexService::from_csv(&data, &options)?;
            let enriched = with_overbid(service.frame())?;
            let columns: Vec<&str> = by.iter().map(String::as_str).collect();
            let summary = overbid_summary(&enriched, &columns)?;
            print_overbid(&summary, &columns, top)?;
        }
        Commands::Metrics => {
            println!("{:<20} {:<10} {}", "Metric", "Category", "Description");
            for metric in available_metrics() {
                println!(
                    "{:<20} {:<10} {}",
                    metric.name,
                    format!("{:?}", metric.category),
                    metric.description
                );
            }
        }
        Commands::Report {
            data,
            min_year,
            max_year,
            top_authors,
            output,
        } => {
            let options = load_options(min_year, max_year, true);
            let mut service = IndexService::from_csv(&data, &options)?;

            let categories = distinct_groups(service.frame(), "category")?;
            let authors = service.top("author", top_authors)?;

            let series = service.historical()?;
            let category_price =
                service.growth_table("category", &categories, AggregateMode::MeanPrice)?;
            let category_volume =
                service.growth_table("category", &categories, AggregateMode::SumVolume)?;
            let author_price =
                service.growth_table("author", &authors, AggregateMode::MeanPrice)?;
            let author_volume =
                service.growth_table("author", &authors, AggregateMode::SumVolume)?;

            let report = ReportBuilder::new()
                .dataset(data.display().to_string())
                .years(min_year, max_year)
                .contents(serde_json::json!({
                    "historical_series": series,
                    "category_price_growth": category_price,
                    "category_volume_growth": category_volume,
                    "top_author_price_growth": author_price,
                    "top_author_volume_growth": author_volume,
                }))
                .build()?;

            let json = report.to_json()?;
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}

fn load_options(min_year: i32, max_year: i32, normalize: bool) -> LoadOptions {
    LoadOptions {
        relabels: if normalize { default_relabels() } else { Vec::new() },
        drop_null_authors: true,
        ..LoadOptions::default()
    }
    .year_range(min_year, max_year)
}

/// Distinct non-null labels of `column`, in order of first appearance.
fn distinct_groups(df: &DataFrame, column: &str) -> PolarsResult<Vec<String>> {
    let distinct = df
        .clone()
        .lazy()
        .select([col(column).drop_nulls().unique_stable()])
        .collect()?;
    Ok(distinct
        .column(column)?
        .str()?
        .into_iter()
        .flatten()
        .map(String::from)
        .collect())
}

/// Compute per-group growth with a progress bar over the group list.
fn compute_with_progress(
    df: &DataFrame,
    group_column: &str,
    groups: &[String],
    mode: AggregateMode,
) -> Result<Vec<GroupGrowth>, Box<dyn std::error::Error>> {
    let calc = GrowthCalculator::with_mode(mode);
    let pb = ProgressBar::new(groups.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Computing growth");

    let mut rows = Vec::new();
    for group in groups {
        rows.extend(calc.compute_detailed(df, group_column, std::slice::from_ref(group))?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    rows.sort_by(|a, b| {
        b.annual_growth_pct
            .partial_cmp(&a.annual_growth_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(rows)
}

fn emit_growth(
    detailed: &[GroupGrowth],
    group_column: &str,
    format: &str,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if format == "text" {
        println!(
            "{:<30} {:>16} {:>18}",
            capitalize(group_column),
            "Annual growth (%)",
            "Total growth (%)"
        );
        for row in detailed {
            println!(
                "{:<30} {:>16.4} {:>18.4}",
                row.group, row.annual_growth_pct, row.total_growth_pct
            );
        }
        return Ok(());
    }

    let rows: Vec<GrowthRow> = detailed
        .iter()
        .map(|g| GrowthRow {
            group: g.group.clone(),
            annual_growth_pct: g.annual_growth_pct,
        })
        .collect();
    emit(&rows, format, output)
}

fn emit<T>(
    rows: &Vec<T>,
    format: &str,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>>
where
    Vec<T>: Exporter,
{
    let format: ExportFormat = format.parse()?;
    match output {
        Some(path) => rows.export_to_file(path, format)?,
        None => print!("{}", rows.export_to_string(format)?),
    }
    Ok(())
}

fn print_overbid(summary: &DataFrame, columns: &[&str], top: usize) -> PolarsResult<()> {
    let shown = summary.head(Some(top));

    println!(
        "{:<50} {:>14} {:>14}",
        columns.join(" / "),
        "Total sales",
        "Overbid (%)"
    );

    let mut labels: Vec<String> = vec![String::new(); shown.height()];
    for column in columns {
        let values = shown.column(column)?.str()?;
        for (i, value) in values.into_iter().enumerate() {
            if !labels[i].is_empty() {
                labels[i].push_str(" / ");
            }
            labels[i].push_str(value.unwrap_or("-"));
        }
    }

    let totals = shown.column(TOTAL_SALES_COLUMN)?.f64()?;
    let overbids = shown.column(OVERBID_COLUMN)?.f64()?;
    for (i, label) in labels.iter().enumerate() {
        let total = totals.get(i).unwrap_or(0.0);
        match overbids.get(i) {
            Some(overbid) => println!("{:<50} {:>14.2} {:>14.2}", label, total, overbid),
            None => println!("{:<50} {:>14.2} {:>14}", label, total, "-"),
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
