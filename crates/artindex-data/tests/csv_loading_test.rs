//! End-to-end loader tests against real CSV files on disk.

use artindex_data::{AuctionLoader, DataError, LoadOptions, Relabel};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = "\
date,category,technique,author,end_price,start_price
2000,Oil paintings,Oil on canvas,Konrad Mägi,1800,1500
2001,Oil paintings,Oil on canvas,Konrad Mägi,2400,
2003,Graphics,Etching,Eduard Wiiralt,350,300
2010,Graphics,Etching,Eduard Wiiralt,700,650
2021,Drawing,Drawing,Adamson-Eric,520,
";

fn write_sample() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_CSV.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_and_cleans_csv_file() {
    let file = write_sample();
    let loader = AuctionLoader::new();
    let options = LoadOptions {
        relabels: vec![Relabel::new("category", "Oil paintings", "Õlimaalid")],
        ..LoadOptions::default()
    }
    .year_range(2001, 2021)
    .require("category");

    let df = loader.load(file.path(), &options).expect("load");

    // 2000 row filtered out.
    assert_eq!(df.height(), 4);

    // Relabeled category present, original label gone.
    let categories = df.column("category").unwrap().str().unwrap();
    assert!(categories.into_iter().flatten().any(|c| c == "Õlimaalid"));

    // Null start prices backfilled from hammer price.
    let start = df.column("start_price").unwrap().f64().unwrap();
    assert_eq!(start.null_count(), 0);
}

#[test]
fn missing_required_column_is_reported() {
    let file = write_sample();
    let loader = AuctionLoader::new();
    let options = LoadOptions::default().require("source");

    let err = loader.load(file.path(), &options).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { column, .. } if column == "source"));
}

#[test]
fn missing_file_is_an_io_error() {
    let loader = AuctionLoader::new();
    let err = loader
        .load("/nonexistent/auctions.csv", &LoadOptions::default())
        .unwrap_err();
    // Polars surfaces the underlying IO failure.
    assert!(matches!(err, DataError::Polars(_) | DataError::Io(_)));
}
