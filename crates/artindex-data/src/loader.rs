//! CSV loading and load-time cleanup for auction records.
//!
//! Auction exports arrive as one CSV per source gallery with at least a
//! `date` column (integer auction year) and an `end_price` column (hammer
//! price). Cleanup is applied once at load time; downstream analytics
//! treat the resulting frame as read-only.

use crate::error::{DataError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column holding the auction year.
pub const DATE_COLUMN: &str = "date";

/// Column holding the hammer price.
pub const END_PRICE_COLUMN: &str = "end_price";

/// Column holding the opening price, absent for some galleries.
pub const START_PRICE_COLUMN: &str = "start_price";

/// Column holding the creation year of the work.
pub const CREATION_YEAR_COLUMN: &str = "year";

/// Derived column: auction year minus creation year.
pub const ARTWORK_AGE_COLUMN: &str = "artwork_age";

/// A single value substitution applied to a text column at load time.
///
/// Used to normalize gallery-specific labels to the canonical catalog,
/// e.g. mapping `"Oil paintings"` to `"Õlimaalid"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relabel {
    /// Column the substitution applies to.
    pub column: String,
    /// Value to replace.
    pub from: String,
    /// Replacement value.
    pub to: String,
}

impl Relabel {
    /// Create a new relabel rule.
    pub fn new(
        column: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Options controlling load-time cleanup.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Keep only rows with `date >= min_year`.
    pub min_year: Option<i32>,

    /// Keep only rows with `date <= max_year`.
    pub max_year: Option<i32>,

    /// Label substitutions applied in order.
    pub relabels: Vec<Relabel>,

    /// Drop rows whose `author` is null.
    pub drop_null_authors: bool,

    /// Extra columns that must be present, e.g. the grouping column a
    /// caller intends to rank by.
    pub required_columns: Vec<String>,
}

impl LoadOptions {
    /// Restrict the loaded rows to an inclusive auction-year range.
    pub const fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = Some(min_year);
        self.max_year = Some(max_year);
        self
    }

    /// Require `column` to be present in the source file.
    pub fn require(mut self, column: impl Into<String>) -> Self {
        self.required_columns.push(column.into());
        self
    }
}

/// Loads auction CSV files into cleaned polars frames.
#[derive(Debug, Default)]
pub struct AuctionLoader;

impl AuctionLoader {
    /// Create a new loader.
    pub const fn new() -> Self {
        Self
    }

    /// Read a CSV file without any cleanup.
    pub fn read_csv<P: AsRef<Path>>(&self, path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(1024))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()?;
        Ok(df)
    }

    /// Load auction records and apply cleanup per `options`.
    ///
    /// Validates the schema, filters to the requested year range, applies
    /// label substitutions, backfills `start_price` from `end_price`, and
    /// derives `artwork_age` when a creation-year column is present.
    pub fn load<P: AsRef<Path>>(&self, path: P, options: &LoadOptions) -> Result<DataFrame> {
        let source_name = path.as_ref().display().to_string();
        let df = self.read_csv(path)?;
        self.clean(df, options, &source_name)
    }

    /// Apply cleanup to an already-loaded frame.
    pub fn clean(
        &self,
        df: DataFrame,
        options: &LoadOptions,
        source_name: &str,
    ) -> Result<DataFrame> {
        if let (Some(start), Some(end)) = (options.min_year, options.max_year) {
            if start > end {
                return Err(DataError::InvalidYearRange { start, end });
            }
        }

        for column in [DATE_COLUMN, END_PRICE_COLUMN]
            .into_iter()
            .chain(options.required_columns.iter().map(String::as_str))
        {
            if df.column(column).is_err() {
                return Err(DataError::MissingColumn {
                    column: column.to_string(),
                    source_name: source_name.to_string(),
                });
            }
        }

        let has_start_price = df.column(START_PRICE_COLUMN).is_ok();
        let has_creation_year = df.column(CREATION_YEAR_COLUMN).is_ok();
        let has_author = df.column("author").is_ok();

        let mut lf = df
            .lazy()
            .with_column(col(DATE_COLUMN).cast(DataType::Int32))
            .with_column(col(END_PRICE_COLUMN).cast(DataType::Float64));

        if let Some(min_year) = options.min_year {
            lf = lf.filter(col(DATE_COLUMN).gt_eq(lit(min_year)));
        }
        if let Some(max_year) = options.max_year {
            lf = lf.filter(col(DATE_COLUMN).lt_eq(lit(max_year)));
        }

        for rule in &options.relabels {
            lf = lf.with_column(
                when(col(&rule.column).eq(lit(rule.from.clone())))
                    .then(lit(rule.to.clone()))
                    .otherwise(col(&rule.column))
                    .alias(&rule.column),
            );
        }

        if has_start_price {
            lf = lf.with_column(
                col(START_PRICE_COLUMN)
                    .cast(DataType::Float64)
                    .fill_null(col(END_PRICE_COLUMN)),
            );
        }

        if has_creation_year {
            lf = lf.with_column(
                (col(DATE_COLUMN) - col(CREATION_YEAR_COLUMN).cast(DataType::Int32))
                    .alias(ARTWORK_AGE_COLUMN),
            );
        }

        if options.drop_null_authors && has_author {
            lf = lf.filter(col("author").is_not_null());
        }

        let out = lf.sort([DATE_COLUMN], Default::default()).collect()?;
        if out.height() == 0 {
            return Err(DataError::EmptyData(source_name.to_string()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df!(
            DATE_COLUMN => [1999i32, 2001, 2005, 2010, 2021],
            "category" => ["Oil paintings", "Oil paintings", "Graphics", "Drawing", "Graphics"],
            "author" => [Some("Konrad Mägi"), Some("Konrad Mägi"), None, Some("Eduard Wiiralt"), Some("Eduard Wiiralt")],
            END_PRICE_COLUMN => [1200.0, 2500.0, 300.0, 450.0, 900.0],
            START_PRICE_COLUMN => [Some(1000.0), None, Some(250.0), None, Some(700.0)],
            CREATION_YEAR_COLUMN => [1917i32, 1920, 1935, 1938, 1939],
        )
        .unwrap()
    }

    #[test]
    fn test_year_range_filter() {
        let loader = AuctionLoader::new();
        let options = LoadOptions::default().year_range(2001, 2021);
        let out = loader.clean(sample_frame(), &options, "test").unwrap();

        assert_eq!(out.height(), 4);
        let years = out.column(DATE_COLUMN).unwrap().i32().unwrap();
        assert!(years.into_no_null_iter().all(|y| (2001..=2021).contains(&y)));
    }

    #[test]
    fn test_invalid_year_range() {
        let loader = AuctionLoader::new();
        let options = LoadOptions::default().year_range(2021, 2001);
        let err = loader.clean(sample_frame(), &options, "test").unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidYearRange { start: 2021, end: 2001 }
        ));
    }

    #[test]
    fn test_missing_column() {
        let loader = AuctionLoader::new();
        let options = LoadOptions::default().require("technique");
        let err = loader.clean(sample_frame(), &options, "test").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column, .. } if column == "technique"));
    }

    #[test]
    fn test_relabel() {
        let loader = AuctionLoader::new();
        let options = LoadOptions {
            relabels: vec![Relabel::new("category", "Oil paintings", "Õlimaalid")],
            ..Default::default()
        };
        let out = loader.clean(sample_frame(), &options, "test").unwrap();
        let categories = out.column("category").unwrap().str().unwrap();

        assert!(categories.into_iter().flatten().any(|c| c == "Õlimaalid"));
        assert!(categories.into_iter().flatten().all(|c| c != "Oil paintings"));
    }

    #[test]
    fn test_start_price_backfill() {
        let loader = AuctionLoader::new();
        let out = loader
            .clean(sample_frame(), &LoadOptions::default(), "test")
            .unwrap();
        let start = out.column(START_PRICE_COLUMN).unwrap().f64().unwrap();

        assert_eq!(start.null_count(), 0);
        // 2001 row had no start price; backfilled from its hammer price.
        let frame_2001 = out
            .clone()
            .lazy()
            .filter(col(DATE_COLUMN).eq(lit(2001)))
            .collect()
            .unwrap();
        let filled = frame_2001.column(START_PRICE_COLUMN).unwrap().f64().unwrap();
        assert_eq!(filled.get(0), Some(2500.0));
    }

    #[test]
    fn test_artwork_age_derived() {
        let loader = AuctionLoader::new();
        let out = loader
            .clean(sample_frame(), &LoadOptions::default(), "test")
            .unwrap();
        let ages = out.column(ARTWORK_AGE_COLUMN).unwrap().i32().unwrap();
        // First row after date sort: 1999 auction of a 1917 work.
        assert_eq!(ages.get(0), Some(82));
    }

    #[test]
    fn test_drop_null_authors() {
        let loader = AuctionLoader::new();
        let options = LoadOptions {
            drop_null_authors: true,
            ..Default::default()
        };
        let out = loader.clean(sample_frame(), &options, "test").unwrap();
        assert_eq!(out.height(), 4);
        assert_eq!(out.column("author").unwrap().null_count(), 0);
    }

    #[test]
    fn test_empty_after_filter() {
        let loader = AuctionLoader::new();
        let options = LoadOptions::default().year_range(1950, 1960);
        let err = loader.clean(sample_frame(), &options, "test").unwrap_err();
        assert!(matches!(err, DataError::EmptyData(_)));
    }
}
