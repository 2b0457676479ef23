//! Overbid statistics.
//!
//! The overbid of a sale is how far the hammer price exceeded the
//! opening price, in percent. Grouped totals of sales and mean overbid
//! drive the category/technique/author breakdown views.

use crate::error::{IndexError, Result};
use crate::{END_PRICE_COLUMN, START_PRICE_COLUMN};
use polars::prelude::*;

/// Name of the derived overbid column.
pub const OVERBID_COLUMN: &str = "overbid_pct";

/// Name of the summed-sales column in [`overbid_summary`] output.
pub const TOTAL_SALES_COLUMN: &str = "total_sales";

/// Add an `overbid_pct` column to the frame.
///
/// Null opening prices fall back to the hammer price (overbid 0). A zero
/// opening price yields a null overbid instead of a division error.
pub fn with_overbid(df: &DataFrame) -> Result<DataFrame> {
    if df.column(END_PRICE_COLUMN).is_err() {
        return Err(IndexError::missing(END_PRICE_COLUMN));
    }

    let start = if df.column(START_PRICE_COLUMN).is_ok() {
        col(START_PRICE_COLUMN)
            .cast(DataType::Float64)
            .fill_null(col(END_PRICE_COLUMN))
    } else {
        col(END_PRICE_COLUMN)
    };

    let out = df
        .clone()
        .lazy()
        .with_column(
            when(start.clone().gt(lit(0.0)))
                .then((col(END_PRICE_COLUMN) - start.clone()) / start * lit(100.0))
                .otherwise(lit(NULL))
                .alias(OVERBID_COLUMN),
        )
        .collect()?;
    Ok(out)
}

/// Grouped overbid summary: summed hammer prices and mean overbid per
/// distinct combination of `group_columns`, sorted by total sales
/// descending.
///
/// The input frame needs an `overbid_pct` column; see [`with_overbid`].
pub fn overbid_summary(df: &DataFrame, group_columns: &[&str]) -> Result<DataFrame> {
    if group_columns.is_empty() {
        return Err(IndexError::InvalidParameter(
            "overbid summary needs at least one group column".to_string(),
        ));
    }
    for column in group_columns
        .iter()
        .copied()
        .chain([END_PRICE_COLUMN, OVERBID_COLUMN])
    {
        if df.column(column).is_err() {
            return Err(IndexError::missing(column));
        }
    }

    let keys: Vec<Expr> = group_columns.iter().map(|c| col(*c)).collect();
    let out = df
        .clone()
        .lazy()
        .group_by(keys)
        .agg([
            col(END_PRICE_COLUMN).sum().alias(TOTAL_SALES_COLUMN),
            col(OVERBID_COLUMN).mean().alias(OVERBID_COLUMN),
        ])
        .sort(
            [TOTAL_SALES_COLUMN],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DATE_COLUMN;
    use approx::assert_relative_eq;

    fn sample() -> DataFrame {
        df!(
            DATE_COLUMN => [2001i32, 2001, 2002, 2002],
            "author" => ["Mägi", "Mägi", "Wiiralt", "Wiiralt"],
            END_PRICE_COLUMN => [1200.0, 900.0, 400.0, 600.0],
            START_PRICE_COLUMN => [Some(1000.0), None, Some(0.0), Some(500.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_overbid_percentages() {
        let out = with_overbid(&sample()).unwrap();
        let overbid = out.column(OVERBID_COLUMN).unwrap().f64().unwrap();

        assert_relative_eq!(overbid.get(0).unwrap(), 20.0);
        // Null start price backfilled: zero overbid.
        assert_relative_eq!(overbid.get(1).unwrap(), 0.0);
        // Zero start price: null, not a division error.
        assert_eq!(overbid.get(2), None);
        assert_relative_eq!(overbid.get(3).unwrap(), 20.0);
    }

    #[test]
    fn test_overbid_without_start_column() {
        let df = df!(
            END_PRICE_COLUMN => [100.0, 200.0],
        )
        .unwrap();
        let out = with_overbid(&df).unwrap();
        let overbid = out.column(OVERBID_COLUMN).unwrap().f64().unwrap();
        assert_relative_eq!(overbid.get(0).unwrap(), 0.0);
    }

    #[test]
    fn test_summary_totals_and_order() {
        let enriched = with_overbid(&sample()).unwrap();
        let summary = overbid_summary(&enriched, &["author"]).unwrap();

        assert_eq!(summary.height(), 2);
        let authors = summary.column("author").unwrap().str().unwrap();
        let totals = summary.column(TOTAL_SALES_COLUMN).unwrap().f64().unwrap();

        // Mägi: 2100 total, mean overbid (20 + 0) / 2 = 10.
        assert_eq!(authors.get(0), Some("Mägi"));
        assert_relative_eq!(totals.get(0).unwrap(), 2100.0);

        let overbids = summary.column(OVERBID_COLUMN).unwrap().f64().unwrap();
        assert_relative_eq!(overbids.get(0).unwrap(), 10.0);
        // Wiiralt's zero-start sale is excluded from the mean: 20, not 10.
        assert_relative_eq!(overbids.get(1).unwrap(), 20.0);
    }

    #[test]
    fn test_summary_requires_group_columns() {
        let enriched = with_overbid(&sample()).unwrap();
        let err = overbid_summary(&enriched, &[]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidParameter(_)));
    }
}
