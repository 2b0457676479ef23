//! Per-year index series.
//!
//! The headline charts plot the mean hammer price ("index level") and
//! the summed hammer prices ("volume") per auction year.

use crate::error::{IndexError, Result};
use crate::{DATE_COLUMN, END_PRICE_COLUMN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One point of the historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearStat {
    /// Auction year.
    pub year: i32,
    /// Mean hammer price over the year.
    pub avg_price: f64,
    /// Summed hammer prices over the year.
    pub volume: f64,
}

/// Compute the per-year average-price and volume series over the whole
/// dataset, sorted by year ascending.
///
/// Years whose aggregate is not computable (all prices null) are
/// omitted rather than reported as holes.
pub fn historical_series(df: &DataFrame) -> Result<Vec<YearStat>> {
    for column in [DATE_COLUMN, END_PRICE_COLUMN] {
        if df.column(column).is_err() {
            return Err(IndexError::missing(column));
        }
    }

    let per_year = df
        .clone()
        .lazy()
        .filter(col(DATE_COLUMN).is_not_null())
        .with_column(col(DATE_COLUMN).cast(DataType::Int32))
        .group_by([col(DATE_COLUMN)])
        .agg([
            col(END_PRICE_COLUMN).mean().alias("avg_price"),
            col(END_PRICE_COLUMN).sum().alias("volume"),
        ])
        .sort([DATE_COLUMN], Default::default())
        .collect()?;

    let years = per_year.column(DATE_COLUMN)?.i32()?;
    let avgs = per_year.column("avg_price")?.f64()?;
    let volumes = per_year.column("volume")?.f64()?;

    let mut out = Vec::with_capacity(per_year.height());
    for ((year, avg), volume) in years.into_iter().zip(avgs).zip(volumes) {
        let (Some(year), Some(avg_price), Some(volume)) = (year, avg, volume) else {
            continue;
        };
        if !avg_price.is_finite() {
            continue;
        }
        out.push(YearStat {
            year,
            avg_price,
            volume,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_aggregates_per_year() {
        let df = df!(
            DATE_COLUMN => [2001i32, 2001, 2003],
            END_PRICE_COLUMN => [100.0, 300.0, 50.0],
        )
        .unwrap();

        let series = historical_series(&df).unwrap();
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].year, 2001);
        assert_relative_eq!(series[0].avg_price, 200.0);
        assert_relative_eq!(series[0].volume, 400.0);

        assert_eq!(series[1].year, 2003);
        assert_relative_eq!(series[1].volume, 50.0);
    }

    #[test]
    fn test_series_sorted_by_year() {
        let df = df!(
            DATE_COLUMN => [2010i32, 2001, 2005],
            END_PRICE_COLUMN => [1.0, 2.0, 3.0],
        )
        .unwrap();

        let series = historical_series(&df).unwrap();
        let years: Vec<i32> = series.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2001, 2005, 2010]);
    }

    #[test]
    fn test_missing_price_column() {
        let df = df!(DATE_COLUMN => [2001i32]).unwrap();
        let err = historical_series(&df).unwrap_err();
        assert!(matches!(err, IndexError::MissingColumn { column } if column == END_PRICE_COLUMN));
    }
}
