//! Top-N group rankings by total sales.
//!
//! The dashboards feed the "top 10/25 authors by turnover" lists back
//! into the growth calculator as the group list of interest.

use crate::error::{IndexError, Result};
use crate::END_PRICE_COLUMN;
use polars::prelude::*;

/// Return the labels of the `n` groups with the highest summed hammer
/// prices, descending. Null group labels are ignored.
pub fn top_groups(df: &DataFrame, group_column: &str, n: usize) -> Result<Vec<String>> {
    for column in [group_column, END_PRICE_COLUMN] {
        if df.column(column).is_err() {
            return Err(IndexError::missing(column));
        }
    }
    if n == 0 {
        return Err(IndexError::InvalidParameter(
            "top-N ranking needs n >= 1".to_string(),
        ));
    }

    let ranked = df
        .clone()
        .lazy()
        .filter(col(group_column).is_not_null())
        .group_by([col(group_column)])
        .agg([col(END_PRICE_COLUMN).sum().alias("total_sales")])
        .sort(
            ["total_sales"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .limit(n as IdxSize)
        .collect()?;

    let labels = ranked.column(group_column)?.str()?;
    Ok(labels.into_iter().flatten().map(String::from).collect())
}
