//! Annualized growth-rate tables.
//!
//! For every requested group (category, author, technique, source) the
//! calculator aggregates hammer prices per auction year, then averages
//! one growth sample per year-to-year transition:
//!
//! ```text
//! sample = (curr - prev) / prev * 100 / (year - prev_year)
//! ```
//!
//! where `prev` is the previously stored aggregate. A gap in the record
//! (no sales for some years) widens the denominator instead of producing
//! extra samples. The group rate is the arithmetic mean of its samples.

use crate::error::{IndexError, Result};
use crate::{DATE_COLUMN, END_PRICE_COLUMN};
use derive_more::Display;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Internal alias for the per-year aggregate column.
const AGG_COLUMN: &str = "agg";

/// How hammer prices are aggregated within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum AggregateMode {
    /// Mean hammer price per year — the "price" index.
    #[display("mean_price")]
    MeanPrice,

    /// Summed hammer prices per year — the "volume" index.
    #[display("sum_volume")]
    SumVolume,
}

impl AggregateMode {
    /// Stable identifier, used in cache keys and CLI flags.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MeanPrice => "mean_price",
            Self::SumVolume => "sum_volume",
        }
    }
}

/// Configuration for the growth calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Aggregation mode (default: mean price).
    pub mode: AggregateMode,
    /// Decimal places the rates are rounded to (default: 4).
    pub round_dp: u32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            mode: AggregateMode::MeanPrice,
            round_dp: 4,
        }
    }
}

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Group label (category, author, ...).
    pub group: String,

    /// Annualized growth rate in percent.
    pub annual_growth_pct: f64,
}

/// Full per-group result, including the compounded total.
///
/// The ranking table only reports the annual rate; the total is kept for
/// callers that want the since-inception figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupGrowth {
    /// Group label.
    pub group: String,

    /// Annualized growth rate in percent.
    pub annual_growth_pct: f64,

    /// Annual rate times the number of observed years.
    pub total_growth_pct: f64,

    /// Number of distinct auction years observed for the group.
    pub observed_years: usize,
}

/// Computes annualized growth-rate rankings across groups.
#[derive(Debug, Default)]
pub struct GrowthCalculator {
    config: GrowthConfig,
}

impl GrowthCalculator {
    /// Create a calculator with the given configuration.
    pub const fn with_config(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Create a calculator for the given aggregation mode.
    pub const fn with_mode(mode: AggregateMode) -> Self {
        Self {
            config: GrowthConfig {
                mode,
                round_dp: 4,
            },
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Columns the input frame must provide, besides the group column.
    pub const fn required_columns(&self) -> &[&str] {
        &[DATE_COLUMN, END_PRICE_COLUMN]
    }

    /// Compute the ranking table for `groups`, in the given order of
    /// interest, sorted by annual growth rate descending.
    ///
    /// Groups with no records, fewer than two distinct years, or no
    /// computable transition are omitted; one such group never aborts
    /// the rest of the table.
    pub fn compute(
        &self,
        df: &DataFrame,
        group_column: &str,
        groups: &[String],
    ) -> Result<Vec<GrowthRow>> {
        let detailed = self.compute_detailed(df, group_column, groups)?;
        Ok(detailed
            .into_iter()
            .map(|g| GrowthRow {
                group: g.group,
                annual_growth_pct: g.annual_growth_pct,
            })
            .collect())
    }

    /// Like [`compute`](Self::compute), but keeps the compounded total
    /// and observed-year count per group.
    pub fn compute_detailed(
        &self,
        df: &DataFrame,
        group_column: &str,
        groups: &[String],
    ) -> Result<Vec<GroupGrowth>> {
        for column in [DATE_COLUMN, END_PRICE_COLUMN, group_column] {
            if df.column(column).is_err() {
                return Err(IndexError::missing(column));
            }
        }

        let mut rows = Vec::with_capacity(groups.len());
        for group in groups {
            if let Some(row) = self.group_growth(df, group_column, group)? {
                rows.push(row);
            }
        }
        rows.sort_by(|a, b| {
            b.annual_growth_pct
                .partial_cmp(&a.annual_growth_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(rows)
    }

    /// Growth for a single group, `None` when no rate is computable.
    fn group_growth(
        &self,
        df: &DataFrame,
        group_column: &str,
        group: &str,
    ) -> Result<Option<GroupGrowth>> {
        let agg_expr = match self.config.mode {
            AggregateMode::MeanPrice => col(END_PRICE_COLUMN).mean(),
            AggregateMode::SumVolume => col(END_PRICE_COLUMN).sum(),
        };

        let per_year = df
            .clone()
            .lazy()
            .filter(
                col(group_column)
                    .eq(lit(group.to_owned()))
                    .and(col(DATE_COLUMN).is_not_null()),
            )
            .with_column(col(DATE_COLUMN).cast(DataType::Int32))
            .group_by([col(DATE_COLUMN)])
            .agg([agg_expr.alias(AGG_COLUMN)])
            .sort([DATE_COLUMN], Default::default())
            .collect()?;

        if per_year.height() < 2 {
            // MissingGroup or InsufficientHistory: nothing to rank.
            return Ok(None);
        }

        let years = per_year.column(DATE_COLUMN)?.i32()?;
        let aggregates = per_year.column(AGG_COLUMN)?.f64()?;

        let mut samples: Vec<f64> = Vec::with_capacity(per_year.height() - 1);
        let mut prev: Option<(i32, f64)> = None;
        for (year, aggregate) in years.into_iter().zip(aggregates) {
            let (Some(year), Some(aggregate)) = (year, aggregate) else {
                continue;
            };
            if !aggregate.is_finite() {
                continue;
            }
            if let Some((prev_year, prev_agg)) = prev {
                // ZeroBaseline: skip the transition, keep the year.
                if prev_agg != 0.0 {
                    let span = f64::from(year - prev_year);
                    samples.push((aggregate - prev_agg) / prev_agg * 100.0 / span);
                }
            }
            prev = Some((year, aggregate));
        }

        if samples.is_empty() {
            return Ok(None);
        }

        let annual = samples.iter().sum::<f64>() / samples.len() as f64;
        let annual = round_to(annual, self.config.round_dp);
        let observed_years = per_year.height();
        let total = round_to(annual * observed_years as f64, self.config.round_dp);

        Ok(Some(GroupGrowth {
            group: group.to_string(),
            annual_growth_pct: annual,
            total_growth_pct: total,
            observed_years,
        }))
    }
}

fn round_to(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
