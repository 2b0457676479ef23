//! High-level index service.
//!
//! Owns a loaded auction dataset and answers the questions the
//! dashboards ask: growth tables, the per-year series, top-N rankings.
//! Growth tables are memoized keyed by a content hash of dataset
//! identity, grouping column, group list and aggregation mode, so
//! repeated requests for the same table hit the cache.

use artindex_data::cache::content_key;
use artindex_data::{AuctionLoader, DataError, LoadOptions, MemoCache};
use artindex_index::{
    AggregateMode, GrowthCalculator, GrowthRow, IndexError, YearStat, historical_series,
    top_groups,
};
use polars::prelude::DataFrame;
use std::path::Path;
use thiserror::Error;

/// Errors from the index service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Data loading error
    #[error(transparent)]
    Data(#[from] DataError),

    /// Analytics error
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// A loaded dataset plus the analytics entry points over it.
#[derive(Debug)]
pub struct IndexService {
    df: DataFrame,
    dataset_id: String,
    cache: MemoCache<Vec<GrowthRow>>,
}

impl IndexService {
    /// Wrap an already-loaded frame. `dataset_id` distinguishes cache
    /// entries across snapshots, so it must change when the data does.
    pub fn new(df: DataFrame, dataset_id: impl Into<String>) -> Self {
        Self {
            df,
            dataset_id: dataset_id.into(),
            cache: MemoCache::new(),
        }
    }

    /// Load a CSV file and wrap it. The cache identity is the file path.
    pub fn from_csv<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, ServiceError> {
        let loader = AuctionLoader::new();
        let df = loader.load(&path, options)?;
        Ok(Self::new(df, path.as_ref().display().to_string()))
    }

    /// The cleaned dataset.
    pub const fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Growth-rate ranking for `groups`, memoized.
    pub fn growth_table(
        &mut self,
        group_column: &str,
        groups: &[String],
        mode: AggregateMode,
    ) -> Result<Vec<GrowthRow>, ServiceError> {
        let group_list = groups.join("\u{1f}");
        let key = content_key(
            [
                self.dataset_id.as_str(),
                group_column,
                group_list.as_str(),
                mode.as_str(),
            ]
            .map(str::as_bytes),
        );
        let df = &self.df;
        let rows = self.cache.get_or_compute(&key, || {
            GrowthCalculator::with_mode(mode).compute(df, group_column, groups)
        })?;
        Ok(rows)
    }

    /// Per-year average price and volume over the whole dataset.
    pub fn historical(&self) -> Result<Vec<YearStat>, ServiceError> {
        Ok(historical_series(&self.df)?)
    }

    /// The `n` groups with the largest summed hammer prices.
    pub fn top(&self, group_column: &str, n: usize) -> Result<Vec<String>, ServiceError> {
        Ok(top_groups(&self.df, group_column, n)?)
    }
}
