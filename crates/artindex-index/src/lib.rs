#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kanvasai/artindex/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod overbid;
pub mod rank;
pub mod registry;
pub mod series;

pub use error::{IndexError, Result};
pub use growth::{AggregateMode, GrowthCalculator, GrowthConfig, GrowthRow, GroupGrowth};
pub use overbid::{overbid_summary, with_overbid};
pub use rank::top_groups;
pub use registry::{MetricCategory, MetricInfo, available_metrics, get_metric_info, metrics_by_category};
pub use series::{YearStat, historical_series};

/// Column holding the auction year.
pub const DATE_COLUMN: &str = "date";

/// Column holding the hammer price.
pub const END_PRICE_COLUMN: &str = "end_price";

/// Column holding the opening price.
pub const START_PRICE_COLUMN: &str = "start_price";
