//! Metric registry.
//!
//! Central metadata for the built-in metrics. Lets the CLI list what is
//! available and validate required columns before loading anything.

use std::collections::HashMap;

/// Available metric categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    /// Annualized growth-rate rankings.
    Growth,
    /// Per-year index series.
    Series,
    /// Overbid statistics.
    Overbid,
    /// Turnover rankings.
    Ranking,
}

/// Metric metadata.
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// Metric name (unique identifier).
    pub name: &'static str,
    /// Metric category.
    pub category: MetricCategory,
    /// Brief description of what the metric reports.
    pub description: &'static str,
    /// Required column names in input data.
    pub required_columns: &'static [&'static str],
}

/// Get all available metric info.
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        MetricInfo {
            name: "price_growth",
            category: MetricCategory::Growth,
            description: "Annualized growth of mean hammer price per group",
            required_columns: &["date", "end_price"],
        },
        MetricInfo {
            name: "volume_growth",
            category: MetricCategory::Growth,
            description: "Annualized growth of summed hammer prices per group",
            required_columns: &["date", "end_price"],
        },
        MetricInfo {
            name: "historical_series",
            category: MetricCategory::Series,
            description: "Mean price and volume per auction year",
            required_columns: &["date", "end_price"],
        },
        MetricInfo {
            name: "overbid",
            category: MetricCategory::Overbid,
            description: "Hammer price over opening price, in percent",
            required_columns: &["end_price", "start_price"],
        },
        MetricInfo {
            name: "top_groups",
            category: MetricCategory::Ranking,
            description: "Groups ranked by summed hammer prices",
            required_columns: &["end_price"],
        },
    ]
}

/// Get metric info by name.
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name == name)
}

/// Group all metrics by category.
pub fn metrics_by_category() -> HashMap<MetricCategory, Vec<MetricInfo>> {
    let mut map: HashMap<MetricCategory, Vec<MetricInfo>> = HashMap::new();
    for metric in available_metrics() {
        map.entry(metric.category).or_default().push(metric);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_unique() {
        let metrics = available_metrics();
        let mut names: Vec<&str> = metrics.iter().map(|m| m.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), metrics.len());
    }

    #[test]
    fn test_lookup_by_name() {
        let info = get_metric_info("price_growth").unwrap();
        assert_eq!(info.category, MetricCategory::Growth);
        assert!(info.required_columns.contains(&"date"));

        assert!(get_metric_info("not_a_metric").is_none());
    }

    #[test]
    fn test_grouping_by_category() {
        let by_category = metrics_by_category();
        assert_eq!(by_category[&MetricCategory::Growth].len(), 2);
        assert!(by_category.contains_key(&MetricCategory::Series));
    }
}
