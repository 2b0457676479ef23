//! Report generation for the art index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A published index report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Dataset the report was computed from.
    pub dataset: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// First auction year covered.
    pub start_year: i32,

    /// Last auction year covered.
    pub end_year: i32,

    /// Report contents (JSON format).
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report.
    pub fn new(
        dataset: String,
        start_year: i32,
        end_year: i32,
        contents: serde_json::Value,
    ) -> Self {
        Self {
            dataset,
            timestamp: Utc::now(),
            start_year,
            end_year,
            contents,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    dataset: Option<String>,
    start_year: Option<i32>,
    end_year: Option<i32>,
    contents: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset name.
    pub fn dataset(mut self, dataset: String) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Set the covered year range.
    pub const fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = Some(start_year);
        self.end_year = Some(end_year);
        self
    }

    /// Set the report contents.
    pub fn contents(mut self, contents: serde_json::Value) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<Report, ReportError> {
        Ok(Report::new(
            self.dataset.unwrap_or_default(),
            self.start_year.unwrap_or(2001),
            self.end_year.unwrap_or(2021),
            self.contents.unwrap_or(serde_json::Value::Null),
        ))
    }
}
