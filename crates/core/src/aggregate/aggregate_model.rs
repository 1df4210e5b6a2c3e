//! Aggregate view models.

use serde::{Deserialize, Serialize};

use crate::errors::FetchError;

/// One distinct symbol of the merged view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub symbol: String,
    /// Name from the first source that lists the symbol
    pub name: String,
    pub total_weight_percent: f64,
}

/// A source that could not be fetched during an aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceFailure {
    /// ETF label of the failed source
    pub label: String,
    pub error: FetchError,
}

impl SourceFailure {
    /// User-facing line for this failure.
    pub fn message(&self) -> String {
        format!("Failed to scrape {}: {}", self.label, self.error)
    }
}

/// Result of aggregating across several sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub rows: Vec<AggregateRow>,
    /// One entry per failed source, in source order
    pub failures: Vec<SourceFailure>,
}

impl AggregateReport {
    /// No common stocks were found; either every source failed or none
    /// listed a recognizable table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
