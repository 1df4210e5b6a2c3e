//! Holdings domain models.

use serde::{Deserialize, Serialize};

use super::weight::normalize_weight;

/// One row of an ETF holdings table, as scraped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    /// Weight text exactly as the source reports it, e.g. `"3.25%"`
    pub weight: String,
    /// Only filled by the extended column layout
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shares: Option<String>,
}

impl HoldingRow {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            weight: weight.into(),
            shares: None,
        }
    }

    /// Normalized weight in percent; 0 when the source text is not numeric.
    pub fn weight_percent(&self) -> f64 {
        normalize_weight(&self.weight)
    }
}

/// The parsed holdings of one ETF source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceTable {
    /// Human-readable ETF label the rows came from
    pub source: String,
    pub rows: Vec<HoldingRow>,
}

impl SourceTable {
    pub fn new(source: impl Into<String>, rows: Vec<HoldingRow>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    /// No recognizable holdings table was found in the document.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
