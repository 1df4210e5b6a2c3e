//! Core error types for AIgent.
//!
//! Per-source fetch failures and analyzer failures are recoverable and are
//! reported to the caller individually. Parsing never fails: an empty table
//! and an unparseable weight are valid results, not errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unknown ETF source: {0}")]
    SourceNotFound(String),
}

/// Failure to retrieve one holdings page.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch data from URL: {url}. Status code: {status}")]
    Status { url: String, status: u16 },

    /// The request never produced a usable response (DNS, connect, body read).
    #[error("Failed to fetch data from URL: {url}. {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Network { url, .. } => url,
        }
    }
}

/// Failure raised by a [`crate::analysis::StockAnalyzer`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Stock analysis is unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid ticker symbol: '{0}'")]
    InvalidSymbol(String),

    #[error("Analysis of {symbol} failed: {message}")]
    Failed { symbol: String, message: String },
}
