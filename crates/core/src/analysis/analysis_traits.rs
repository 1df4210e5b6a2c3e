use async_trait::async_trait;

use crate::errors::AnalysisError;

/// External stock analysis capability.
///
/// The analysis itself is opaque to this crate; callers go through
/// [`super::AnalysisService`], which never lets a failure escape.
#[async_trait]
pub trait StockAnalyzer: Send + Sync {
    async fn analyze(&self, symbol: &str) -> Result<String, AnalysisError>;
}

/// Analyzer used when no analysis backend is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableAnalyzer;

#[async_trait]
impl StockAnalyzer for UnavailableAnalyzer {
    async fn analyze(&self, _symbol: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Unavailable(
            "no analyzer is configured".to_string(),
        ))
    }
}
