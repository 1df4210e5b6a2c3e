use std::sync::Arc;

use log::warn;

use crate::errors::AnalysisError;

use super::analysis_model::AnalysisOutcome;
use super::analysis_traits::StockAnalyzer;

/// Runs the injected analyzer and turns every failure into a message.
pub struct AnalysisService {
    analyzer: Arc<dyn StockAnalyzer>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn StockAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Tickers are compared uppercase; surrounding whitespace is dropped.
    pub fn normalize_symbol(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    pub async fn analyze(&self, raw_symbol: &str) -> AnalysisOutcome {
        let symbol = Self::normalize_symbol(raw_symbol);
        let result = if symbol.is_empty() {
            Err(AnalysisError::InvalidSymbol(raw_symbol.to_string()))
        } else {
            self.analyzer.analyze(&symbol).await
        };

        match result {
            Ok(text) => AnalysisOutcome::Report { symbol, text },
            Err(e) => {
                warn!("Analysis for '{}' failed: {}", symbol, e);
                AnalysisOutcome::Failed {
                    symbol,
                    message: e.to_string(),
                }
            }
        }
    }
}
