//! Analysis module - per-ticker analysis through an injected analyzer.

mod analysis_model;
mod analysis_service;
mod analysis_traits;

pub use analysis_model::AnalysisOutcome;
pub use analysis_service::AnalysisService;
pub use analysis_traits::{StockAnalyzer, UnavailableAnalyzer};
