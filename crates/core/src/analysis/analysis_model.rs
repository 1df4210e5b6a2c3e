use serde::{Deserialize, Serialize};

/// What the presentation layer shows for one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    Report { symbol: String, text: String },
    Failed { symbol: String, message: String },
}

impl AnalysisOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            AnalysisOutcome::Report { symbol, .. } | AnalysisOutcome::Failed { symbol, .. } => {
                symbol
            }
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, AnalysisOutcome::Report { .. })
    }
}
