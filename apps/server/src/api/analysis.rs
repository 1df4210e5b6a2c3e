use std::sync::Arc;

use aigent_core::analysis::AnalysisOutcome;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::main_lib::AppState;

/// Analyzer failures come back as `status: "failed"` with a message, never as
/// an HTTP error.
async fn analyze_symbol(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<AnalysisOutcome> {
    Json(state.analysis_service.analyze(&symbol).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analysis/{symbol}", get(analyze_symbol))
}
