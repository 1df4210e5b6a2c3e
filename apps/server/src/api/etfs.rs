use std::sync::Arc;

use aigent_core::{AggregateReport, EtfSource};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState, models::EtfHoldings};

async fn list_etfs(State(state): State<Arc<AppState>>) -> Json<Vec<EtfSource>> {
    Json(state.etf_service.sources().to_vec())
}

/// Holdings aggregated across every ETF ("AIgent's Choice").
async fn get_choice(State(state): State<Arc<AppState>>) -> Json<AggregateReport> {
    Json(state.etf_service.aggregate_across().await)
}

async fn get_etf_holdings(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<EtfHoldings>> {
    let table = state.etf_service.fetch_and_parse_slug(&slug).await?;
    Ok(Json(EtfHoldings::from(table)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/etfs", get(list_etfs))
        .route("/etfs/choice", get(get_choice))
        .route("/etfs/{slug}/holdings", get(get_etf_holdings))
}
