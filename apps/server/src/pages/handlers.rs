use std::sync::Arc;

use aigent_core::errors::Error as CoreError;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{error::ApiError, main_lib::AppState};

use super::render::{self, CHOICE_SLUG};

#[derive(Deserialize)]
pub struct EtfPageQuery {
    etf: Option<String>,
}

pub async fn etfs_page(
    State(state): State<Arc<AppState>>,
    Query(q): Query<EtfPageQuery>,
) -> Response {
    let sources = state.etf_service.sources();
    let selected = q
        .etf
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(CHOICE_SLUG);

    if selected.eq_ignore_ascii_case(CHOICE_SLUG) {
        let report = state.etf_service.aggregate_across().await;
        return Html(render::choice_page(sources, &report, state.symbol_links)).into_response();
    }

    match state.etf_service.fetch_and_parse_slug(selected).await {
        Ok(table) => {
            Html(render::holdings_page(sources, selected, &table, state.symbol_links))
                .into_response()
        }
        Err(e) => {
            let message = match &e {
                CoreError::SourceNotFound(slug) => format!("Unknown ETF '{slug}'"),
                CoreError::Fetch(_) => e.to_string(),
            };
            tracing::warn!(etf = %selected, error = %e, "Holdings page failed");
            let status = ApiError::from(e).status();
            (status, Html(render::etf_error_page(sources, selected, &message))).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct AnalyzerPageQuery {
    symbol: Option<String>,
}

pub async fn analyzer_page(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AnalyzerPageQuery>,
) -> Html<String> {
    let symbol = q.symbol.as_deref().filter(|s| !s.trim().is_empty());
    let outcome = match symbol {
        Some(symbol) => Some(state.analysis_service.analyze(symbol).await),
        None => None,
    };
    Html(render::analyzer_page(symbol, outcome.as_ref()))
}
