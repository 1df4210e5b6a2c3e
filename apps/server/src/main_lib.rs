use std::sync::Arc;

use aigent_core::{
    analysis::{AnalysisService, StockAnalyzer, UnavailableAnalyzer},
    etf::{EtfService, EtfServiceConfig, EtfServiceTrait},
    fetcher::{DocumentFetcher, HttpFetcher},
    SourceCatalog,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, pages::SymbolLinks};

pub struct AppState {
    pub etf_service: Arc<dyn EtfServiceTrait + Send + Sync>,
    pub analysis_service: Arc<AnalysisService>,
    pub symbol_links: SymbolLinks,
}

pub fn init_tracing() {
    let log_format = std::env::var("AIGENT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Production wiring: live HTTP fetcher, the AI ETF catalog and no analyzer.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with(
        config,
        Arc::new(HttpFetcher::new()),
        SourceCatalog::default_ai_etfs(),
        Arc::new(UnavailableAnalyzer),
    )
    .await
}

pub async fn build_state_with(
    config: &Config,
    fetcher: Arc<dyn DocumentFetcher>,
    catalog: SourceCatalog,
    analyzer: Arc<dyn StockAnalyzer>,
) -> anyhow::Result<Arc<AppState>> {
    if catalog.is_empty() {
        anyhow::bail!("No ETF sources configured");
    }
    tracing::info!(
        sources = catalog.len(),
        max_concurrent_fetches = config.max_concurrent_fetches,
        aggregate_limit = config.aggregate_limit,
        "Configuring ETF holdings service"
    );

    let etf_service = EtfService::new(fetcher, catalog).with_config(EtfServiceConfig {
        max_concurrent_fetches: config.max_concurrent_fetches,
        aggregate_limit: config.aggregate_limit,
    });

    Ok(Arc::new(AppState {
        etf_service: Arc::new(etf_service),
        analysis_service: Arc::new(AnalysisService::new(analyzer)),
        symbol_links: config.symbol_links,
    }))
}
