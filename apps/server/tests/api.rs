use std::{collections::HashMap, sync::Arc, time::Duration};

use aigent_core::{
    analysis::{StockAnalyzer, UnavailableAnalyzer},
    errors::{AnalysisError, FetchError},
    fetcher::{DocumentFetcher, RawDocument},
    EtfSource, SourceCatalog,
};
use aigent_server::{api::app_router, build_state_with, config::Config, pages::SymbolLinks};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

struct StaticFetcher {
    pages: HashMap<String, Result<String, u16>>,
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(RawDocument {
                url: url.to_string(),
                body: body.clone(),
            }),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Network {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

struct EchoAnalyzer;

#[async_trait]
impl StockAnalyzer for EchoAnalyzer {
    async fn analyze(&self, symbol: &str) -> Result<String, AnalysisError> {
        if symbol == "FAIL" {
            return Err(AnalysisError::Failed {
                symbol: symbol.to_string(),
                message: "model timed out".to_string(),
            });
        }
        Ok(format!("Outlook for {symbol}: steady"))
    }
}

fn holdings_html(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (symbol, name, weight))| {
            format!("<tr><td>{}</td><td>{symbol}</td><td>{name}</td><td>{weight}</td></tr>", i + 1)
        })
        .collect();
    format!(
        "<html><body><table><tr><th>No.</th><th>Symbol</th><th>Name</th><th>% Weight</th></tr>{body}</table></body></html>"
    )
}

fn test_config(symbol_links: SymbolLinks) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        max_concurrent_fetches: 1,
        aggregate_limit: 50,
        symbol_links,
    }
}

fn catalog() -> SourceCatalog {
    SourceCatalog::new(vec![
        EtfSource::new("botz", "BOTZ", "http://etf.test/botz"),
        EtfSource::new("aiq", "AIQ", "http://etf.test/aiq"),
        EtfSource::new("arty", "ARTY", "http://etf.test/arty"),
    ])
}

fn fetcher() -> StaticFetcher {
    let mut pages = HashMap::new();
    pages.insert(
        "http://etf.test/botz".to_string(),
        Ok(holdings_html(&[
            ("NVDA", "NVIDIA Corporation", "9.5%"),
            ("ISRG", "Intuitive Surgical", "8.0%"),
        ])),
    );
    pages.insert(
        "http://etf.test/aiq".to_string(),
        Ok(holdings_html(&[
            ("NVDA", "NVIDIA Corp", "4.0%"),
            ("MSFT", "Microsoft <Corp>", "3.5%"),
        ])),
    );
    pages.insert("http://etf.test/arty".to_string(), Err(503));
    StaticFetcher { pages }
}

async fn build_test_router(symbol_links: SymbolLinks, analyzer: Arc<dyn StockAnalyzer>) -> Router {
    let config = test_config(symbol_links);
    let state = build_state_with(&config, Arc::new(fetcher()), catalog(), analyzer)
        .await
        .unwrap();
    app_router(state, &config)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn healthz_responds_ok() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;
    let (status, body) = get(&app, "/api/v1/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn lists_sources_in_catalog_order() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;
    let (status, json) = get_json(&app, "/api/v1/etfs").await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["botz", "aiq", "arty"]);
}

#[tokio::test]
async fn choice_aggregates_and_reports_failures() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;
    let (status, json) = get_json(&app, "/api/v1/etfs/choice").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json["rows"].as_array().unwrap();
    let symbols: Vec<&str> = rows.iter().map(|r| r["symbol"].as_str().unwrap()).collect();
    assert_eq!(symbols, vec!["NVDA", "ISRG", "MSFT"]);
    assert_eq!(rows[0]["name"], "NVIDIA Corporation");
    assert_eq!(rows[0]["totalWeightPercent"].as_f64().unwrap(), 13.5);

    let failures = json["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["label"], "ARTY");
    assert_eq!(failures[0]["error"]["kind"], "status");
    assert_eq!(failures[0]["error"]["status"], 503);
}

#[tokio::test]
async fn single_etf_holdings() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;
    let (status, json) = get_json(&app, "/api/v1/etfs/AIQ/holdings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "AIQ");
    let holdings = json["holdings"].as_array().unwrap();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[1]["symbol"], "MSFT");
    assert_eq!(holdings[1]["weight"], "3.5%");
    assert_eq!(holdings[1]["weightPercent"].as_f64().unwrap(), 3.5);
}

#[tokio::test]
async fn holdings_errors_map_to_status_codes() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;

    let (status, json) = get_json(&app, "/api/v1/etfs/qqq/holdings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);

    let (status, json) = get_json(&app, "/api/v1/etfs/arty/holdings").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        json["message"],
        "Failed to fetch data from URL: http://etf.test/arty. Status code: 503"
    );

    let (status, json) = get_json(&app, "/api/v1/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Not Found");
}

#[tokio::test]
async fn analysis_returns_outcome_json() {
    let app = build_test_router(SymbolLinks::External, Arc::new(EchoAnalyzer)).await;

    let (status, json) = get_json(&app, "/api/v1/analysis/nvda").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "report");
    assert_eq!(json["symbol"], "NVDA");
    assert_eq!(json["text"], "Outlook for NVDA: steady");

    let (status, json) = get_json(&app, "/api/v1/analysis/fail").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "failed");
    assert_eq!(json["message"], "Analysis of FAIL failed: model timed out");
}

#[tokio::test]
async fn analysis_without_backend_fails_softly() {
    let app = build_test_router(SymbolLinks::External, Arc::new(UnavailableAnalyzer)).await;
    let (status, json) = get_json(&app, "/api/v1/analysis/MSFT").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "failed");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Stock analysis is unavailable"));
}

#[tokio::test]
async fn empty_catalog_is_rejected() {
    let config = test_config(SymbolLinks::External);
    let result = build_state_with(
        &config,
        Arc::new(fetcher()),
        SourceCatalog::new(vec![]),
        Arc::new(UnavailableAnalyzer),
    )
    .await;
    assert!(result.is_err());
}
