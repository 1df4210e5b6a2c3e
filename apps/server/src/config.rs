use std::{net::SocketAddr, time::Duration};

use aigent_core::constants::{AGGREGATE_LIMIT, DEFAULT_MAX_CONCURRENT_FETCHES};

use crate::pages::SymbolLinks;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub max_concurrent_fetches: usize,
    pub aggregate_limit: usize,
    pub symbol_links: SymbolLinks,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("AIGENT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid AIGENT_LISTEN_ADDR");
        let cors_allow = std::env::var("AIGENT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("AIGENT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "60000".into())
            .parse()
            .unwrap_or(60000);
        let max_concurrent_fetches: usize = std::env::var("AIGENT_MAX_CONCURRENT_FETCHES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES);
        let aggregate_limit =
            parse_aggregate_limit(std::env::var("AIGENT_AGGREGATE_LIMIT").ok().as_deref());
        let symbol_links = std::env::var("AIGENT_SYMBOL_LINKS")
            .map(|v| SymbolLinks::from_setting(&v))
            .unwrap_or_default();
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            max_concurrent_fetches,
            aggregate_limit,
            symbol_links,
        }
    }
}

/// Choice table size in `1..=AGGREGATE_LIMIT`; anything else keeps the default.
fn parse_aggregate_limit(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|n| (1..=AGGREGATE_LIMIT).contains(n))
        .unwrap_or(AGGREGATE_LIMIT)
}
