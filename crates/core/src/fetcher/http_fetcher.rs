//! reqwest-backed document fetcher.
//!
//! Holdings sites tend to reject clients without a browser User-Agent, so the
//! client sends browser-like defaults. Timeouts and redirects are left to the
//! transport defaults.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use super::fetcher_traits::{DocumentFetcher, RawDocument};
use crate::constants::FETCH_USER_AGENT;
use crate::errors::FetchError;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .user_agent(FETCH_USER_AGENT)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build holdings HTTP client, using defaults: {}", e);
                Client::new()
            });

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        debug!("Fetching holdings page {}", url);

        let network_error = |e: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        Ok(RawDocument {
            url: url.to_string(),
            body,
        })
    }
}
