//! Fetcher module - retrieves raw holdings documents.

mod fetcher_traits;
mod http_fetcher;

pub use fetcher_traits::{DocumentFetcher, RawDocument};
pub use http_fetcher::HttpFetcher;
