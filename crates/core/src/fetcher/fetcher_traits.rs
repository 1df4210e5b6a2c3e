use async_trait::async_trait;

use crate::errors::FetchError;

/// Body of a successfully fetched holdings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub url: String,
    pub body: String,
}

/// Retrieves one document per URL.
///
/// Implementations do not retry. Any non-success status or transport failure
/// is returned as a [`FetchError`] naming the URL.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}
