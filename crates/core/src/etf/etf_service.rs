use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use crate::aggregate::{aggregate_with_limit, AggregateReport, SourceFailure};
use crate::constants::{AGGREGATE_LIMIT, DEFAULT_MAX_CONCURRENT_FETCHES};
use crate::errors::{Error, FetchError, Result};
use crate::fetcher::DocumentFetcher;
use crate::holdings::{parse_holdings_with_layout, ColumnLayout, SourceTable};
use crate::sources::{EtfSource, SourceCatalog};

use super::etf_traits::EtfServiceTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtfServiceConfig {
    /// Sources fetched at once while aggregating. Results are always merged in
    /// catalog order.
    pub max_concurrent_fetches: usize,
    pub aggregate_limit: usize,
}

impl Default for EtfServiceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            aggregate_limit: AGGREGATE_LIMIT,
        }
    }
}

pub struct EtfService {
    fetcher: Arc<dyn DocumentFetcher>,
    catalog: SourceCatalog,
    layout: ColumnLayout,
    config: EtfServiceConfig,
}

impl EtfService {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, catalog: SourceCatalog) -> Self {
        Self {
            fetcher,
            catalog,
            layout: ColumnLayout::standard(),
            config: EtfServiceConfig::default(),
        }
    }

    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_config(mut self, config: EtfServiceConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl EtfServiceTrait for EtfService {
    fn sources(&self) -> &[EtfSource] {
        self.catalog.sources()
    }

    fn find_source(&self, slug: &str) -> Result<EtfSource> {
        self.catalog
            .find(slug)
            .cloned()
            .ok_or_else(|| Error::SourceNotFound(slug.to_string()))
    }

    async fn fetch_and_parse(
        &self,
        source: &EtfSource,
    ) -> std::result::Result<SourceTable, FetchError> {
        let document = self.fetcher.fetch(&source.url).await?;
        let rows = parse_holdings_with_layout(&document.body, &self.layout);
        debug!("{}: {} holdings", source.label, rows.len());
        Ok(SourceTable::new(source.label.clone(), rows))
    }

    async fn fetch_and_parse_slug(&self, slug: &str) -> Result<SourceTable> {
        let source = self.find_source(slug)?;
        Ok(self.fetch_and_parse(&source).await?)
    }

    async fn aggregate_across(&self) -> AggregateReport {
        self.aggregate_sources(self.catalog.sources()).await
    }

    async fn aggregate_sources(&self, sources: &[EtfSource]) -> AggregateReport {
        let concurrency = self.config.max_concurrent_fetches.max(1);

        // buffered() yields in input order regardless of completion order
        let results: Vec<(EtfSource, std::result::Result<SourceTable, FetchError>)> =
            stream::iter(sources.iter().cloned())
                .map(|source| async move {
                    let result = self.fetch_and_parse(&source).await;
                    (source, result)
                })
                .buffered(concurrency)
                .collect()
                .await;

        let mut tables = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (source, result) in results {
            match result {
                Ok(table) => tables.push(table),
                Err(error) => {
                    warn!("Failed to scrape {}: {}", source.label, error);
                    failures.push(SourceFailure {
                        label: source.label,
                        error,
                    });
                }
            }
        }

        let rows = aggregate_with_limit(&tables, self.config.aggregate_limit);
        info!(
            "Aggregated {} sources ({} failed) into {} holdings",
            sources.len(),
            failures.len(),
            rows.len()
        );
        AggregateReport { rows, failures }
    }
}
