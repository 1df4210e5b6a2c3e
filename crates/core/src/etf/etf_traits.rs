use async_trait::async_trait;

use crate::aggregate::AggregateReport;
use crate::errors::{FetchError, Result};
use crate::holdings::SourceTable;
use crate::sources::EtfSource;

/// Trait for the holdings views consumed by the presentation layer
#[async_trait]
pub trait EtfServiceTrait: Send + Sync {
    /// Configured sources, in aggregation order.
    fn sources(&self) -> &[EtfSource];

    fn find_source(&self, slug: &str) -> Result<EtfSource>;

    /// Fetches and parses one source. A fetch failure is terminal for the
    /// request; an empty table is not a failure.
    async fn fetch_and_parse(
        &self,
        source: &EtfSource,
    ) -> std::result::Result<SourceTable, FetchError>;

    async fn fetch_and_parse_slug(&self, slug: &str) -> Result<SourceTable>;

    /// Aggregates every configured source.
    async fn aggregate_across(&self) -> AggregateReport;

    /// Aggregates the given sources. Failed sources are skipped and reported
    /// one by one.
    async fn aggregate_sources(&self, sources: &[EtfSource]) -> AggregateReport;
}
