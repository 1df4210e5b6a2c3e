//! AIgent Core - ETF holdings scraping and aggregation.
//!
//! This crate fetches ETF holdings pages, parses their holdings tables,
//! normalizes the reported weights and merges several ETFs into a ranked
//! "most common holdings" view. Presentation lives in the server crate.
//!
//! # Pipeline
//!
//! ```text
//! +-----------+     +--------------+     +------------+     +------------+
//! |  Fetcher  | --> | Table Parser | --> | Normalizer | --> | Aggregator |
//! +-----------+     +--------------+     +------------+     +------------+
//!   per source         per source          per row            all sources
//! ```
//!
//! The [`etf::EtfService`] drives the pipeline for a single source or for the
//! whole [`sources::SourceCatalog`].

pub mod aggregate;
pub mod analysis;
pub mod constants;
pub mod errors;
pub mod etf;
pub mod fetcher;
pub mod holdings;
pub mod sources;

pub use aggregate::{aggregate, aggregate_with_limit, AggregateReport, AggregateRow, SourceFailure};
pub use holdings::{normalize_weight, parse_holdings, ColumnLayout, HoldingRow, SourceTable};
pub use sources::{EtfSource, SourceCatalog};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
