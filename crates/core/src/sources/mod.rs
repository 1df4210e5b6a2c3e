//! Sources module - the ETF holdings pages the dashboard reads.

mod sources_model;

pub use sources_model::{EtfSource, SourceCatalog};
