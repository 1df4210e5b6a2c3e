//! Aggregate module - merges holdings across ETFs into one ranked view.

mod aggregate_model;
mod aggregator;

pub use aggregate_model::{AggregateReport, AggregateRow, SourceFailure};
pub use aggregator::{aggregate, aggregate_with_limit};
