//! Holdings module - scraped table models, parsing and weight normalization.

mod holdings_model;
mod table_parser;
mod weight;

pub use holdings_model::{HoldingRow, SourceTable};
pub use table_parser::{parse_holdings, parse_holdings_with_layout, ColumnLayout};
pub use weight::normalize_weight;
