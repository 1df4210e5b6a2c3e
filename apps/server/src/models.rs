use aigent_core::{HoldingRow, SourceTable};
use serde::{Deserialize, Serialize};

/// A holdings row with its weight already normalized for clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub weight: String,
    pub weight_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shares: Option<String>,
}

impl From<HoldingRow> for Holding {
    fn from(row: HoldingRow) -> Self {
        Self {
            weight_percent: row.weight_percent(),
            symbol: row.symbol,
            name: row.name,
            weight: row.weight,
            shares: row.shares,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EtfHoldings {
    pub source: String,
    pub holdings: Vec<Holding>,
}

impl From<SourceTable> for EtfHoldings {
    fn from(table: SourceTable) -> Self {
        Self {
            source: table.source,
            holdings: table.rows.into_iter().map(Holding::from).collect(),
        }
    }
}
