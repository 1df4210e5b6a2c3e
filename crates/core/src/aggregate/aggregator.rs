use std::collections::HashMap;

use crate::constants::AGGREGATE_LIMIT;
use crate::holdings::SourceTable;

use super::aggregate_model::AggregateRow;

/// Merges tables into the top [`AGGREGATE_LIMIT`] symbols by summed weight.
pub fn aggregate(tables: &[SourceTable]) -> Vec<AggregateRow> {
    aggregate_with_limit(tables, AGGREGATE_LIMIT)
}

/// Merges tables into at most `limit` symbols ranked by summed weight.
///
/// Rows are grouped by exact symbol. The name of a group comes from its first
/// row in table order; weights are normalized and summed. Groups are sorted by
/// total weight descending and ties keep the order in which symbols were
/// first seen.
pub fn aggregate_with_limit(tables: &[SourceTable], limit: usize) -> Vec<AggregateRow> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AggregateRow> = Vec::new();

    for row in tables.iter().flat_map(|table| table.rows.iter()) {
        let weight = row.weight_percent();
        match positions.get(row.symbol.as_str()).copied() {
            Some(idx) => groups[idx].total_weight_percent += weight,
            None => {
                positions.insert(row.symbol.as_str(), groups.len());
                groups.push(AggregateRow {
                    symbol: row.symbol.clone(),
                    name: row.name.clone(),
                    total_weight_percent: weight,
                });
            }
        }
    }

    // sort_by is stable: equal totals stay in first-seen order
    groups.sort_by(|a, b| b.total_weight_percent.total_cmp(&a.total_weight_percent));
    groups.truncate(limit);
    groups
}
