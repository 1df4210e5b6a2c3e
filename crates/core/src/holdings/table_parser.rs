//! Holdings table extraction from HTML markup.
//!
//! Holdings pages are an external, uncontrolled format. The parser reads every
//! `tr` in document order, skips the first one as the header, and maps `td`
//! cells to fields through a [`ColumnLayout`]. Layout drift on the source side
//! is therefore a one-place change.

use log::{debug, error};
use scraper::{ElementRef, Html, Selector};

use super::holdings_model::HoldingRow;
use crate::constants::MIN_HOLDING_CELLS;

/// Cell positions of the holding fields inside a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub symbol: usize,
    pub name: usize,
    pub weight: usize,
    pub shares: Option<usize>,
    /// Rows with fewer cells are not holdings and are skipped
    pub min_cells: usize,
}

impl ColumnLayout {
    /// `[no., symbol, name, % weight, ...]`
    pub const fn standard() -> Self {
        Self {
            symbol: 1,
            name: 2,
            weight: 3,
            shares: None,
            min_cells: MIN_HOLDING_CELLS,
        }
    }

    /// `[no., symbol, name, % weight, shares]`
    pub const fn extended() -> Self {
        Self {
            shares: Some(4),
            ..Self::standard()
        }
    }

    /// Whether a row with these cells is a holding row.
    pub fn accepts(&self, cells: &[String]) -> bool {
        cells.len() >= self.min_cells
    }

    /// Maps the cells of an accepted row to a [`HoldingRow`].
    pub fn extract(&self, cells: &[String]) -> Option<HoldingRow> {
        if !self.accepts(cells) {
            return None;
        }
        Some(HoldingRow {
            symbol: cells.get(self.symbol)?.clone(),
            name: cells.get(self.name)?.clone(),
            weight: cells.get(self.weight)?.clone(),
            shares: self.shares.and_then(|idx| cells.get(idx)).cloned(),
        })
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parses holdings rows using the standard column layout.
pub fn parse_holdings(html: &str) -> Vec<HoldingRow> {
    parse_holdings_with_layout(html, &ColumnLayout::standard())
}

/// Parses holdings rows in document order.
///
/// An empty result means the document has no recognizable holdings table; it
/// is not an error.
pub fn parse_holdings_with_layout(html: &str, layout: &ColumnLayout) -> Vec<HoldingRow> {
    let (row_selector, cell_selector) = match (Selector::parse("tr"), Selector::parse("td")) {
        (Ok(rows), Ok(cells)) => (rows, cells),
        _ => {
            error!("Failed to build table selectors");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let mut skipped = 0usize;
    let rows: Vec<HoldingRow> = document
        .select(&row_selector)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
            let holding = layout.extract(&cells);
            if holding.is_none() {
                skipped += 1;
            }
            holding
        })
        .collect();

    debug!(
        "Parsed {} holding rows ({} short rows skipped)",
        rows.len(),
        skipped
    );
    rows
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
