//! Pure table helpers: header derivation and the client-side row filter.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::{Row, cell_filter_text};

/// Column headers taken from the first row's keys.
///
/// Later rows are never consulted, so an empty dataset has no header.
pub fn header_columns(rows: &[Row]) -> Vec<String> {
    rows.first().map(|row| row.keys().cloned().collect()).unwrap_or_default()
}

/// Whether any cell of `row` contains `needle_lower`.
///
/// `needle_lower` must already be lowercased.
pub fn row_matches(row: &Row, needle_lower: &str) -> bool {
    row.values()
        .any(|value| cell_filter_text(value).to_lowercase().contains(needle_lower))
}

/// Rows with at least one cell containing `filter`, case-insensitively.
///
/// Order is preserved and `rows` is left untouched. An empty filter keeps
/// every row.
pub fn filter_rows(rows: &[Row], filter: &str) -> Vec<Row> {
    let needle = filter.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

/// Stripe class for a body row at `index` within the visible rows.
pub fn row_stripe_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "variable-table__row variable-table__row--even"
    } else {
        "variable-table__row variable-table__row--odd"
    }
}
