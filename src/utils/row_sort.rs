use std::sync::Arc;

use tracing::debug;

use crate::models::{Cell, Row, SortDirective, SortMode};
use crate::utils::columns::SortColumn;

/// Whether the data looks sortable under `mode` at `column`.
///
/// Only the first row is inspected: alphabetic needs a text value there,
/// numeric needs a number. An empty table is never recognized.
pub fn recognizes(rows: &[Arc<Row>], column: &str, mode: SortMode) -> bool {
    match (mode, rows.first().and_then(|r| r.get(column))) {
        (SortMode::Alpha, Some(Cell::Text(_))) => true,
        (SortMode::Numeric, Some(Cell::Number(_))) => true,
        _ => false,
    }
}

/// Order `rows` according to `directive`, returning a new sequence.
///
/// Without a directive, or when the first row does not match the directive's
/// mode, the input order is returned as is. Ties keep their input order.
pub fn sort_rows(rows: &[Arc<Row>], directive: Option<&SortDirective>) -> Vec<Arc<Row>> {
    let Some(directive) = directive else {
        return rows.to_vec();
    };
    if !recognizes(rows, &directive.column, directive.mode) {
        debug!(%directive, "Rows not recognized for sort mode, keeping input order");
        return rows.to_vec();
    }

    let col = SortColumn::new(&directive.column, directive.mode);
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| col.ordering(a, b, directive.dir));
    sorted
}
