use std::sync::Arc;

use indexmap::IndexMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::components::sort_header::{Indicator, SortHeader};
use crate::components::state::QueryState;
use crate::models::{Cell, Row, SortMode};

const COL_SEP: &str = "  ";

/// One header per column key found in any row, in first-seen order.
///
/// A column whose first non-null value is a number gets a numeric header.
pub fn headers_for(rows: &[Arc<Row>], indicator: Indicator) -> Vec<SortHeader> {
    let mut modes: IndexMap<&str, Option<SortMode>> = IndexMap::new();
    for (key, cell) in rows.iter().flat_map(|r| r.iter()) {
        let mode = modes.entry(key.as_str()).or_default();
        if mode.is_none() {
            *mode = match cell {
                Cell::Null => None,
                Cell::Number(_) => Some(SortMode::Numeric),
                Cell::Text(_) => Some(SortMode::Alpha),
            };
        }
    }
    modes
        .into_iter()
        .map(|(key, mode)| {
            SortHeader::new(key, key).mode(mode.unwrap_or_default()).indicator(indicator)
        })
        .collect()
}

/// Render rows as left-aligned text columns, header line first
pub fn render_text<S: QueryState + ?Sized>(
    headers: &[SortHeader],
    rows: &[Arc<Row>],
    state: &S,
) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.iter().map(|h| h.label(state)).collect());
    for row in rows {
        lines.push(
            headers
                .iter()
                .map(|h| match row.get(&h.column) {
                    Some(cell) if !cell.is_null() => cell.to_string(),
                    _ => "-".into(),
                })
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| lines.iter().map(|l| width(&l[i])).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, w)| format!("{text}{}", " ".repeat(w - width(text))))
            .collect();
        out.push_str(cells.join(COL_SEP).trim_end());
        out.push('\n');
    }
    out
}

#[inline]
fn width(s: &str) -> usize {
    s.graphemes(true).count()
}
