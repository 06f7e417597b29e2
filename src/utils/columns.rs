use std::cmp::Ordering;

use crate::models::{Cell, Row, SortDir, SortMode};

/// A sortable column: the row key it reads and how its values compare.
#[derive(Debug, Clone, Copy)]
pub struct SortColumn<'a> {
    pub key: &'a str,
    pub mode: SortMode,
}

impl<'a> SortColumn<'a> {
    pub fn new(key: &'a str, mode: SortMode) -> Self {
        Self { key, mode }
    }

    /// Sort key of `row` under this column's mode
    pub fn sort_key(&self, row: &Row) -> SortKey {
        match (self.mode, row.get(self.key)) {
            (_, None | Some(Cell::Null)) => SortKey::Missing,
            (SortMode::Alpha, Some(cell)) => SortKey::Str(cell.as_text().to_uppercase()),
            (SortMode::Numeric, Some(Cell::Number(n))) if !n.is_nan() => SortKey::F64(*n),
            // text or NaN in a numeric column sorts like a missing value
            (SortMode::Numeric, Some(_)) => SortKey::Missing,
        }
    }

    /// Compare two rows based on this column
    #[inline]
    pub fn cmp(&self, a: &Row, b: &Row) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    #[inline]
    pub fn ordering(&self, a: &Row, b: &Row, dir: SortDir) -> Ordering {
        let ord = self.cmp(a, b);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

/// Comparable projection of a cell. `Missing` is smaller than any value.
#[derive(Debug, Clone)]
pub enum SortKey {
    Missing,
    Str(String),
    F64(f64),
}

impl SortKey {
    pub fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (F64(a), F64(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Str(a), Str(b)) => a.cmp(b),
            // a column is projected with a single mode, so these never meet
            (F64(_), Str(_)) => Ordering::Less,
            (Str(_), F64(_)) => Ordering::Greater,
        }
    }
}
