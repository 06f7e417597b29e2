use std::sync::Arc;

use tracing::trace;

use crate::components::state::QueryState;
use crate::models::{Row, SortDirective};
use crate::utils::directive::{SORT_KEY, decode};
use crate::utils::row_sort::sort_rows;

/// Sorted view over a shared row sequence, recomputed only when the rows
/// (by identity) or the decoded directive change.
#[derive(Debug, Default)]
pub struct SortedTable {
    cache: Option<Cached>,
}

#[derive(Debug)]
struct Cached {
    rows: Arc<[Arc<Row>]>,
    directive: Option<SortDirective>,
    view: Arc<[Arc<Row>]>,
}

impl SortedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view<S: QueryState + ?Sized>(&mut self, rows: &Arc<[Arc<Row>]>, state: &S) -> Arc<[Arc<Row>]> {
        let directive = decode(state.get(SORT_KEY));
        if let Some(cached) = &self.cache
            && Arc::ptr_eq(&cached.rows, rows)
            && cached.directive == directive
        {
            return Arc::clone(&cached.view);
        }

        trace!(rows = rows.len(), ?directive, "Computing sorted view");
        let view = match &directive {
            None => Arc::clone(rows),
            Some(d) => Arc::from(sort_rows(rows, Some(d))),
        };
        self.cache = Some(Cached { rows: Arc::clone(rows), directive, view: Arc::clone(&view) });
        view
    }
}
