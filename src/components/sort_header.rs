use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use crate::components::state::QueryState;
use crate::models::{SortDir, SortMode};
use crate::utils::directive::{SORT_KEY, decode, decode_tokens, next_directive};
use crate::utils::symbols::{INDICATOR_GAP, arrow, triangle};

/// Glyph set used to mark the sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Indicator {
    #[default]
    Arrow,
    Triangle,
}

impl Indicator {
    pub fn symbol(self, dir: SortDir) -> &'static str {
        match (self, dir) {
            (Indicator::Arrow, SortDir::Asc) => arrow::UP,
            (Indicator::Arrow, SortDir::Desc) => arrow::DOWN,
            (Indicator::Triangle, SortDir::Asc) => triangle::UP,
            (Indicator::Triangle, SortDir::Desc) => triangle::DOWN,
        }
    }
}

/// A clickable column header.
///
/// Activating it writes the next directive into the shared query state;
/// the label shows the direction when its column is the sorted one.
#[derive(Debug, Clone)]
pub struct SortHeader {
    pub title: String,
    pub column: String,
    pub mode: SortMode,
    pub indicator: Indicator,
}

impl SortHeader {
    pub fn new(title: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            column: column.into(),
            mode: SortMode::Alpha,
            indicator: Indicator::default(),
        }
    }

    pub fn mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn activate<S: QueryState + ?Sized>(&self, state: &mut S) {
        let current = decode_tokens(state.get(SORT_KEY));
        let next = next_directive(current, &self.column, self.mode);
        debug!(column = %self.column, %next, "Sort header activated");
        state.propose(SORT_KEY, next);
    }

    /// Direction of this header's column, if it is the sorted one
    pub fn sorted_dir<S: QueryState + ?Sized>(&self, state: &S) -> Option<SortDir> {
        decode(state.get(SORT_KEY)).filter(|d| d.column == self.column).map(|d| d.dir)
    }

    pub fn label<S: QueryState + ?Sized>(&self, state: &S) -> String {
        match self.sorted_dir(state) {
            Some(dir) => format!("{}{INDICATOR_GAP}{}", self.title, self.indicator.symbol(dir)),
            None => self.title.clone(),
        }
    }
}
