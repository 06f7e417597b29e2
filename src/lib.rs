//! Sortable table headers driven by a `sort` query parameter.
//!
//! The directive `"<column> <asc|desc> <a|n>"` lives in externally owned
//! query state ([`components::state::QueryState`]). [`SortHeader`] proposes the
//! next directive when activated and [`SortedTable`] derives the sorted rows
//! from the current one.

pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod utils;

pub use components::sort_header::{Indicator, SortHeader};
pub use components::sorted_table::SortedTable;
pub use components::state::{QueryState, SearchParams};
pub use models::{Cell, Row, SortDir, SortDirective, SortMode};
