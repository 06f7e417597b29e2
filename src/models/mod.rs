mod row;
pub mod sort;

pub use row::{Cell, Row};
pub use sort::{SortDir, SortDirective, SortMode};
