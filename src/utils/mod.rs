pub mod columns;
pub mod directive;
pub mod row_sort;
pub mod symbols;
