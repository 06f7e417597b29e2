pub mod sort_header;
pub mod sorted_table;
pub mod state;
pub mod table;
