//! Storage layer for the expense tracker
//!
//! Persists expenses to a single CSV table. The table is only ever created
//! or appended to; rows that fail to parse are skipped on load.

pub mod expenses;
pub mod table;

pub use expenses::{next_id, ExpenseStore};
pub use table::HEADER;
