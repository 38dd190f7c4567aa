//! Expense Tracker - interactive command-line expense logger
//!
//! Records expenses in a flat CSV table and reports on them: recent
//! listings, monthly and category summaries, highest/lowest entries, text
//! search and verbatim export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the table and exports
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, money)
//! - `storage`: CSV table storage
//! - `reports`: Monthly, category and extremes aggregations
//! - `query`: Text search and date ordering
//! - `display`: Fixed-width terminal formatting
//! - `export`: Table backup copies
//! - `shell`: Interactive menu loop
//! - `cli`: One-shot subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = ExpensePaths::resolve(None)?;
//! let expenses = ExpenseStore::new(&paths).load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
