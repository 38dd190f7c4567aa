//! Core data models for the expense tracker
//!
//! - `Expense`: a single logged expense
//! - `ExpenseId`: sequential record identifier
//! - `Money`: two-decimal amounts stored as cents

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{parse_date, Expense, NewExpense, DATE_FORMAT, UNCATEGORIZED};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
