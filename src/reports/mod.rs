//! Reports module
//!
//! Aggregations over the loaded expenses:
//! - Monthly: totals, counts and averages per `YYYY-MM`
//! - Category: totals, counts and share of the grand total per category
//! - Extremes: the highest and lowest individual expenses
//!
//! Each report's `generate` returns `None` when there are no expenses.

pub mod category;
pub mod extremes;
pub mod monthly;

pub use category::{CategoryReport, CategorySummary};
pub use extremes::ExtremesReport;
pub use monthly::{MonthlyReport, MonthlySummary};
