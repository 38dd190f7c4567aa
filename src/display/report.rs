//! Rendering of complete report screens
//!
//! Each function performs the whole query-and-format step for one menu
//! action so the shell and the one-shot commands print identical text.

use super::{format_expense_list, format_search_results, NO_EXPENSES};
use crate::models::Expense;
use crate::query;
use crate::reports::{CategoryReport, ExtremesReport, MonthlyReport};

fn no_expenses() -> String {
    format!("{}\n", NO_EXPENSES)
}

/// Most recent expenses as a table, capped at `limit` rows
pub fn render_listing(expenses: &[Expense], limit: Option<usize>) -> String {
    format_expense_list(&query::most_recent(expenses, limit))
}

/// Monthly summary table
pub fn render_monthly(expenses: &[Expense]) -> String {
    MonthlyReport::generate(expenses).map_or_else(no_expenses, |r| r.format_terminal())
}

/// Category summary table
pub fn render_categories(expenses: &[Expense]) -> String {
    CategoryReport::generate(expenses).map_or_else(no_expenses, |r| r.format_terminal())
}

/// Highest and lowest `n` expenses
pub fn render_extremes(expenses: &[Expense], n: usize) -> String {
    ExtremesReport::generate(expenses, n).map_or_else(no_expenses, |r| r.format_terminal())
}

/// Search results for a non-empty query
pub fn render_search(expenses: &[Expense], text: &str) -> String {
    format_search_results(text, &query::search(expenses, text))
}
