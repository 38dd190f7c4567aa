//! Display formatting for terminal output
//!
//! Fixed-width listings and one-line record summaries shared by the
//! interactive shell and the one-shot commands.

pub mod expense;
pub mod report;

pub use expense::{
    format_expense_line, format_expense_list, format_saved_confirmation, format_search_results,
};
pub use report::{
    render_categories, render_extremes, render_listing, render_monthly, render_search,
};

/// Message shown whenever a report has nothing to work with
pub const NO_EXPENSES: &str = "No expenses recorded yet.";

/// Format a dashed separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
