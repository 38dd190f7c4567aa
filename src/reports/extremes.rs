//! Highest and lowest expenses report

use crate::display::{format_expense_line, separator};
use crate::models::Expense;

const WIDTH: usize = 72;

/// The `n` largest and `n` smallest expenses
#[derive(Debug, Clone)]
pub struct ExtremesReport {
    /// Requested number of entries per side
    pub n: usize,
    /// Largest first
    pub top: Vec<Expense>,
    /// Smallest first, or largest first when `n` exceeds the record count
    pub bottom: Vec<Expense>,
}

impl ExtremesReport {
    /// Find the extremes, or `None` if there are no expenses
    ///
    /// `n` below 1 is treated as 1. When `n` exceeds the number of expenses
    /// both sides contain every expense in descending order.
    pub fn generate(expenses: &[Expense], n: usize) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }
        let n = n.max(1);

        let mut by_amount = expenses.to_vec();
        by_amount.sort_by(|a, b| b.amount.cmp(&a.amount));

        let top = by_amount.iter().take(n).cloned().collect();
        let bottom = if n > by_amount.len() {
            by_amount
        } else {
            by_amount.iter().rev().take(n).cloned().collect()
        };

        Some(Self { n, top, bottom })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nTop {} highest expenses:\n", self.n));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for expense in &self.top {
            output.push_str(&format_expense_line(expense));
            output.push('\n');
        }

        output.push_str(&format!("\nTop {} lowest expenses:\n", self.n));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for expense in &self.bottom {
            output.push_str(&format_expense_line(expense));
            output.push('\n');
        }

        output
    }
}
