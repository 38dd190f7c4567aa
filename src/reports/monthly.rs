//! Monthly summary report

use std::collections::BTreeMap;

use crate::display::separator;
use crate::models::{Expense, Money};

const WIDTH: usize = 40;

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Sum of amounts in the month
    pub total: Money,
    /// Number of expenses in the month
    pub count: usize,
}

impl MonthlySummary {
    /// Mean amount per expense in the month
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total.as_f64() / self.count as f64
        }
    }
}

/// Per-month totals, most recent month first
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub months: Vec<MonthlySummary>,
}

impl MonthlyReport {
    /// Group expenses by month, or `None` if there are none
    pub fn generate(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut by_month: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = by_month
                .entry(expense.month_key())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        // `YYYY-MM` keys sort chronologically
        let months = by_month
            .into_iter()
            .rev()
            .map(|(month, (total, count))| MonthlySummary {
                month,
                total,
                count,
            })
            .collect();

        Some(Self { months })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("\nMonthly summary:\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<7}  {:>12}  {:>6}  {:>10}\n",
            "Month", "Total", "Count", "Average"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for summary in &self.months {
            output.push_str(&format!(
                "{:<7}  {:>12}  {:>6}  {:>10.2}\n",
                summary.month,
                summary.total,
                summary.count,
                summary.average()
            ));
        }

        output.push_str(&separator(WIDTH));
        output.push('\n');
        output
    }
}
