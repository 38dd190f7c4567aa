//! Category summary report

use std::collections::HashMap;

use crate::display::separator;
use crate::models::{Expense, Money};

const WIDTH: usize = 60;

/// Totals for one normalized category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Lower-cased, trimmed category name
    pub category: String,
    /// Sum of amounts in the category
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Per-category totals, largest first
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    /// Sum of every expense amount
    pub grand_total: Money,
}

impl CategoryReport {
    /// Group expenses by normalized category, or `None` if there are none
    ///
    /// Categories with equal totals keep the order in which they first
    /// appear.
    pub fn generate(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Money, usize)> = Vec::new();

        for expense in expenses {
            let key = expense.category_key();
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                groups.push((key, Money::zero(), 0));
                groups.len() - 1
            });
            groups[slot].1 += expense.amount;
            groups[slot].2 += 1;
        }

        let grand_total: Money = groups.iter().map(|(_, total, _)| *total).sum();

        let mut categories: Vec<CategorySummary> = groups
            .into_iter()
            .map(|(category, total, count)| CategorySummary {
                category,
                total,
                count,
                percentage: total.percent_of(grand_total),
            })
            .collect();
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Some(Self {
            categories,
            grand_total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("\nCategory summary (descending by amount):\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<20}  {:>12}  {:>6}  {:>10}\n",
            "Category", "Total", "Count", "Percent"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for summary in &self.categories {
            output.push_str(&format!(
                "{:<20}  {:>12}  {:>6}  {:>9.2}%\n",
                summary.category, summary.total, summary.count, summary.percentage
            ));
        }

        output.push_str(&separator(WIDTH));
        output.push('\n');
        output
    }
}
