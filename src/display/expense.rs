//! Expense display formatting

use super::{separator, NO_EXPENSES};
use crate::models::Expense;

const LIST_WIDTH: usize = 72;

/// Format one expense as `#id date amount category — description`
pub fn format_expense_line(expense: &Expense) -> String {
    format!(
        "#{} {} {} {} — {}",
        expense.id,
        expense.date_string(),
        expense.amount,
        expense.category,
        expense.description
    )
}

/// Confirmation printed after an expense is saved
pub fn format_saved_confirmation(expense: &Expense) -> String {
    format!(
        "Saved expense #{}: {} {} {} — {}",
        expense.id,
        expense.date_string(),
        expense.amount,
        expense.category,
        expense.description
    )
}

/// Format expenses as a fixed-width table
///
/// `expenses` should already be sorted and truncated for display.
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_EXPENSES);
    }

    let mut output = String::new();

    output.push_str(&format!(
        "\nShowing {} expenses (most recent first):\n",
        expenses.len()
    ));
    output.push_str(&separator(LIST_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:>3}  {:<10}  {:>10}  {:<20}  Description\n",
        "ID", "Date", "Amount", "Category"
    ));
    output.push_str(&separator(LIST_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:>3}  {:<10}  {:>10}  {:<20}  {}\n",
            expense.id,
            expense.date_string(),
            expense.amount,
            expense.category,
            expense.description
        ));
    }

    output.push_str(&separator(LIST_WIDTH));
    output.push('\n');
    output
}

/// Format the results of a text search
pub fn format_search_results(query: &str, matches: &[Expense]) -> String {
    if matches.is_empty() {
        return format!("No expenses matching '{}'.\n", query);
    }

    let mut output = format!("\nFound {} matching expenses:\n", matches.len());
    for expense in matches {
        output.push_str(&format_expense_line(expense));
        output.push('\n');
    }
    output
}
