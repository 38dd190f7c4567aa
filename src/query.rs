//! Query engine
//!
//! Text search and date ordering over loaded expenses.

use crate::models::Expense;

/// Sort expenses newest first; expenses on the same day keep their order
pub fn sort_by_date_desc(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}

/// The most recent expenses, truncated to `limit` when given
pub fn most_recent(expenses: &[Expense], limit: Option<usize>) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sort_by_date_desc(&mut sorted);
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Case-insensitive substring search over description and category
///
/// Matches are returned newest first. Callers reject empty queries.
pub fn search(expenses: &[Expense], query: &str) -> Vec<Expense> {
    let needle = query.to_lowercase();
    let mut found: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.matches_lowercase(&needle))
        .cloned()
        .collect();
    sort_by_date_desc(&mut found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn expense(id: u64, date: &str, category: &str, description: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Money::from_cents(100),
            category,
            description,
        )
    }

    fn ids(list: &[Expense]) -> Vec<u64> {
        list.iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_search_matches_category_case_insensitively() {
        let expenses = vec![
            expense(1, "2024-01-01", "Groceries", "milk"),
            expense(2, "2024-01-02", "Rent", "january"),
        ];
        assert_eq!(ids(&search(&expenses, "gro")), vec![1]);
        assert_eq!(ids(&search(&expenses, "GRO")), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        let expenses = vec![
            expense(1, "2024-01-01", "Food", "Farmers Market"),
            expense(2, "2024-01-02", "Transport", "bus pass"),
        ];
        assert_eq!(ids(&search(&expenses, "market")), vec![1]);
        assert!(search(&expenses, "plane").is_empty());
    }

    #[test]
    fn test_search_results_newest_first() {
        let expenses = vec![
            expense(1, "2024-01-05", "coffee", ""),
            expense(2, "2024-03-01", "coffee", ""),
            expense(3, "2024-02-01", "tea", "not coffee"),
        ];
        assert_eq!(ids(&search(&expenses, "coffee")), vec![2, 3, 1]);
    }

    #[test]
    fn test_most_recent() {
        let expenses = vec![
            expense(1, "2024-01-05", "a", ""),
            expense(2, "2024-03-01", "b", ""),
            expense(3, "2024-03-01", "c", ""),
            expense(4, "2023-12-31", "d", ""),
        ];
        assert_eq!(ids(&most_recent(&expenses, None)), vec![2, 3, 1, 4]);
        assert_eq!(ids(&most_recent(&expenses, Some(2))), vec![2, 3]);
        assert_eq!(ids(&most_recent(&expenses, Some(10))).len(), 4);
    }
}
