//! Input validation for prompts
//!
//! Each function validates a single attempt. Date and amount errors are
//! `ExpenseError::Validation` carrying the message to show before
//! re-prompting; count inputs fall back to a default instead of failing.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Money, DATE_FORMAT, UNCATEGORIZED};

/// Parse a date entry; blank means `today`
pub fn parse_date_input(raw: &str, today: NaiveDate) -> ExpenseResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(today);
    }

    parse_date(raw).ok_or_else(|| {
        ExpenseError::Validation(format!("Invalid date format. Please use {}.", DATE_FORMAT))
    })
}

/// Parse an amount entry; it must be a number that is positive in cents
pub fn parse_amount_input(raw: &str) -> ExpenseResult<Money> {
    match Money::parse(raw) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        _ => Err(ExpenseError::Validation(
            "Enter a valid positive number for amount.".into(),
        )),
    }
}

/// Trimmed category, or `uncategorized` when blank
pub fn category_or_default(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        raw.to_string()
    }
}

/// Row limit for listings; blank, zero or unparseable means no limit
pub fn parse_limit(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(limit) => Some(limit),
    }
}

/// Number of extremes to show; defaults to 1 and is never below 1
pub fn parse_top_n(raw: &str) -> usize {
    raw.trim()
        .parse::<i64>()
        .map(|n| n.max(1) as usize)
        .unwrap_or(1)
}
