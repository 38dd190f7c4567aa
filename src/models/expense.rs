//! Expense model
//!
//! An expense is created once through interactive entry, appended to the
//! table and never modified afterwards.

use chrono::NaiveDate;

use super::{ExpenseId, Money};

/// Date format used both on disk and at the prompt
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Category used when none is given
pub const UNCATEGORIZED: &str = "uncategorized";

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Sequential identifier
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Amount spent
    pub amount: Money,

    /// Category exactly as entered
    pub category: String,

    /// Free-text description, may be empty
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// The date as stored on disk (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Grouping key for monthly summaries (`YYYY-MM`)
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Grouping key for category summaries
    ///
    /// Lower-cased and trimmed; an empty category groups as
    /// [`UNCATEGORIZED`].
    pub fn category_key(&self) -> String {
        let key = self.category.trim().to_lowercase();
        if key.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            key
        }
    }

    /// Whether the description or category contains `needle`
    ///
    /// `needle` must already be lower-case.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// A validated expense that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

impl NewExpense {
    /// Attach an id, producing the record to persist
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
        }
    }
}

/// Parse a date in the stored `YYYY-MM-DD` format
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
