//! Row codec for the persisted CSV table
//!
//! Converts between CSV records and [`Expense`] values. Columns are located
//! by header name; a row that is missing a column or carries an
//! unparseable id, date or amount decodes to `None`.

use csv::StringRecord;
use serde::Serialize;

use crate::models::{parse_date, Expense, ExpenseId, Money};

/// Header row of the persisted table
pub const HEADER: [&str; 5] = ["id", "date", "amount", "category", "description"];

/// On-disk shape of one row
#[derive(Debug, Serialize)]
pub struct ExpenseRow<'a> {
    id: u64,
    date: String,
    amount: String,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.value(),
            date: expense.date_string(),
            amount: expense.amount.to_string(),
            category: &expense.category,
            description: &expense.description,
        }
    }
}

/// Positions of each required column in the header
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    id: Option<usize>,
    date: Option<usize>,
    amount: Option<usize>,
    category: Option<usize>,
    description: Option<usize>,
}

impl Columns {
    /// Locate the required columns in a header record
    pub fn from_header(header: &StringRecord) -> Self {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        Self {
            id: find("id"),
            date: find("date"),
            amount: find("amount"),
            category: find("category"),
            description: find("description"),
        }
    }

    /// Whether every required column is present
    pub fn is_complete(&self) -> bool {
        self.id.is_some()
            && self.date.is_some()
            && self.amount.is_some()
            && self.category.is_some()
            && self.description.is_some()
    }

    /// Decode one record, or `None` if any field is missing or malformed
    pub fn decode(&self, record: &StringRecord) -> Option<Expense> {
        let field = |index: Option<usize>| index.and_then(|i| record.get(i));

        let id: ExpenseId = field(self.id)?.parse().ok()?;
        let date = parse_date(field(self.date)?)?;
        let amount = Money::parse(field(self.amount)?).ok()?;
        let category = field(self.category)?;
        let description = field(self.description)?;

        Some(Expense::new(id, date, amount, category, description))
    }
}
