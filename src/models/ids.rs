//! Sequential record identifiers
//!
//! Ids are assigned as one greater than the largest id already stored, so
//! they stay unique even when rows have been dropped from the table.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first record of an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an id from its numeric value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` at the end of the id space
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Compute the id for a new record given the ids already in use
    ///
    /// Returns `None` when the largest id in use has no successor.
    pub fn next_after<I>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        match ids.into_iter().max() {
            Some(max) => max.next(),
            None => Some(Self::FIRST),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
