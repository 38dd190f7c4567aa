//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file` command-line flag (if given)
//! 2. `EXPENSE_TRACKER_FILE` environment variable (if set)
//! 3. `expenses.csv` in the current directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable overriding the persisted table location
pub const TABLE_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Table file used when nothing else is configured
pub const DEFAULT_TABLE_FILE: &str = "expenses.csv";

/// Export destination used when the user leaves the prompt blank
pub const DEFAULT_EXPORT_FILE: &str = "expenses_backup.csv";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    /// The persisted table
    table_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional explicit override, the environment,
    /// then the built-in default
    pub fn resolve(override_file: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let table_file = match override_file {
            Some(path) => path,
            None => match std::env::var(TABLE_FILE_ENV) {
                Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
                Ok(_) => {
                    return Err(ExpenseError::Config(format!(
                        "{} is set but empty",
                        TABLE_FILE_ENV
                    )))
                }
                Err(_) => PathBuf::from(DEFAULT_TABLE_FILE),
            },
        };

        Ok(Self {
            table_file: expand_home(&table_file),
        })
    }

    /// Create paths pointing at a specific table file (useful for testing)
    pub fn with_table_file(table_file: PathBuf) -> Self {
        Self { table_file }
    }

    /// Get the path of the persisted table
    pub fn table_file(&self) -> &Path {
        &self.table_file
    }

    /// Get the default export destination
    pub fn default_export_file(&self) -> PathBuf {
        PathBuf::from(DEFAULT_EXPORT_FILE)
    }

    /// Resolve a user-entered export destination, falling back to the
    /// default when blank
    pub fn export_destination(&self, raw: &str) -> PathBuf {
        let raw = raw.trim();
        if raw.is_empty() {
            self.default_export_file()
        } else {
            expand_home(Path::new(raw))
        }
    }
}

/// Expand a leading `~` to the user's home directory
///
/// Paths without a leading `~`, or when no home directory can be
/// determined, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}
