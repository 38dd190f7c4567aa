//! Expense repository for CSV storage
//!
//! Manages creating, loading and appending to the expense table.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::table::{Columns, ExpenseRow, HEADER};

/// Compute the id for the next record: one past the largest id in use
pub fn next_id(expenses: &[Expense]) -> ExpenseResult<ExpenseId> {
    ExpenseId::next_after(expenses.iter().map(|e| e.id))
        .ok_or_else(|| ExpenseError::Storage("id space exhausted".to_string()))
}

/// Repository for the persisted expense table
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the configured table file
    pub fn new(paths: &ExpensePaths) -> Self {
        Self {
            path: paths.table_file().to_path_buf(),
        }
    }

    /// Get the path of the table file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the table file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the table with its header row if it does not exist yet
    ///
    /// An existing but empty file also receives the header. Existing content
    /// is never touched.
    pub fn ensure_initialized(&self) -> ExpenseResult<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to inspect {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if !needs_header {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv_writer(File::create(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?);
        writer.write_record(HEADER)?;
        writer.flush()?;

        debug!(path = %self.path.display(), "initialized expense table");
        Ok(())
    }

    /// Load every valid record in on-disk order
    ///
    /// Rows with a malformed id, date or amount, or with a missing column,
    /// are skipped.
    pub fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.ensure_initialized()?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let columns = Columns::from_header(reader.headers()?);
        if !columns.is_complete() {
            debug!(path = %self.path.display(), "table header is missing required columns");
        }

        let mut expenses = Vec::new();
        let mut skipped = 0usize;

        for (index, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!(row = index + 1, error = %e, "skipping unreadable row");
                    skipped += 1;
                    continue;
                }
            };

            match columns.decode(&record) {
                Some(expense) => expenses.push(expense),
                None => {
                    debug!(row = index + 1, "skipping malformed row");
                    skipped += 1;
                }
            }
        }

        debug!(loaded = expenses.len(), skipped, "loaded expense table");
        Ok(expenses)
    }

    /// Append one record to the end of the table
    pub fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        self.ensure_initialized()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        // A hand-edited file may lack its final newline
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv_writer(file);
        writer.serialize(ExpenseRow::from(expense))?;
        writer.flush()?;

        debug!(id = %expense.id, "appended expense");
        Ok(())
    }

    /// Assign the next id to a validated expense and append it
    pub fn add(&self, draft: NewExpense) -> ExpenseResult<Expense> {
        let existing = self.load_all()?;
        let expense = draft.with_id(next_id(&existing)?);
        self.append(&expense)?;
        Ok(expense)
    }
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn ends_with_newline(file: &mut File) -> ExpenseResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
