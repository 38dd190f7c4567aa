//! Export module
//!
//! Copies the persisted table byte for byte to a user-chosen destination.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseStore;

/// Result of an export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The table does not exist; no destination file was created
    NothingToExport,
    /// The table was copied to this path
    Exported(PathBuf),
}

impl ExportOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::NothingToExport => "No data to export.".to_string(),
            ExportOutcome::Exported(path) => format!("Exported CSV to {}", path.display()),
        }
    }
}

/// Copy the table to `destination`, overwriting it
///
/// The source is read fully before the destination is opened, so exporting
/// onto the table itself leaves it intact.
pub fn export_table(store: &ExpenseStore, destination: &Path) -> ExpenseResult<ExportOutcome> {
    if !store.exists() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let contents = fs::read(store.path()).map_err(|e| {
        ExpenseError::Export(format!("Failed to read {}: {}", store.path().display(), e))
    })?;

    fs::write(destination, &contents).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to write {}: {}",
            destination.display(),
            e
        ))
    })?;

    info!(
        source = %store.path().display(),
        destination = %destination.display(),
        bytes = contents.len(),
        "exported expense table"
    );
    Ok(ExportOutcome::Exported(destination.to_path_buf()))
}
