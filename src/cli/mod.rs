//! One-shot CLI commands
//!
//! Every menu action of the interactive shell is also available as a
//! subcommand; running without one starts the shell. Output matches the
//! shell; validation failures are returned as errors instead of
//! re-prompting.

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::paths::{DEFAULT_EXPORT_FILE, TABLE_FILE_ENV};
use crate::config::ExpensePaths;
use crate::display::{
    format_saved_confirmation, render_categories, render_extremes, render_listing,
    render_monthly, render_search,
};
use crate::error::ExpenseResult;
use crate::export::export_table;
use crate::models::NewExpense;
use crate::shell::validate::{category_or_default, parse_amount_input, parse_date_input};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Amount spent (positive number)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category, defaults to "uncategorized"
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List expenses, most recent first
    List {
        /// Number of expenses to show (0 for all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// Show totals per month
    Monthly,

    /// Show totals per category
    Categories,

    /// Show the highest and lowest expenses
    Extremes {
        /// Number of entries on each side
        #[arg(short, default_value = "1")]
        n: usize,
    },

    /// Search category and description text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Copy the expense table to another file
    Export {
        /// Destination file
        #[arg(default_value = DEFAULT_EXPORT_FILE)]
        destination: PathBuf,
    },

    /// Show resolved file locations
    Config,
}

/// Handle a one-shot command, writing its output to `out`
pub fn handle_command<W: Write>(
    paths: &ExpensePaths,
    cmd: ExpenseCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    let store = ExpenseStore::new(paths);

    match cmd {
        ExpenseCommands::Add {
            amount,
            date,
            category,
            description,
        } => {
            let today = Local::now().date_naive();
            let draft = NewExpense {
                date: parse_date_input(date.as_deref().unwrap_or(""), today)?,
                amount: parse_amount_input(&amount)?,
                category: category_or_default(category.as_deref().unwrap_or("")),
                description: description.trim().to_string(),
            };
            let expense = store.add(draft)?;
            writeln!(out, "{}", format_saved_confirmation(&expense))?;
        }
        ExpenseCommands::List { limit } => {
            let limit = (limit > 0).then_some(limit);
            write!(out, "{}", render_listing(&store.load_all()?, limit))?;
        }
        ExpenseCommands::Monthly => {
            write!(out, "{}", render_monthly(&store.load_all()?))?;
        }
        ExpenseCommands::Categories => {
            write!(out, "{}", render_categories(&store.load_all()?))?;
        }
        ExpenseCommands::Extremes { n } => {
            write!(out, "{}", render_extremes(&store.load_all()?, n.max(1)))?;
        }
        ExpenseCommands::Search { query } => {
            let query = query.trim();
            if query.is_empty() {
                writeln!(out, "Empty query.")?;
            } else {
                write!(out, "{}", render_search(&store.load_all()?, query))?;
            }
        }
        ExpenseCommands::Export { destination } => {
            let destination = paths.export_destination(&destination.to_string_lossy());
            let outcome = export_table(&store, &destination)?;
            writeln!(out, "{}", outcome.message())?;
        }
        ExpenseCommands::Config => {
            writeln!(out, "Expense Tracker Configuration")?;
            writeln!(out, "=============================")?;
            writeln!(out, "Table file:     {}", paths.table_file().display())?;
            writeln!(out, "Default export: {}", paths.default_export_file().display())?;
            writeln!(out, "Override with --file or {}", TABLE_FILE_ENV)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(paths: &ExpensePaths, cmd: ExpenseCommands) -> ExpenseResult<String> {
        let mut out = Vec::new();
        handle_command(paths, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn test_paths() -> (TempDir, ExpensePaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_table_file(temp_dir.path().join("expenses.csv"));
        (temp_dir, paths)
    }

    fn add(paths: &ExpensePaths, amount: &str, date: &str, category: &str) -> String {
        run(
            paths,
            ExpenseCommands::Add {
                amount: amount.into(),
                date: Some(date.into()),
                category: Some(category.into()),
                description: String::new(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, paths) = test_paths();

        let saved = add(&paths, "9.99", "2024-04-01", "Books");
        assert_eq!(saved, "Saved expense #1: 2024-04-01 9.99 Books — \n");

        let listing = run(&paths, ExpenseCommands::List { limit: 0 }).unwrap();
        assert!(listing.contains("Showing 1 expenses (most recent first):"));
        assert!(listing.contains("Books"));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, paths) = test_paths();

        let err = run(
            &paths,
            ExpenseCommands::Add {
                amount: "-1".into(),
                date: None,
                category: None,
                description: String::new(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = run(
            &paths,
            ExpenseCommands::Add {
                amount: "1".into(),
                date: Some("tomorrow".into()),
                category: None,
                description: String::new(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());

        let store = ExpenseStore::new(&paths);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_reports() {
        let (_temp_dir, paths) = test_paths();
        add(&paths, "10", "2024-01-10", "Food");
        add(&paths, "20", "2024-01-20", "food");

        let monthly = run(&paths, ExpenseCommands::Monthly).unwrap();
        assert!(monthly.contains("2024-01         30.00       2       15.00"));

        let categories = run(&paths, ExpenseCommands::Categories).unwrap();
        assert!(categories.contains("food                         30.00       2     100.00%"));

        let extremes = run(&paths, ExpenseCommands::Extremes { n: 0 }).unwrap();
        assert!(extremes.contains("Top 1 highest expenses:"));

        let found = run(
            &paths,
            ExpenseCommands::Search {
                query: "FOO".into(),
            },
        )
        .unwrap();
        assert!(found.contains("Found 2 matching expenses:"));

        let empty = run(&paths, ExpenseCommands::Search { query: "  ".into() }).unwrap();
        assert_eq!(empty, "Empty query.\n");
    }

    #[test]
    fn test_export_nothing() {
        let (temp_dir, paths) = test_paths();
        let destination = temp_dir.path().join("out.csv");

        let output = run(
            &paths,
            ExpenseCommands::Export {
                destination: destination.clone(),
            },
        )
        .unwrap();

        assert_eq!(output, "No data to export.\n");
        assert!(!destination.exists());
    }

    #[test]
    fn test_export_copy() {
        let (temp_dir, paths) = test_paths();
        add(&paths, "1", "2024-01-01", "a");
        let destination = temp_dir.path().join("out.csv");

        run(
            &paths,
            ExpenseCommands::Export {
                destination: destination.clone(),
            },
        )
        .unwrap();

        assert_eq!(
            fs::read(&destination).unwrap(),
            fs::read(paths.table_file()).unwrap()
        );
    }

    #[test]
    fn test_config_output() {
        let (_temp_dir, paths) = test_paths();
        let output = run(&paths, ExpenseCommands::Config).unwrap();
        assert!(output.contains(&paths.table_file().display().to_string()));
        assert!(output.contains("expenses_backup.csv"));
    }
}
