//! Interactive menu shell
//!
//! Drives the menu loop over any line-oriented input and output, so the
//! same code runs against a terminal or scripted input in tests. End of
//! input surfaces as [`ExpenseError::Interrupted`].

pub mod menu;
pub mod validate;

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::ExpensePaths;
use crate::display::{
    format_saved_confirmation, render_categories, render_extremes, render_listing,
    render_monthly, render_search,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_table;
use crate::models::NewExpense;
use crate::storage::ExpenseStore;

pub use menu::{MenuChoice, MENU};
use validate::{category_or_default, parse_amount_input, parse_date_input, parse_limit, parse_top_n};

/// Farewell printed when the user interrupts the shell
pub const INTERRUPT_FAREWELL: &str = "\nExiting (keyboard interrupt). Bye.";

/// Interactive expense shell
pub struct Shell<R, W> {
    paths: ExpensePaths,
    store: ExpenseStore,
    input: R,
    output: W,
    /// Fixed "today" for blank date entries; the local date when unset
    today: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the configured table
    pub fn new(paths: ExpensePaths, input: R, output: W) -> Self {
        Self {
            store: ExpenseStore::new(&paths),
            paths,
            input,
            output,
            today: None,
        }
    }

    /// Pin the date used for blank date entries
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Run the menu loop until the user exits
    ///
    /// Returns `Err(ExpenseError::Interrupted)` if input ends before the
    /// user picks Exit.
    pub fn run(&mut self) -> ExpenseResult<()> {
        self.store.ensure_initialized()?;

        loop {
            self.output.write_all(MENU.as_bytes())?;
            let choice = self.prompt("Choose option: ")?;

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                Some(choice) => {
                    debug!(?choice, "menu action");
                    self.dispatch(choice)?;
                }
                None => writeln!(self.output, "Invalid choice. Pick from the menu.")?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        match choice {
            MenuChoice::Add => self.add_expense(),
            MenuChoice::List => {
                let limit = parse_limit(&self.prompt("How many recent? [Enter for all]: ")?);
                let expenses = self.store.load_all()?;
                self.print(&render_listing(&expenses, limit))
            }
            MenuChoice::MonthlySummary => {
                let expenses = self.store.load_all()?;
                self.print(&render_monthly(&expenses))
            }
            MenuChoice::CategorySummary => {
                let expenses = self.store.load_all()?;
                self.print(&render_categories(&expenses))
            }
            MenuChoice::Extremes => {
                let n = parse_top_n(&self.prompt("How many top entries? [default 1]: ")?);
                let expenses = self.store.load_all()?;
                self.print(&render_extremes(&expenses, n))
            }
            MenuChoice::Search => {
                let query = self.prompt("Search query (text): ")?;
                if query.is_empty() {
                    return self.print("Empty query.\n");
                }
                let expenses = self.store.load_all()?;
                self.print(&render_search(&expenses, &query))
            }
            MenuChoice::Export => {
                let raw = self.prompt("Export destination filename [e.g. backup.csv]: ")?;
                let destination = self.paths.export_destination(&raw);
                let outcome = export_table(&self.store, &destination)?;
                writeln!(self.output, "{}", outcome.message())?;
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());

        let date = self.prompt_until("Date (YYYY-MM-DD) [default: today]: ", |raw| {
            parse_date_input(raw, today)
        })?;
        let amount = self.prompt_until("Amount (positive number): ", parse_amount_input)?;
        let category =
            category_or_default(&self.prompt("Category (e.g., groceries, transport, rent): ")?);
        let description = self.prompt("Description (optional): ")?;

        let expense = self.store.add(NewExpense {
            date,
            amount,
            category,
            description,
        })?;

        writeln!(self.output, "{}", format_saved_confirmation(&expense))?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line
    fn prompt(&mut self, label: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ExpenseError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt repeatedly until `parse` accepts the input
    fn prompt_until<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> ExpenseResult<T>,
    ) -> ExpenseResult<T> {
        loop {
            let raw = self.prompt(label)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(ExpenseError::Validation(message)) => writeln!(self.output, "{}", message)?,
                Err(other) => return Err(other),
            }
        }
    }

    fn print(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
