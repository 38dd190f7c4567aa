use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{handle_command, ExpenseCommands};
use expense_tracker::config::ExpensePaths;
use expense_tracker::shell::{Shell, INTERRUPT_FAREWELL};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive command-line expense logger",
    long_about = "Records expenses in a CSV file and summarizes them by month, \
                  category and size. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    /// Path of the expense table (default: ./expenses.csv)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(io::stderr),
        )
        .init();

    let paths = ExpensePaths::resolve(cli.file)?;
    tracing::debug!(table = %paths.table_file().display(), "resolved paths");

    match cli.command {
        None => run_shell(paths),
        Some(cmd) => {
            handle_command(&paths, cmd, &mut io::stdout())?;
            Ok(())
        }
    }
}

fn run_shell(paths: ExpensePaths) -> Result<()> {
    ctrlc::set_handler(|| {
        println!("{}", INTERRUPT_FAREWELL);
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    let stdin = io::stdin();
    let mut shell = Shell::new(paths, stdin.lock(), io::stdout());

    match shell.run() {
        Ok(()) => Ok(()),
        Err(e) if e.is_interrupted() => {
            println!("{}", INTERRUPT_FAREWELL);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
