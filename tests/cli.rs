use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn menu_exit_creates_default_table() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Expense Tracker — Menu"))
        .stdout(predicate::str::ends_with("Goodbye.\n"));

    let table = fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
    assert_eq!(table, "id,date,amount,category,description\n");
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting (keyboard interrupt). Bye."));
}

#[test]
fn interactive_add_then_subcommand_list() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .args(["--file", "books.csv"])
        .write_stdin("1\n2024-03-05\n15\nBooks\nNovel\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved expense #1: 2024-03-05 15.00 Books — Novel",
        ));

    expenses(&temp_dir)
        .args(["--file", "books.csv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 expenses (most recent first):"))
        .stdout(predicate::str::contains("Novel"));
}

#[test]
fn add_subcommand_rejects_non_positive_amount() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .args(["add", "--amount", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a valid positive number for amount."));

    expenses(&temp_dir)
        .args(["add", "--amount", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a valid positive number for amount."));
}

#[test]
fn file_flag_and_env_var_select_table() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .env("EXPENSE_TRACKER_FILE", "from-env.csv")
        .args(["add", "--amount", "3", "--date", "2024-01-01"])
        .assert()
        .success();
    assert!(temp_dir.path().join("from-env.csv").exists());

    expenses(&temp_dir)
        .env("EXPENSE_TRACKER_FILE", "from-env.csv")
        .args(["--file", "flag.csv", "monthly"])
        .assert()
        .success()
        .stdout("No expenses recorded yet.\n");
}

#[test]
fn export_without_table_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .args(["export", "copy.csv"])
        .assert()
        .success()
        .stdout("No data to export.\n");

    assert!(!temp_dir.path().join("copy.csv").exists());
}

#[test]
fn export_defaults_to_backup_name() {
    let temp_dir = TempDir::new().unwrap();

    expenses(&temp_dir)
        .args(["add", "--amount", "2.5", "--date", "2024-01-01", "-c", "tea"])
        .assert()
        .success();

    expenses(&temp_dir)
        .arg("export")
        .assert()
        .success()
        .stdout("Exported CSV to expenses_backup.csv\n");

    assert_eq!(
        fs::read(temp_dir.path().join("expenses_backup.csv")).unwrap(),
        fs::read(temp_dir.path().join("expenses.csv")).unwrap()
    );
}
