use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "spendwise";

fn spendwise(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("SPENDWISE_DATA_DIR")
        .env_remove("SPENDWISE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_top_level_commands() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("transaction")
                .and(contains("budget"))
                .and(contains("report"))
                .and(contains("export")),
        );
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Food").and(contains("Education")));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());

    spendwise(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Transport").and(contains("Health")));
}

#[test]
fn added_transactions_are_listed_and_searchable() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Coffee beans", "12.50", "-c", "Food", "-d", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("Added expense: Coffee beans"));
    spendwise(dir.path())
        .args(["txn", "add", "Salary", "2500", "-t", "income", "-c", "Income", "-d", "2024-01-01"])
        .assert()
        .success();

    spendwise(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Coffee beans").and(contains("Salary")));

    spendwise(dir.path())
        .args(["transaction", "list", "--search", "coffee"])
        .assert()
        .success()
        .stdout(contains("Coffee beans").and(contains("Salary").not()));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Lunch", "abc", "-c", "Food"])
        .assert()
        .failure()
        .stderr(contains("Amount is not a number"));
}

#[test]
fn transaction_requires_category() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Lunch", "10"])
        .assert()
        .failure()
        .stderr(contains("A category must be selected"));
}

#[test]
fn unknown_category_is_not_found() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Lunch", "10", "-c", "Nope"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn budget_alert_fires_at_threshold() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["budget", "add", "Food", "100", "-s", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Created monthly budget for Food"));

    spendwise(dir.path())
        .args(["transaction", "add", "Groceries", "79.99", "-c", "Food", "-d", "2024-01-10"])
        .assert()
        .success()
        .stdout(contains("Warning:").not());

    spendwise(dir.path())
        .args(["transaction", "add", "Snack", "0.01", "-c", "Food", "-d", "2024-01-11"])
        .assert()
        .success()
        .stdout(contains("Warning: Monthly budget for Food (2024-01) is at 80%"));

    spendwise(dir.path())
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(contains("$80.00").and(contains("80%")));
}

#[test]
fn duplicate_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["budget", "add", "Food", "300", "-s", "2024-03-01"])
        .assert()
        .success();
    spendwise(dir.path())
        .args(["budget", "add", "Food", "50", "-s", "2024-03-20"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn deleting_category_removes_its_budgets() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["budget", "add", "Transport", "60", "-p", "weekly", "-s", "2024-01-01"])
        .assert()
        .success();

    spendwise(dir.path())
        .args(["category", "delete", "Transport"])
        .assert()
        .success()
        .stdout(contains("Also removed 1 budget(s)"));

    spendwise(dir.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("No budgets found"));
}

#[test]
fn reports_summarize_transactions() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Rent", "900", "-c", "Housing", "-d", "2024-02-01"])
        .assert()
        .success();
    spendwise(dir.path())
        .args(["transaction", "add", "Paycheck", "2000", "-t", "income", "-c", "Income", "-d", "2024-02-02"])
        .assert()
        .success();

    spendwise(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("$2000.00").and(contains("$900.00")).and(contains("$1100.00")));

    spendwise(dir.path())
        .args(["report", "spending"])
        .assert()
        .success()
        .stdout(contains("Spending by Category").and(contains("Housing")));

    spendwise(dir.path())
        .args(["report", "trend", "-m", "3"])
        .assert()
        .success();
}

#[test]
fn exports_write_files() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "add", "Book", "15", "-c", "Education", "-d", "2024-04-01"])
        .assert()
        .success();

    let csv_path = dir.path().join("out.csv");
    let json_path = dir.path().join("out.json");
    let yaml_path = dir.path().join("out.yaml");

    spendwise(dir.path())
        .args(["export", "csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 1 transactions"));
    spendwise(dir.path()).args(["export", "json"]).arg(&json_path).assert().success();
    spendwise(dir.path()).args(["export", "yaml"]).arg(&yaml_path).assert().success();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("ID,Date,Type,Title,Category,Amount,Note"));
    assert!(csv.contains("Book"));
    assert!(fs::read_to_string(&json_path).unwrap().contains("\"schema_version\""));
    assert!(fs::read_to_string(&yaml_path).unwrap().contains("schema_version:"));
}

#[test]
fn unknown_transaction_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["transaction", "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn trend_months_are_bounded() {
    let dir = TempDir::new().unwrap();
    spendwise(dir.path())
        .args(["report", "trend", "-m", "4000000000"])
        .assert()
        .failure();
    spendwise(dir.path())
        .args(["report", "trend", "-m", "0"])
        .assert()
        .failure();
    spendwise(dir.path())
        .args(["report", "trend", "-m", "120"])
        .assert()
        .success();
}

#[test]
fn edit_keeps_empty_note_distinct_from_cleared() {
    let dir = TempDir::new().unwrap();
    let added = spendwise(dir.path())
        .args(["transaction", "add", "Taxi", "20", "-c", "Transport", "-d", "2024-05-01", "-n", "airport"])
        .assert()
        .success();
    let stdout = String::from_utf8(added.get_output().stdout.clone()).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .unwrap()
        .to_string();

    let stored_note = || {
        let raw = fs::read_to_string(dir.path().join("data").join("transactions.json")).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        doc["transactions"][0]["note"].clone()
    };
    assert_eq!(stored_note(), serde_json::json!("airport"));

    spendwise(dir.path())
        .args(["transaction", "edit", &id, "-n", ""])
        .assert()
        .success();
    assert_eq!(stored_note(), serde_json::json!(""));

    spendwise(dir.path())
        .args(["transaction", "edit", &id, "--clear-note"])
        .assert()
        .success();
    assert!(stored_note().is_null());

    spendwise(dir.path())
        .args(["transaction", "edit", &id, "-n", "x", "--clear-note"])
        .assert()
        .failure();
}
