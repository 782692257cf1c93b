use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir)
        .env_remove("EXPENSE_TRACKER_USER")
        .env_remove("GEMINI_API_KEY");
    cmd
}

fn logged_in(name: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    expense(temp_dir.path())
        .args(["login", name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Logged in as {}", name)));
    temp_dir
}

#[test]
fn test_no_command_prints_hint() {
    let temp_dir = TempDir::new().unwrap();
    expense(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("expense login <name>"));
}

#[test]
fn test_login_whoami_logout() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout("alice\n");

    expense(temp_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out alice"));

    expense(temp_dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_commands_require_a_profile() {
    let temp_dir = TempDir::new().unwrap();
    expense(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_add_then_list_and_dashboard() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["add", "Morning coffee", "-4.50", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction:"))
        .stdout(predicate::str::contains("-$4.50"));

    expense(temp_dir.path())
        .args(["add", "Paycheck", "100"])
        .assert()
        .success();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning coffee"))
        .stdout(predicate::str::contains("+$100.00"));

    expense(temp_dir.path())
        .args(["dashboard", "--range", "all-time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Balance"))
        .stdout(predicate::str::contains("$95.50"))
        .stdout(predicate::str::contains("Expense Breakdown"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn test_invalid_add_lists_field_errors() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["add", "ab", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "description: Description must be at least 3 characters.",
        ))
        .stderr(predicate::str::contains("amount: Amount cannot be zero."));

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet. Add one above!"));
}

#[test]
fn test_budget_set_show_and_progress() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["budget", "set", "food=60", "transport=40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved budgets."))
        .stdout(predicate::str::contains("$60.00"));

    expense(temp_dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00"));

    expense(temp_dir.path())
        .args(["add", "Dinner out", "-70", "-c", "food"])
        .assert()
        .success();

    expense(temp_dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("$70 / $60"));
}

#[test]
fn test_budget_rejects_unknown_category() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["budget", "set", "pets=10"])
        .assert()
        .failure();
}

#[test]
fn test_profiles_are_isolated() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["add", "Alice rent", "-900", "-c", "housing"])
        .assert()
        .success();

    expense(temp_dir.path())
        .args(["--user", "bob", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."))
        .stdout(predicate::str::contains("Alice rent").not());
}

#[test]
fn test_analyze_without_transactions_needs_no_key() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There are no transactions to analyze. Please add some expenses.",
        ));
}

#[test]
fn test_analyze_without_key_fails() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .args(["add", "Groceries", "-35", "-c", "groceries"])
        .assert()
        .success();

    expense(temp_dir.path())
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_log_records_writes() {
    let temp_dir = logged_in("alice");

    expense(temp_dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));

    expense(temp_dir.path())
        .args(["add", "Bus pass", "-25", "-c", "transport"])
        .assert()
        .success();

    expense(temp_dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"))
        .stdout(predicate::str::contains("by alice (Bus pass)"));
}
