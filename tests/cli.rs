use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget() -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_prints_overrun_report_and_history() {
    budget()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Category: Marketing"))
        .stdout(predicate::str::contains("Total Expenses: $5300.00"))
        .stdout(predicate::str::contains("Current Balance: -$100.00"))
        .stdout(predicate::str::contains("⚠️ BUDGET OVERRUN! Exceeded by $300.00"))
        .stdout(predicate::str::contains("Remaining Budget").not())
        .stdout(predicate::str::contains("2. Income: $200.00 - Sponsorship"));
}

#[test]
fn report_within_budget() {
    budget()
        .args(["report", "Supplies", "1000.00", "--expense", "400.00:Paper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $600.00"))
        .stdout(predicate::str::contains("Remaining Budget: $600.00"));
}

#[test]
fn report_expense_equal_to_allocation_is_not_overrun() {
    budget()
        .args(["report", "Boundary", "500", "-e", "500:All of it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $0.00"))
        .stdout(predicate::str::contains("BUDGET OVERRUN").not());
}

#[test]
fn report_rejects_non_positive_amount() {
    budget()
        .args(["report", "Ops", "100", "--expense", "0:Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));

    budget()
        .args(["report", "Ops", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));
}

#[test]
fn report_rejects_negative_amount_after_symbol() {
    budget()
        .args(["report", "Ops", "100", "--expense", "$-0.50:Refund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"))
        .stdout(predicate::str::contains("Total Expenses").not());
}

#[test]
fn report_overflowing_totals_fail_cleanly() {
    budget()
        .args([
            "report",
            "Big",
            "92233720368547758",
            "--income",
            "92233720368547758:x",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("would overflow"))
        .stderr(predicate::str::contains("panicked").not());

    budget()
        .args(["report", "Big", "922337203685477581"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn report_csv_summary() {
    budget()
        .args(["report", "Supplies", "1000", "-e", "400:Paper", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            "category,allocated,total_income,total_expenses,balance,overrun,remaining\n\
             Supplies,1000.00,0.00,400.00,600.00,false,600.00\n",
        );
}

#[test]
fn report_rejects_malformed_entry() {
    budget()
        .args(["report", "Ops", "100", "--income", "fifty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMOUNT:DESCRIPTION"));
}

#[test]
fn transactions_csv_listing() {
    budget()
        .args([
            "transactions",
            "Marketing",
            "5000",
            "--income",
            "200:Sponsorship",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(
            "type,amount,description\n\
             initial,5000.00,Initial allocation\n\
             income,200.00,Sponsorship\n",
        );
}

#[test]
fn config_file_sets_currency_symbol() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"currency_symbol": "€"}"#).unwrap();

    budget()
        .args(["--config", path.to_str().unwrap(), "report", "Food", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated Amount: €50.00"));
}

#[test]
fn missing_config_file_fails() {
    budget()
        .args(["--config", "/nonexistent/settings.json", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
