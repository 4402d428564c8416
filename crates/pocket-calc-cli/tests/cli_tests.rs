//! End-to-end tests for the pocketcalc binary

use assert_cmd::Command;
use predicates::prelude::*;

fn pocketcalc() -> Command {
    Command::cargo_bin("pocketcalc").expect("binary builds")
}

#[test]
fn test_eval_simple_addition() {
    pocketcalc()
        .args(["eval", "12+34="])
        .assert()
        .success()
        .stdout(predicate::str::contains("46"))
        .stdout(predicate::str::contains("Memory: 0"));
}

#[test]
fn test_eval_chained_operators_no_precedence() {
    pocketcalc()
        .args(["eval", "5+3*2="])
        .assert()
        .success()
        .stdout(predicate::str::contains("16"));
}

#[test]
fn test_eval_decimal_entry() {
    pocketcalc()
        .args(["eval", "7/2="])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.5"));
}

#[test]
fn test_eval_pending_operation_shown() {
    pocketcalc()
        .args(["eval", "9/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 ÷"));
}

#[test]
fn test_eval_divide_by_zero_alert_on_stderr() {
    pocketcalc()
        .args(["eval", "8/0="])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot divide by zero!"))
        .stdout(predicate::str::contains("0"));
}

#[test]
fn test_eval_tape_output() {
    pocketcalc()
        .args(["eval", "5+3*2=", "--tape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 + 3 = 8"))
        .stdout(predicate::str::contains("8 × 2 = 16"));
}

#[test]
fn test_eval_tape_json_output() {
    pocketcalc()
        .args(["eval", "6*7=", "--tape", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiply"));
}

#[test]
fn test_eval_invalid_key_fails() {
    pocketcalc()
        .args(["eval", "12a="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key 'a'"));
}

#[test]
fn test_json_requires_tape() {
    pocketcalc()
        .args(["eval", "1+1=", "--json"])
        .assert()
        .failure();
}

#[test]
fn test_help() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_version() {
    pocketcalc().arg("--version").assert().success();
}
