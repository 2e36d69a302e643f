//! Integration tests for the bank-proxy CLI.
//!
//! These tests run the actual binary and compare receipts against expected
//! CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_proxy(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Trim and drop blank lines; receipt order is significant so lines stay in place
fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn assert_matches_expected(output: &str, expected_file: &str) {
    let expected = fs::read_to_string(test_data_path(expected_file)).unwrap();
    assert_eq!(normalize_csv(output), normalize_csv(&expected));
}

#[test]
fn test_basic_session() {
    let output = run_proxy(&[&test_data_path("session_basic.csv")]);
    assert_matches_expected(&output, "expected_basic.csv");
}

#[test]
fn test_refusals_session() {
    let output = run_proxy(&[&test_data_path("session_refusals.csv")]);
    assert_matches_expected(&output, "expected_refusals.csv");
}

#[test]
fn test_messy_input_session() {
    let output = run_proxy(&[&test_data_path("session_messy.csv")]);
    assert_matches_expected(&output, "expected_messy.csv");
}

#[test]
fn test_out_of_range_session_keeps_running() {
    let output = run_proxy(&[&test_data_path("session_overflow.csv")]);
    assert_matches_expected(&output, "expected_overflow.csv");
}

#[test]
fn test_out_of_range_negative_deposit_on_minimum_opening_balance() {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    cmd.arg("-")
        .arg("-79228162514264337593543950335")
        .write_stdin("action,amount\ndeposit,-1\ndeposit,5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2,deposit,-1,rejected,Error: Value was either too large or too small for a Decimal.",
        ))
        .stdout(predicate::str::contains(
            "3,deposit,5,accepted,Successfully deposited.,\"-$79,228,162,514,264,337,593,543,950,330.00\"",
        ));
}

#[test]
fn test_initial_balance_argument() {
    let output = run_proxy(&[&test_data_path("session_basic.csv"), "250"]);
    let lines = normalize_csv(&output);

    assert_eq!(
        lines[1],
        r#"2,deposit,1000,accepted,Successfully deposited.,"$1,250.00""#
    );
    assert_eq!(lines[3], "4,balance,,accepted,Balance checked.,$750.00");
}

#[test]
fn test_script_from_stdin() {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    cmd.arg("-")
        .write_stdin("action,amount\ndeposit,40\nwithdraw,15.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3,withdraw,15.5,accepted,Successfully withdrawn.,$24.50",
        ));
}

#[test]
fn test_script_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action,amount").unwrap();
    writeln!(file, "withdraw,1").unwrap();
    file.flush().unwrap();

    let output = run_proxy(&[file.path().to_str().unwrap()]);
    assert!(output.contains("2,withdraw,1,rejected,Insufficient funds.,$0.00"));
}

#[test]
fn test_missing_argument() {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing script argument"));
}

#[test]
fn test_invalid_initial_balance() {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    cmd.arg(test_data_path("session_basic.csv"))
        .arg("lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid initial balance 'lots'"));
}

#[test]
fn test_nonexistent_file() {
    let mut cmd = Command::cargo_bin("bank-proxy").unwrap();
    cmd.arg("nonexistent_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_empty_script() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action,amount").unwrap();
    file.flush().unwrap();

    let output = run_proxy(&[file.path().to_str().unwrap()]);
    assert_eq!(
        normalize_csv(&output),
        vec!["row,action,amount,outcome,message,balance".to_string()]
    );
}
