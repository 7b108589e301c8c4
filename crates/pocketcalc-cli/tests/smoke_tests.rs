//! Smoke tests for the pocketcalc CLI

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn pocketcalc() -> Command {
    Command::cargo_bin("pocketcalc").expect("pocketcalc binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocketcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    pocketcalc().assert().failure();
}

// ============================================================================
// Press Tests
// ============================================================================

#[test]
fn test_press_addition() {
    pocketcalc()
        .args(["press", "2", "+", "3", "="])
        .assert()
        .success()
        .stdout("5\nHistory\n2.0 + 3.0 = 5\n");
}

#[test]
fn test_press_chained_operators() {
    pocketcalc()
        .args(["press", "2+3*4="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("20\n"))
        .stdout(predicate::str::contains("2.0 + 3.0 = 5\n5.0 * 4.0 = 20"));
}

#[test]
fn test_press_subtraction_with_hyphen() {
    pocketcalc()
        .args(["press", "9", "-", "4", "="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("5\n"));
}

#[test]
fn test_press_division_by_zero() {
    pocketcalc()
        .args(["press", "5/0="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error\n"))
        .stdout(predicate::str::contains("5.0 / 0.0 = Error"));
}

#[test]
fn test_press_no_history() {
    pocketcalc()
        .args(["press", "--no-history", "1/4="])
        .assert()
        .success()
        .stdout("0.25\n");
}

#[test]
fn test_press_without_result_has_no_pane() {
    pocketcalc()
        .args(["press", "1", "2", ".", "5"])
        .assert()
        .success()
        .stdout("12.5\n");
}

#[test]
fn test_press_json() {
    let output = pocketcalc()
        .args(["press", "--format", "json", "2+3="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "5");
    assert_eq!(
        json["history"],
        serde_json::json!([{
            "first_operand": 2.0,
            "operator": "+",
            "second_operand": 3.0,
            "result": "5"
        }])
    );
}

#[test]
fn test_press_large_product() {
    pocketcalc()
        .args(["press", "99999999999*999999999999="])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("99999999998900000000000\n"))
        .stdout(predicate::str::contains(
            "9.9999999999E10 * 9.99999999999E11 = 99999999998900000000000",
        ));
}

#[test]
fn test_press_trace() {
    pocketcalc()
        .args(["press", "--trace", "--no-history", "7*6="])
        .assert()
        .success()
        .stdout("[ 7 ] 7\n[ * ] 7\n[ 6 ] 6\n[ = ] 42\n42\n");
}

#[test]
fn test_press_unknown_label() {
    pocketcalc()
        .args(["press", "2", "^", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown button label"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn test_press_requires_keys() {
    pocketcalc().arg("press").assert().failure();
}

// ============================================================================
// Keypad Tests
// ============================================================================

#[test]
fn test_keypad_layout() {
    pocketcalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ C ]"))
        .stdout(predicate::str::contains("[ 7 ] [ 8 ] [ 9 ] [ / ]"))
        .stdout(predicate::str::contains("[ 0 ] [ . ] [ = ] [ + ]"));
}
