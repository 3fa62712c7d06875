//! Smoke tests for the keycalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

#[test]
fn test_keys_command() {
    keycalc()
        .args(["--color", "never", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backspace"))
        .stdout(predicate::str::contains("All clear"));
}

// ============================================================================
// Scripted runs
// ============================================================================

#[test]
fn test_run_groups_digits() {
    keycalc()
        .args(["--color", "never", "run", "1", "2", "3", "4"])
        .assert()
        .success()
        .stdout("1,234\n");
}

#[test]
fn test_run_chained_operators() {
    keycalc()
        .args(["--color", "never", "run", "5", "+", "3", "+", "2", "="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_run_pending_operator_shows_previous() {
    keycalc()
        .args(["--color", "never", "run", "1", "2", "*"])
        .assert()
        .success()
        .stdout("12 * |\n");
}

#[test]
fn test_run_division_by_zero() {
    keycalc()
        .args(["--color", "never", "run", "4", "/", "0", "Enter"])
        .assert()
        .success()
        .stdout("∞\n");
}

#[test]
fn test_run_locale_flag() {
    keycalc()
        .args([
            "--color", "never", "run", "--locale", "de", "1", "2", "3", "4", ".", "5",
        ])
        .assert()
        .success()
        .stdout("1.234,5\n");
}

#[test]
fn test_run_json_output() {
    let output = keycalc()
        .args(["run", "--format", "json", "9", "-", "4", "="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"]["current"], "5");
    assert_eq!(value["state"], "first-operand");
}

#[test]
fn test_run_trace() {
    keycalc()
        .args(["--color", "never", "run", "--trace", "7", "Backspace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7          7"))
        .stdout(predicate::str::contains("Backspace"));
}

#[test]
fn test_run_delete_key_removes_one_character() {
    keycalc()
        .args(["--color", "never", "run", "1", "2", "3", "Delete"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_run_nan_result_is_not_computed_with() {
    keycalc()
        .args(["--color", "never", "run", "0", "/", "0", "=", "+", "5", "="])
        .assert()
        .success()
        .stdout("NaN + | 5\n");
}

#[test]
fn test_run_unknown_key_fails() {
    keycalc()
        .args(["run", "1", "%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key '%' at position 2"));
}

#[test]
fn test_run_bad_locale_fails() {
    keycalc()
        .args(["run", "--locale", "xx", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale"));
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn test_config_file_locale() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "locale: ch\ncolor: never\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["run", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("12'345\n");
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "locale: ch\noutput: json\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["--color", "never", "run", "--locale", "plain", "--format", "text"])
        .args(["1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("12345\n");
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "decimals: 3\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .args(["run", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_missing_config_file_fails() {
    keycalc()
        .args(["--config", "/nonexistent/keycalc.yaml", "run", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
