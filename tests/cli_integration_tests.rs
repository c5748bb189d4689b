//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDS"))
        .stdout(predicate::str::contains("kilometer"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_server_help() {
    let mut cmd = Command::cargo_bin("convert-server").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/api/v1/convert"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_meter_to_kilometer() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "5", "--from", "meter", "--to", "kilometer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.005"));
}

#[test]
fn test_convert_short_flags() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "1", "-f", "kilogram", "-t", "gram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_convert_tiny_result_not_rounded_away() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "0.0001", "-f", "meter", "-t", "kilometer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e-7"))
        .stdout(predicate::str::contains("= 0 kilometer").not());
}

#[test]
fn test_convert_huge_result_stays_finite() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "1e303", "-f", "kilometer", "-t", "meter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e306"))
        .stdout(predicate::str::contains("inf").not());
}

#[test]
fn test_convert_negative_value() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "-2", "-f", "kilometer", "-t", "meter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-2000"));
}

#[test]
fn test_convert_unsupported_fails() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "10", "--from", "meter", "--to", "gram"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Conversion not supported"));
}

#[test]
fn test_convert_same_unit_fails() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "0", "--from", "meter", "--to", "meter"])
        .assert()
        .failure();
}

#[test]
fn test_convert_unknown_unit_is_usage_error() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.args(["convert", "1", "--from", "mile", "--to", "meter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit"));
}

#[test]
fn test_convert_json_output() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    let output = cmd
        .args(["convert", "3", "-f", "gram", "-t", "kilogram", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "gram");
    assert_eq!(json["to"], "kilogram");
    assert!((json["result"].as_f64().unwrap() - 0.003).abs() < 1e-12);
}

#[test]
fn test_convert_json_unsupported() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    let output = cmd
        .args(["convert", "3", "-f", "gram", "-t", "meter", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], "Conversion not supported");
}

// ═══════════════════════════════════════════════════════════════════════════
// UNITS AND FORM TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_units_lists_rules() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kilogram"))
        .stdout(predicate::str::contains("0.001"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_form_supported() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("form")
        .write_stdin("2\nkilometer\nmeter\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted value: 2000"));
}

#[test]
fn test_form_unsupported() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("form")
        .write_stdin("10\nmeter\ngram\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Converted value: Conversion not supported",
        ));
}

#[test]
fn test_form_placeholder_reprompt() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("form")
        .write_stdin("\n\nkilogram\ngram\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select unit"))
        .stdout(predicate::str::contains("Converted value: 1000"));
}

#[test]
fn test_form_eof_fails() {
    let mut cmd = Command::cargo_bin("convert").unwrap();
    cmd.arg("form").write_stdin("5\n").assert().failure();
}
