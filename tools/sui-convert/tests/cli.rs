//! End-to-end tests for the `sui-convert` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn sui_convert() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sui-convert"))
}

#[test]
fn test_convert_file_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dst.csv");

    sui_convert()
        .args([
            "--input",
            fixture("export.csv").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Converted 5 transaction(s) from 9 record(s), skipped 1 of unknown kind, \
             dropped 1 unmatched transfer half(s)",
        ));

    let expected = fs::read_to_string(fixture("expected.csv")).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_default_file_names() {
    let dir = tempdir().unwrap();
    fs::copy(fixture("export.csv"), dir.path().join("src.csv")).unwrap();

    sui_convert().current_dir(dir.path()).assert().success();

    let expected = fs::read_to_string(fixture("expected.csv")).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("dst.csv")).unwrap(), expected);
}

#[test]
fn test_stdin_to_stdout() {
    let input = fs::read(fixture("export.csv")).unwrap();
    let expected = fs::read_to_string(fixture("expected.csv")).unwrap();

    sui_convert()
        .args(["-i", "-", "-o", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_skip_rows() {
    let input = "支出,2024-01-02,餐饮,午餐,,现金,CNY,25.00,,,,\n";

    sui_convert()
        .args(["-i", "-", "-o", "-", "--skip-rows", "0"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2024-01-02,现金,餐饮:午餐,25.00,\n");
}

#[test]
fn test_strict_pairing() {
    let input = "h\nh\n\
        转出,2024-01-02,,,,,CNY,1,,,,7\n\
        转入,2024-01-02,,,,支付宝,CNY,1,,,,7\n";

    sui_convert()
        .args(["-i", "-", "-o", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");

    sui_convert()
        .args(["-i", "-", "-o", "-", "--pairing", "strict"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2024-01-02,,支付宝,1,\n");
}

#[test]
fn test_malformed_row_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dst.csv");

    sui_convert()
        .args([
            "--input",
            fixture("malformed.csv").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 4: expected 12 fields, got 7"));

    // rows before the bad one are kept
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2024-01-02 12:10:00,现金,餐饮:午餐,25.00,工作餐\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();

    sui_convert()
        .args(["--input", dir.path().join("nope.csv").to_str().unwrap()])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));

    assert!(!dir.path().join("dst.csv").exists());
}

#[test]
fn test_help() {
    sui_convert()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pairing"))
        .stdout(predicate::str::contains("--skip-rows"));
}
