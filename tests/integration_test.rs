//! Integration tests for the logstat binary
//!
//! These tests run the actual binary against temp log files to verify:
//! - The text report layout and counts
//! - Threshold filtering by rank
//! - File output and fatal error exit codes
//!
//! Each test uses its own isolated temp directory as working directory so
//! that no stray logstat.toml or environment variable leaks in.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE_LOG: &str = "ERROR disk full\nINFO starting up\nWARNING low memory\nINFO ready\n";

fn logstat_bin() -> &'static str {
    env!("CARGO_BIN_EXE_logstat")
}

fn workspace_with_log(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("app.log"), content).expect("Failed to write log");
    dir
}

/// Command with a clean environment, run from `dir`
fn logstat(dir: &Path) -> Command {
    let mut cmd = Command::new(logstat_bin());
    cmd.current_dir(dir)
        .env_remove("LOG_FILE_PATH")
        .env_remove("DETAIL_LEVEL")
        .env_remove("OUTPUT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    logstat(dir)
        .args(args)
        .output()
        .expect("Failed to run logstat")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Split a text report into (header, sorted severity lines, total line)
fn parse_text_report(report: &str) -> (String, Vec<String>, String) {
    let lines: Vec<String> = report.lines().map(str::to_string).collect();
    assert!(lines.len() >= 2, "report too short: {:?}", lines);
    let mut middle = lines[1..lines.len() - 1].to_vec();
    middle.sort();
    (
        lines[0].clone(),
        middle,
        lines[lines.len() - 1].clone(),
    )
}

#[test]
fn test_sample_report_at_info() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(dir.path(), &["--log", "app.log"]);
    assert!(output.status.success());

    let (header, severities, total) = parse_text_report(&stdout_of(&output));
    assert_eq!(header, "Статистика по сообщениям:");
    assert_eq!(severities, vec!["ERROR: 1", "INFO: 2", "WARNING: 1"]);
    assert_eq!(total, "Всего сообщений: 4");
}

#[test]
fn test_error_threshold_keeps_total() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(dir.path(), &["--log", "app.log", "--level", "error"]);
    assert!(output.status.success());

    let (_, severities, total) = parse_text_report(&stdout_of(&output));
    assert_eq!(severities, vec!["ERROR: 1"]);
    assert_eq!(total, "Всего сообщений: 4");
}

#[test]
fn test_warning_threshold() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(dir.path(), &["--log", "app.log", "--level", "Warning"]);
    assert!(output.status.success());

    let (_, severities, _) = parse_text_report(&stdout_of(&output));
    assert_eq!(severities, vec!["ERROR: 1", "WARNING: 1"]);
}

#[test]
fn test_unknown_tokens_and_bare_lines() {
    let dir = workspace_with_log("DEBUG cache miss\nDEBUG cache hit\nstandalone\nERROR boom\n");
    let output = run(dir.path(), &["--log", "app.log"]);
    assert!(output.status.success());

    let (_, severities, total) = parse_text_report(&stdout_of(&output));
    assert_eq!(severities, vec!["DEBUG: 2", "ERROR: 1", "INFO: 1"]);
    assert_eq!(total, "Всего сообщений: 4");
}

#[test]
fn test_empty_log() {
    let dir = workspace_with_log("");
    let output = run(dir.path(), &["--log", "app.log"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Статистика по сообщениям:\nВсего сообщений: 0\n"
    );
}

#[test]
fn test_invalid_utf8_log_is_counted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("app.log"),
        b"ERROR disk full\nINFO caf\xe9 opened\r\n\xff\xfe\nWARNING low\rmemory\n",
    )
    .unwrap();

    for workers in ["1", "4"] {
        let output = run(dir.path(), &["--log", "app.log", "--workers", workers]);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let (_, severities, total) = parse_text_report(&stdout_of(&output));
        assert_eq!(severities, vec!["ERROR: 1", "INFO: 2", "WARNING: 1"]);
        assert_eq!(total, "Всего сообщений: 4");
    }
}

#[test]
fn test_output_file() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(dir.path(), &["--log", "app.log", "--output", "report.txt"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty(), "stdout should stay empty");

    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    let (_, severities, total) = parse_text_report(&report);
    assert_eq!(severities.len(), 3);
    assert_eq!(total, "Всего сообщений: 4");
}

#[test]
fn test_missing_log_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--log", "does-not-exist.log"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.log"), "stderr: {}", stderr);
}

#[test]
fn test_missing_log_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LOG_FILE_PATH"), "stderr: {}", stderr);
}

#[test]
fn test_uncreatable_output_fails() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(
        dir.path(),
        &["--log", "app.log", "--output", "no-such-dir/report.txt"],
    );
    assert!(!output.status.success());
    assert!(!dir.path().join("no-such-dir").exists());
}

#[test]
fn test_invalid_level_fails() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let output = run(dir.path(), &["--log", "app.log", "--level", "verbose"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("verbose"), "stderr: {}", stderr);
}

#[test]
fn test_repeated_runs_identical() {
    let dir = workspace_with_log(SAMPLE_LOG);
    let first = run(dir.path(), &["--log", "app.log", "--format", "json"]);
    let second = run(dir.path(), &["--log", "app.log", "--format", "json"]);
    assert!(first.status.success() && second.status.success());
    assert_eq!(stdout_of(&first), stdout_of(&second));
}
