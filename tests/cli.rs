//! Command-line behavior of the `perf-ledger` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn perf_ledger(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_perf-ledger"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run perf-ledger")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_legacy_rejects_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.txt");
    fs::write(&ledger, "xz.test1 average: 9.000\n").unwrap();

    let output = perf_ledger(&[
        "legacy",
        path_str(&ledger),
        "xz",
        "--config",
        "/nonexistent/ledger.toml",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error loading config"));
}

#[test]
fn test_legacy_with_valid_config_prints_row() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.txt");
    let config = dir.path().join("ledger.toml");
    fs::write(&ledger, "xz.test1 average: 9.000\n").unwrap();
    fs::write(&config, "[report]\nmin_width = 2\n").unwrap();

    let output = perf_ledger(&["legacy", path_str(&ledger), "xz", "--config", path_str(&config)]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "|9.000|\n");
}

#[test]
fn test_filter_json_prints_summary() {
    let dir = TempDir::new().unwrap();
    let raw_log = dir.path().join("console.log");
    let ledger = dir.path().join("ledger.txt");
    fs::write(&raw_log, "bz2.test1 average: 1.234 bz2.test2").unwrap();

    let output = perf_ledger(&["filter", path_str(&raw_log), path_str(&ledger), "--json"]);

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["output"], path_str(&ledger));
    assert_eq!(summary["pairs"], 1);
    assert_eq!(summary["misaligned"], 0);
    assert_eq!(summary["dropped_trailing"], true);
}

#[test]
fn test_filter_without_json_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let raw_log = dir.path().join("console.log");
    let ledger = dir.path().join("ledger.txt");
    fs::write(&raw_log, "bz2.test1 average: 1.234").unwrap();

    let output = perf_ledger(&["filter", path_str(&raw_log), path_str(&ledger)]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&ledger).unwrap(), "bz2.test1 average: 1.234\n");
}

#[test]
fn test_dropped_trailing_token_is_silent_by_default() {
    let dir = TempDir::new().unwrap();
    let raw_log = dir.path().join("console.log");
    let ledger = dir.path().join("ledger.txt");
    fs::write(&raw_log, "bz2.test1").unwrap();

    let quiet = perf_ledger(&["filter", path_str(&raw_log), path_str(&ledger)]);
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("dropped trailing"));

    let verbose = perf_ledger(&["filter", path_str(&raw_log), path_str(&ledger), "--verbose"]);
    assert!(verbose.status.success());
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("dropped trailing"));
}

#[test]
fn test_config_prints_layers() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ledger.toml");
    fs::write(&config, "[filter]\nmax_width = 9\n").unwrap();

    let output = perf_ledger(&["config", "--config", path_str(&config)]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["filter"]["max_width"], 9);
    assert_eq!(json["config"]["report"]["min_width"], 2);
    assert_eq!(json["sources"][0]["origin"], "builtin");
    assert_eq!(json["sources"][1]["origin"], "file");
    assert_eq!(json["sources"][1]["path"], path_str(&config));
}
