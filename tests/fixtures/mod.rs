//! Test fixtures for golden-file assertions
//!
//! `perf_console/console.log` is an xcodebuild performance run covering:
//! - a suite with more tests than the column cap (bz2)
//! - tests reported out of index order (deflate)
//! - an unsupported suite (lz4) and a missing one (gz)
//! - a two-character suite only the wide identifier bound sees (xz)
//! - an interrupted final test with no average (tar)

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the console fixture and its expectations
pub fn perf_console_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/perf_console")
}

/// Path to the raw console log
pub fn console_log_path() -> PathBuf {
    perf_console_dir().join("console.log")
}

/// Read a file from the fixture directory
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(perf_console_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Expected pair counters for one identifier bound
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PairExpectation {
    pub pairs: usize,
    pub misaligned: usize,
    pub dropped_trailing: bool,
}

/// Expected legacy row for one ledger/suite combination
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LegacyExpectation {
    pub ledger: String,
    pub suite: String,
    pub row: String,
}

/// Golden expectations for the console fixture
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoldenExpectations {
    pub version: String,
    pub report_rows: Vec<String>,
    pub compact: PairExpectation,
    pub wide: PairExpectation,
    pub legacy: Vec<LegacyExpectation>,
}

impl GoldenExpectations {
    pub fn load() -> Result<Self, String> {
        let content = fs::read_to_string(perf_console_dir().join("golden.json"))
            .map_err(|e| format!("Failed to read golden.json: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse golden.json: {}", e))
    }
}
