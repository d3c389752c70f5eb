//! File-level filter operations
//!
//! Each operation reads one input file fully into memory, runs the
//! extraction stages over it and returns (or writes) the result:
//! - `filter`: raw console log to per-line ledger file
//! - `filter_legacy`: historical ledger text to one unbounded row
//! - `filter_report`: raw console log to one capped row per suite

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ledger_extract::{
    extract_legacy, render_ledger, report_rows, ExtractError, LegacyRow, PairAssembler, PairStats,
    ReportRow, TokenScanner,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Outcome of a `filter` run
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub output: PathBuf,
    #[serde(flatten)]
    pub stats: PairStats,
}

fn read_input(path: &Path) -> PipelineResult<String> {
    let content = fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}

fn log_pair_stats(stats: &PairStats) {
    if stats.misaligned > 0 {
        warn!(misaligned = stats.misaligned, "pairs not in identifier/average order");
    }
    if stats.dropped_trailing {
        debug!("dropped trailing token without a partner");
    }
}

/// Write identifier/average pairs from `raw_log` to `output`, one per line.
pub fn filter(raw_log: &Path, output: &Path, config: &LedgerConfig) -> PipelineResult<FilterSummary> {
    let content = read_input(raw_log)?;

    let scanner = TokenScanner::new(config.filter_width)?;
    let mut assembler = PairAssembler::new(scanner.scan(&content));
    let ledger = render_ledger(&mut assembler);
    let stats = assembler.stats();
    log_pair_stats(&stats);

    fs::write(output, ledger).map_err(|source| PipelineError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        output = %output.display(),
        pairs = stats.pairs,
        width = %config.filter_width,
        "wrote ledger"
    );

    Ok(FilterSummary {
        output: output.to_path_buf(),
        stats,
    })
}

/// Extract every average of `suite` from a historical ledger file.
pub fn filter_legacy(report: &Path, suite: &str) -> PipelineResult<LegacyRow> {
    let content = read_input(report)?;
    let row = extract_legacy(&content, suite)?;
    if row.averages.is_empty() {
        debug!(suite, "no entries for suite");
    }
    info!(suite, values = row.averages.len(), "extracted legacy row");
    Ok(row)
}

/// Build one version-stamped row per supported suite from `raw_log`.
pub fn filter_report(raw_log: &Path, version: &str, config: &LedgerConfig) -> PipelineResult<Vec<ReportRow>> {
    let content = read_input(raw_log)?;
    let rows = report_rows(&content, version, config.report_width, config.column_cap)?;
    for row in &rows {
        debug!(suite = %row.suite, values = row.averages.len(), "aggregated suite");
    }
    info!(version, rows = rows.len(), width = %config.report_width, "built report");
    Ok(rows)
}
