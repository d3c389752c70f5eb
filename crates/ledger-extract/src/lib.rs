//! Performance ledger extraction.
//!
//! Turns raw build console output into versioned ledger rows. The stages are
//! independent and composable:
//!
//! 1. [`TokenScanner`] finds identifier and average tokens in document order.
//! 2. [`PairAssembler`] pairs them up by position.
//! 3. [`SuiteAggregator`] collects averages per supported suite.
//! 4. [`ReportRow`] renders one pipe-delimited row per suite.
//!
//! [`extract_legacy`] is the unbounded single-suite variant used on
//! historical ledger text.

mod error;
mod legacy;
mod pairing;
mod render;
mod scanner;
mod suite;

pub use error::ExtractError;
pub use legacy::{extract_legacy, LegacyRow};
pub use pairing::{render_ledger, MetricPair, PairAssembler, PairStats};
pub use render::ReportRow;
pub use scanner::{IdentifierWidth, Token, TokenKind, TokenScanner, Tokens};
pub use suite::{suite_averages, Suite, SuiteAggregator, SuiteAverages, DEFAULT_COLUMN_CAP};

/// Scan `text` and render the per-line ledger in one pass.
///
/// This is the text the per-line filter writes to its output file and the
/// input the suite aggregator reads.
pub fn ledger_text(text: &str, width: IdentifierWidth) -> Result<(String, PairStats), ExtractError> {
    let scanner = TokenScanner::new(width)?;
    let mut assembler = PairAssembler::new(scanner.scan(text));
    let ledger = render_ledger(&mut assembler);
    Ok((ledger, assembler.stats()))
}

/// Build version-stamped rows for every suite in `Suite::ALL` order.
pub fn report_rows(
    text: &str,
    version: &str,
    width: IdentifierWidth,
    column_cap: usize,
) -> Result<Vec<ReportRow>, ExtractError> {
    let (ledger, _) = ledger_text(text, width)?;
    let aggregator = SuiteAggregator::new(Suite::ALL.to_vec(), column_cap);
    Ok(aggregator
        .aggregate(&ledger)?
        .into_iter()
        .map(|averages| ReportRow::new(averages, version))
        .collect())
}
