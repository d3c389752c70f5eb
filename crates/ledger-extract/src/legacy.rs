//! Single-suite extraction from historical ledger text.
//!
//! Unlike report rows, legacy rows take any suite name, have no column cap
//! and carry no version label.

use serde::Serialize;
use std::fmt;

use crate::suite::suite_averages;
use crate::ExtractError;

/// Averages of one suite rendered as `|9.000|8.500|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRow {
    pub suite: String,
    pub averages: Vec<String>,
}

impl fmt::Display for LegacyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for average in &self.averages {
            write!(f, "{}|", average)?;
        }
        Ok(())
    }
}

/// Extract every average recorded for `suite` in `text`.
///
/// Unknown suites yield an empty row, never an error.
pub fn extract_legacy(text: &str, suite: &str) -> Result<LegacyRow, ExtractError> {
    let averages = suite_averages(text, suite)?
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(LegacyRow {
        suite: suite.to_string(),
        averages,
    })
}
