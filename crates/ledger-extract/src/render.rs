//! Report renderer.

use serde::Serialize;
use std::fmt;

use crate::suite::{Suite, SuiteAverages};

/// One version-stamped ledger row: `bz2: |4.0.0|1.234|2.345|`.
///
/// Columns keep discovery order; test indices are not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub suite: Suite,
    pub version: String,
    pub averages: Vec<String>,
}

impl ReportRow {
    pub fn new(averages: SuiteAverages, version: &str) -> Self {
        Self {
            suite: averages.suite,
            version: version.to_string(),
            averages: averages.averages,
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: |{}|", self.suite, self.version)?;
        for average in &self.averages {
            write!(f, "{}|", average)?;
        }
        Ok(())
    }
}
