//! Suite aggregator.
//!
//! Collects the averages of each supported suite from ledger text
//! (`<suite>.test<digit> average: <value>` entries) in document order.

use regex_lite::Regex;
use serde::Serialize;
use std::fmt;

use crate::scanner::{AVERAGE_PREFIX, AVERAGE_VALUE};
use crate::ExtractError;

/// Maximum number of averages kept per suite row. Later values are dropped.
pub const DEFAULT_COLUMN_CAP: usize = 7;

/// Suites tracked in the performance ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Bz2,
    Deflate,
    Gz,
    Xz,
}

impl Suite {
    /// Every supported suite, in ledger row order.
    pub const ALL: [Suite; 4] = [Suite::Bz2, Suite::Deflate, Suite::Gz, Suite::Xz];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::Bz2 => "bz2",
            Suite::Deflate => "deflate",
            Suite::Gz => "gz",
            Suite::Xz => "xz",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Averages collected for one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteAverages {
    pub suite: Suite,
    pub averages: Vec<String>,
}

/// Groups ledger entries by suite, capping the number of columns per suite.
#[derive(Debug, Clone)]
pub struct SuiteAggregator {
    suites: Vec<Suite>,
    column_cap: usize,
}

impl SuiteAggregator {
    pub fn new(suites: Vec<Suite>, column_cap: usize) -> Self {
        Self { suites, column_cap }
    }

    pub fn column_cap(&self) -> usize {
        self.column_cap
    }

    /// One entry per configured suite, in configured order, even when a
    /// suite has no matches.
    pub fn aggregate(&self, ledger: &str) -> Result<Vec<SuiteAverages>, ExtractError> {
        self.suites
            .iter()
            .map(|&suite| {
                let averages = suite_averages(ledger, suite.as_str())?
                    .into_iter()
                    .take(self.column_cap)
                    .map(str::to_string)
                    .collect();
                Ok(SuiteAverages { suite, averages })
            })
            .collect()
    }
}

/// All averages recorded for `suite` in `text`, in document order.
///
/// `suite` is matched literally. When it starts with a word character it
/// must also start at a word boundary, so `z2` does not pick up `bz2`.
pub fn suite_averages<'t>(text: &'t str, suite: &str) -> Result<Vec<&'t str>, ExtractError> {
    let boundary = match suite.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => r"\b",
        _ => "",
    };
    let pattern = Regex::new(&format!(
        r"{}{}\.test\d{}({})",
        boundary,
        regex_lite::escape(suite),
        regex_lite::escape(AVERAGE_PREFIX),
        AVERAGE_VALUE
    ))?;

    Ok(pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect())
}
