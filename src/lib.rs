//! Performance ledger
//!
//! Filters raw build console output into a versioned performance ledger:
//! identifier/average pairs per line, capped per-suite report rows, and
//! single-suite rows pulled from historical ledgers.

pub mod config;
pub mod pipeline;
pub mod telemetry;

pub use config::{ConfigError, EffectiveConfig, LedgerConfig};
pub use ledger_extract::{IdentifierWidth, LegacyRow, ReportRow, Suite};
pub use pipeline::{filter, filter_legacy, filter_report, FilterSummary, PipelineError, PipelineResult};
