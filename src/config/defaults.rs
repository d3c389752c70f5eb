//! Built-in defaults (layer 1)

use ledger_extract::IdentifierWidth;
use serde::{Deserialize, Serialize};

/// Identifier length bound as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthSettings {
    pub min_width: usize,
    pub max_width: usize,
}

impl From<IdentifierWidth> for WidthSettings {
    fn from(width: IdentifierWidth) -> Self {
        Self {
            min_width: width.min,
            max_width: width.max,
        }
    }
}

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Identifier bound for the per-line filter (default: 3..=7)
    pub filter: WidthSettings,

    /// Identifier bound for the report generator (default: 2..=9)
    pub report: WidthSettings,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            filter: IdentifierWidth::COMPACT.into(),
            report: IdentifierWidth::WIDE.into(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "filter": {
                "min_width": self.filter.min_width,
                "max_width": self.filter.max_width,
            },
            "report": {
                "min_width": self.report.min_width,
                "max_width": self.report.max_width,
            }
        })
    }
}
