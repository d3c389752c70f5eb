//! Effective configuration with provenance
//!
//! Layers are merged as JSON values (objects deep-merge, scalars override),
//! then the result is read back into typed settings and validated.

use ledger_extract::{IdentifierWidth, DEFAULT_COLUMN_CAP};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::defaults::{BuiltinDefaults, WidthSettings};

/// Origin of a configuration source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing config source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Merged layers as written, before typing.
#[derive(Debug, Clone, Deserialize)]
struct MergedSettings {
    filter: WidthSettings,
    report: WidthSettings,
}

/// Validated settings used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Identifier bound for `filter`.
    pub filter_width: IdentifierWidth,
    /// Identifier bound for `report`.
    pub report_width: IdentifierWidth,
    /// Columns kept per report row. Fixed, not read from any layer.
    pub column_cap: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            filter_width: IdentifierWidth::COMPACT,
            report_width: IdentifierWidth::WIDE,
            column_cap: DEFAULT_COLUMN_CAP,
        }
    }
}

/// Effective configuration: the merged value plus where it came from
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// The merged configuration object
    pub config: Value,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,

    /// Typed, validated view of `config`
    pub ledger: LedgerConfig,
}

impl EffectiveConfig {
    /// Build effective config from layers
    pub fn build(config_path: Option<&Path>, cli_overrides: Option<Value>) -> Result<Self, ConfigError> {
        let mut merged = BuiltinDefaults::default().to_value();
        let mut sources = vec![ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
        }];

        if let Some(path) = config_path {
            merged = deep_merge(merged, Self::load_toml_file(path)?);
            sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(path.to_string_lossy().to_string()),
            });
        }

        if let Some(cli) = cli_overrides {
            merged = deep_merge(merged, cli);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
            });
        }

        let ledger = Self::validate_config(&merged)?;

        Ok(Self {
            config: merged,
            sources,
            ledger,
        })
    }

    /// Merged configuration and its sources, as printed by `perf-ledger config`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&serde_json::json!({
            "config": self.config,
            "sources": self.sources,
        }))
    }

    /// Load and parse a TOML file into a JSON value
    fn load_toml_file(path: &Path) -> Result<Value, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    fn validate_config(merged: &Value) -> Result<LedgerConfig, ConfigError> {
        let settings: MergedSettings = serde_json::from_value(merged.clone())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(LedgerConfig {
            filter_width: to_width("filter", settings.filter)?,
            report_width: to_width("report", settings.report)?,
            column_cap: DEFAULT_COLUMN_CAP,
        })
    }
}

fn to_width(section: &str, settings: WidthSettings) -> Result<IdentifierWidth, ConfigError> {
    IdentifierWidth::new(settings.min_width, settings.max_width)
        .map_err(|e| ConfigError::ValidationError(format!("{}: {}", section, e)))
}

/// Deep merge two JSON values; objects merge by key, anything else in
/// `overlay` replaces `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
