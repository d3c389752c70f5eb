//! Configuration layers
//!
//! Settings are merged in order:
//! 1. Built-in defaults
//! 2. Config file (`--config ledger.toml`)
//! 3. CLI flags

mod defaults;
mod effective;

pub use defaults::{BuiltinDefaults, WidthSettings};
pub use effective::{deep_merge, ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig, LedgerConfig};
