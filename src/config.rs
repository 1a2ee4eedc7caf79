//! Engine Configuration
//!
//! Defaults match the shipped tables; `from_env` overlays the
//! `KINSHIP_*` variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::kinship::resolver::DEFAULT_MAX_DEPTH;

pub const ENV_DATA_DIR: &str = "KINSHIP_DATA_DIR";
pub const ENV_MAX_DEPTH: &str = "KINSHIP_MAX_DEPTH";
pub const ENV_STRICT_TABLES: &str = "KINSHIP_STRICT_TABLES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Continuation hops allowed per chain.
    pub max_continuation_depth: usize,
    /// Table directory; `None` uses the tables compiled into the crate.
    pub data_dir: Option<PathBuf>,
    /// Refuse to start on incomplete tables instead of warning.
    pub strict_tables: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_continuation_depth: DEFAULT_MAX_DEPTH,
            data_dir: None,
            strict_tables: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_continuation_depth(mut self, depth: usize) -> Self {
        self.max_continuation_depth = depth;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_strict_tables(mut self, strict: bool) -> Self {
        self.strict_tables = strict;
        self
    }

    /// Defaults overlaid with the process environment. Values that do not
    /// parse are logged and skipped.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = var(ENV_MAX_DEPTH) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.max_continuation_depth = depth,
                Err(e) => warn!("Ignoring {}={:?}: {}", ENV_MAX_DEPTH, raw, e),
            }
        }

        if let Some(raw) = var(ENV_STRICT_TABLES) {
            match parse_flag(&raw) {
                Some(strict) => config.strict_tables = strict,
                None => warn!("Ignoring {}={:?}: expected true or false", ENV_STRICT_TABLES, raw),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
