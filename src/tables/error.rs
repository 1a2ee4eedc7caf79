use std::path::PathBuf;
use thiserror::Error;

use super::integrity::IntegrityReport;
use super::terms::DialectId;

/// Failure to build a usable table set.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {table} data: {source}")]
    Parse {
        table: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("resolution entry for role '{role}' has an empty chain")]
    EmptyChain { role: String },

    #[error("duplicate resolution entry for chain '{chain}'")]
    DuplicateChain { chain: String },

    #[error("dialect '{0}' is defined more than once")]
    DuplicateDialect(DialectId),

    #[error("invalid reduction rule: {0}")]
    InvalidRule(#[from] crate::kinship::normalizer::RuleError),

    #[error("role table overflow after {0} roles")]
    TooManyRoles(usize),

    #[error("table data is incomplete: {0}")]
    Incomplete(IntegrityReport),
}
