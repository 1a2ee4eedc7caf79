//! Chinese Kinship Calculator
//!
//! Resolves a chain of relation steps ("father's older brother's son's wife")
//! to a canonical kinship role and its term in several Chinese dialects:
//! - Chain normalization with ordered reduction rules
//! - Exact lookup plus continuation for arbitrarily long chains
//! - Reciprocal terms (what the relative calls you)
//! - Next-step validation for incremental chain building
//! - Mandarin, Hokkien, Cantonese and Teochew terms

pub mod config;
pub mod kinship;
pub mod tables;

// Re-exports for convenience
pub use config::EngineConfig;
pub use kinship::{
    Gender, KinshipEngine, KinshipQuery, RelationStep, ResolutionResult, StepRejected, Unresolved,
};
pub use tables::{DialectId, DialectTerm, KinshipTables, RoleId, TableError};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_ENGINE: Result<KinshipEngine, TableError> =
        KinshipEngine::from_config(EngineConfig::default());
}

/// Process-wide engine over the embedded tables, built on first use.
pub fn default_engine() -> Result<&'static KinshipEngine, &'static TableError> {
    DEFAULT_ENGINE.as_ref()
}
