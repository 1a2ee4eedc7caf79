//! Kinship Engine
//!
//! The in-process entry point: owns the tables and configuration and wires
//! the normalizer, resolver, reverse resolver, validator and projector
//! together. Every query is a pure read, so one engine can be shared across
//! threads without locking.

use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::tables::{integrity, IntegrityReport, KinshipTables, RoleId, TableError};

use super::projector::{ResolutionResult, TermProjector};
use super::resolver::{ChainResolver, Unresolved};
use super::reverse::ReverseResolver;
use super::step::{format_chain, Chain, Gender, RelationStep};
use super::validator::StepValidator;

#[derive(Debug, Clone)]
pub struct KinshipEngine {
    tables: KinshipTables,
    config: EngineConfig,
}

impl KinshipEngine {
    /// Wraps already loaded tables without the completeness check.
    pub fn new(tables: KinshipTables) -> Self {
        Self::with_config(tables, EngineConfig::default())
    }

    pub fn with_config(tables: KinshipTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Loads the tables named by `config` and runs the completeness check.
    pub fn from_config(config: EngineConfig) -> Result<Self, TableError> {
        let tables = match &config.data_dir {
            Some(dir) => KinshipTables::load_dir(dir)?,
            None => KinshipTables::embedded()?,
        };
        Self::checked(tables, config)
    }

    /// Runs the completeness check over `tables` before accepting them.
    pub fn checked(tables: KinshipTables, config: EngineConfig) -> Result<Self, TableError> {
        let report = integrity::check(&tables);
        if !report.is_clean() {
            for problem in report.problems() {
                warn!("Kinship tables: {}", problem);
            }
            if config.strict_tables {
                return Err(TableError::Incomplete(report));
            }
        }
        info!(
            "Kinship engine ready ({}, max continuation depth {})",
            report, config.max_continuation_depth
        );
        Ok(Self { tables, config })
    }

    pub fn tables(&self) -> &KinshipTables {
        &self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn integrity_report(&self) -> IntegrityReport {
        integrity::check(&self.tables)
    }

    fn resolver(&self) -> ChainResolver<'_> {
        ChainResolver::new(&self.tables).with_max_depth(self.config.max_continuation_depth)
    }

    /// Applies the reduction rules that hold for a subject of `gender`.
    pub fn normalize(&self, chain: &[RelationStep], gender: Gender) -> Chain {
        self.tables.normalizer().normalize_for(chain, gender)
    }

    /// Normalizes and resolves, keeping the reason a chain has no role.
    pub fn diagnose(&self, chain: &[RelationStep], gender: Gender) -> Result<RoleId, Unresolved> {
        if chain.is_empty() {
            return Err(Unresolved::EmptyChain);
        }
        let normalized = self.normalize(chain, gender);
        let outcome = self.resolver().resolve_detailed(&normalized, gender);
        if let Err(cause) = &outcome {
            debug!("Unresolved chain {} ({}): {}", format_chain(chain), gender, cause);
        }
        outcome
    }

    pub fn resolve_id(&self, chain: &[RelationStep], gender: Gender) -> Option<RoleId> {
        self.diagnose(chain, gender).ok()
    }

    pub fn resolve(&self, chain: &[RelationStep], gender: Gender) -> Option<ResolutionResult> {
        let role = self.resolve_id(chain, gender)?;
        Some(TermProjector::new(&self.tables).project(role))
    }

    /// What the relative at the end of `chain` calls the subject.
    pub fn resolve_reverse(&self, chain: &[RelationStep], gender: Gender) -> Option<ResolutionResult> {
        let role = self.resolve_id(chain, gender)?;
        let reciprocal = ReverseResolver::new(&self.tables).reverse(role, gender)?;
        Some(TermProjector::new(&self.tables).project(reciprocal))
    }

    pub fn valid_next_steps(&self, chain: &[RelationStep], gender: Gender) -> BTreeSet<RelationStep> {
        StepValidator::new(&self.tables, self.resolver()).valid_next_steps(chain, gender)
    }
}
