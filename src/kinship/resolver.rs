//! Chain Resolver
//!
//! Turns a normalized chain into a canonical role in two stages:
//!
//! 1. Exact match of the whole chain in the resolution table. An exact entry
//!    always wins over anything continuation would derive.
//! 2. Otherwise the longest shorter prefix with an entry is taken as the
//!    starting role, and the remaining steps are consumed one at a time
//!    through the continuation table, for at most `max_depth` hops.

use thiserror::Error;
use tracing::trace;

use crate::tables::{KinshipTables, RoleId};

use super::step::{Gender, RelationStep};

/// Continuation hops allowed before a chain is given up on.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Why a chain has no role. Diagnostic only: callers see `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    #[error("chain is empty")]
    EmptyChain,

    #[error("no prefix of the chain has a table entry")]
    NoPrefixMatch,

    #[error("role '{role}' has no continuation for '{step}' at position {position}")]
    ContinuationGap {
        role: String,
        step: RelationStep,
        position: usize,
    },

    #[error("continuation did not finish within {limit} hops")]
    DepthExceeded { limit: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct ChainResolver<'a> {
    tables: &'a KinshipTables,
    max_depth: usize,
}

impl<'a> ChainResolver<'a> {
    pub fn new(tables: &'a KinshipTables) -> Self {
        Self {
            tables,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn resolve(&self, chain: &[RelationStep], gender: Gender) -> Option<RoleId> {
        self.resolve_detailed(chain, gender).ok()
    }

    /// Resolves an already normalized chain, reporting why it failed.
    pub fn resolve_detailed(
        &self,
        chain: &[RelationStep],
        gender: Gender,
    ) -> Result<RoleId, Unresolved> {
        if chain.is_empty() {
            return Err(Unresolved::EmptyChain);
        }

        let resolution = self.tables.resolution();
        if let Some(role) = resolution.lookup(chain, gender) {
            return Ok(role);
        }

        let (mut pos, mut role) = resolution
            .longest_prefix(&chain[..chain.len() - 1], gender)
            .ok_or(Unresolved::NoPrefixMatch)?;

        let continuation = self.tables.continuation();
        let mut hops = 0;
        while pos < chain.len() && hops < self.max_depth {
            hops += 1;
            let step = chain[pos];
            let next = continuation
                .next(role, step)
                .ok_or_else(|| Unresolved::ContinuationGap {
                    role: self.tables.role_name(role).to_string(),
                    step,
                    position: pos,
                })?;
            trace!(
                "continuation: {} --{}--> {}",
                self.tables.role_name(role),
                step,
                self.tables.role_name(next)
            );
            role = next;
            pos += 1;
        }

        if pos < chain.len() {
            return Err(Unresolved::DepthExceeded { limit: self.max_depth });
        }
        Ok(role)
    }
}
