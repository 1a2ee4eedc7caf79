//! Incremental Query Session
//!
//! Builds a chain one step at a time against an engine, only accepting
//! steps the validator offers. Holds no identities and persists nothing.

use std::collections::BTreeSet;
use thiserror::Error;

use super::engine::KinshipEngine;
use super::projector::ResolutionResult;
use super::step::{format_chain, Chain, Gender, RelationStep};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{step}' cannot follow '{chain}'")]
pub struct StepRejected {
    pub step: RelationStep,
    pub chain: String,
}

#[derive(Debug, Clone)]
pub struct KinshipQuery<'e> {
    engine: &'e KinshipEngine,
    gender: Gender,
    chain: Chain,
}

impl<'e> KinshipQuery<'e> {
    pub fn new(engine: &'e KinshipEngine, gender: Gender) -> Self {
        Self {
            engine,
            gender,
            chain: Vec::new(),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn chain(&self) -> &[RelationStep] {
        &self.chain
    }

    /// Switching gender invalidates the chain built so far.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.chain.clear();
    }

    pub fn push(&mut self, step: RelationStep) -> Result<(), StepRejected> {
        if !self.next_steps().contains(&step) {
            return Err(StepRejected {
                step,
                chain: format_chain(&self.chain),
            });
        }
        self.chain.push(step);
        Ok(())
    }

    /// Keeps only the first `len` steps.
    pub fn truncate(&mut self, len: usize) {
        self.chain.truncate(len);
    }

    pub fn reset(&mut self) {
        self.chain.clear();
    }

    pub fn result(&self) -> Option<ResolutionResult> {
        self.engine.resolve(&self.chain, self.gender)
    }

    pub fn reverse(&self) -> Option<ResolutionResult> {
        self.engine.resolve_reverse(&self.chain, self.gender)
    }

    pub fn next_steps(&self) -> BTreeSet<RelationStep> {
        self.engine.valid_next_steps(&self.chain, self.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableSource;
    use RelationStep::*;

    fn engine() -> KinshipEngine {
        let tables = TableSource::from_yaml(
            "entries:\n  - { chain: [father], role: father }\n  - { chain: [father, older_brother], role: fathers_older_brother }\n",
            "",
            "father: { male: son, female: daughter }\n",
            "",
            "",
            &[],
        )
        .unwrap()
        .build()
        .unwrap();
        KinshipEngine::new(tables)
    }

    #[test]
    fn test_push_accepts_only_offered_steps() {
        let engine = engine();
        let mut q = KinshipQuery::new(&engine, Gender::Male);
        assert_eq!(q.push(Mother), Err(StepRejected { step: Mother, chain: String::new() }));
        q.push(Father).unwrap();
        q.push(OlderBrother).unwrap();
        assert_eq!(q.result().unwrap().role_id, "fathers_older_brother");

        let err = q.push(Son).unwrap_err();
        assert_eq!(err.to_string(), "'son' cannot follow 'father.older_brother'");
        assert_eq!(q.chain(), &[Father, OlderBrother]);
    }

    #[test]
    fn test_truncate_reset_and_gender() {
        let engine = engine();
        let mut q = KinshipQuery::new(&engine, Gender::Female);
        q.push(Father).unwrap();
        q.push(OlderBrother).unwrap();
        q.truncate(1);
        assert_eq!(q.reverse().unwrap().role_id, "daughter");

        q.set_gender(Gender::Male);
        assert!(q.chain().is_empty());
        assert!(q.result().is_none());

        q.push(Father).unwrap();
        q.reset();
        assert!(q.chain().is_empty());
        assert_eq!(q.gender(), Gender::Male);
    }
}
