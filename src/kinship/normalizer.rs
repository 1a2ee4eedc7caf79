//! Chain Normalizer
//!
//! Rewrites a chain with an ordered list of reduction rules before it is
//! resolved, e.g. "husband's wife" collapses to the subject.
//!
//! Rules are tried in declaration order and each rule scans the chain left
//! to right; the first match is rewritten and scanning restarts from the
//! first rule. Every rule strictly shortens the chain, so the loop runs at
//! most `chain.len()` times.

use thiserror::Error;
use tracing::trace;

use super::step::{format_chain, Chain, Gender, RelationStep};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("pattern '{pattern}' must be non-empty and longer than its replacement '{replacement}'")]
    NotShrinking { pattern: String, replacement: String },
}

/// `pattern -> replacement`, optionally restricted to one subject gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionRule {
    pattern: Vec<RelationStep>,
    replacement: Vec<RelationStep>,
    gender: Option<Gender>,
}

impl ReductionRule {
    pub fn new(pattern: Vec<RelationStep>, replacement: Vec<RelationStep>) -> Result<Self, RuleError> {
        if pattern.is_empty() || replacement.len() >= pattern.len() {
            return Err(RuleError::NotShrinking {
                pattern: format_chain(&pattern),
                replacement: format_chain(&replacement),
            });
        }
        Ok(Self {
            pattern,
            replacement,
            gender: None,
        })
    }

    /// Restricts the rule to subjects of `gender`.
    pub fn only_for(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn pattern(&self) -> &[RelationStep] {
        &self.pattern
    }

    pub fn replacement(&self) -> &[RelationStep] {
        &self.replacement
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    fn applies_to(&self, subject: Option<Gender>) -> bool {
        match self.gender {
            None => true,
            Some(g) => subject == Some(g),
        }
    }

    /// Leftmost start index where the pattern occurs in `chain`.
    fn find_in(&self, chain: &[RelationStep]) -> Option<usize> {
        chain.windows(self.pattern.len()).position(|w| w == self.pattern.as_slice())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: Vec<ReductionRule>,
}

impl Normalizer {
    pub fn new(rules: Vec<ReductionRule>) -> Self {
        Self { rules }
    }

    /// Cancels adjacent spouse pairs: husband·wife and wife·husband.
    pub fn spouse_cancellation() -> Self {
        use RelationStep::{Husband, Wife};
        Self::new(vec![
            ReductionRule {
                pattern: vec![Husband, Wife],
                replacement: vec![],
                gender: None,
            },
            ReductionRule {
                pattern: vec![Wife, Husband],
                replacement: vec![],
                gender: None,
            },
        ])
    }

    pub fn rules(&self) -> &[ReductionRule] {
        &self.rules
    }

    /// Normalizes with the rules that carry no gender condition.
    pub fn normalize(&self, chain: &[RelationStep]) -> Chain {
        self.reduce(chain, None)
    }

    /// Normalizes for a subject of `gender`: unconditional rules plus the
    /// rules restricted to that gender.
    pub fn normalize_for(&self, chain: &[RelationStep], gender: Gender) -> Chain {
        self.reduce(chain, Some(gender))
    }

    fn reduce(&self, chain: &[RelationStep], subject: Option<Gender>) -> Chain {
        let mut current = chain.to_vec();
        while let Some((rule, at)) = self.first_match(&current, subject) {
            let end = at + rule.pattern.len();
            trace!(
                "normalize: {} -> {} at {} in {}",
                format_chain(&rule.pattern),
                format_chain(&rule.replacement),
                at,
                format_chain(&current)
            );
            current.splice(at..end, rule.replacement.iter().copied());
        }
        current
    }

    /// Earliest rule in declaration order, at its leftmost position.
    fn first_match(&self, chain: &[RelationStep], subject: Option<Gender>) -> Option<(&ReductionRule, usize)> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(subject))
            .find_map(|rule| rule.find_in(chain).map(|at| (rule, at)))
    }
}
