//! Table Sources
//!
//! The serde shape of the YAML resources under `data/`, and the conversion
//! into interned, indexed `KinshipTables`.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::kinship::normalizer::{Normalizer, ReductionRule};
use crate::kinship::step::{Gender, RelationStep};

use super::continuation::ContinuationTable;
use super::error::TableError;
use super::resolution::ResolutionTable;
use super::reverse::{ReverseEntry, ReverseTable};
use super::roles::RoleRegistry;
use super::terms::{DialectId, DialectMeta, DialectTerm, DialectTermSet, RoleLabelTable};
use super::KinshipTables;

#[derive(Debug, Clone, Deserialize)]
pub struct ResolutionEntry {
    pub chain: Vec<RelationStep>,
    #[serde(default)]
    pub gender: Option<Gender>,
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolutionSource {
    #[serde(default)]
    pub entries: Vec<ResolutionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReverseSource {
    Uniform(String),
    ByGender { male: String, female: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleSource {
    pub pattern: Vec<RelationStep>,
    #[serde(default)]
    pub replacement: Vec<RelationStep>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReductionSource {
    #[serde(default)]
    pub rules: Vec<RuleSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialectSource {
    pub id: DialectId,
    pub name: String,
    pub native_name: String,
    #[serde(default)]
    pub romanization_system: String,
    #[serde(default)]
    pub terms: BTreeMap<String, DialectTerm>,
}

/// Raw, un-interned table data.
#[derive(Debug, Clone, Default)]
pub struct TableSource {
    pub resolution: ResolutionSource,
    pub continuation: BTreeMap<String, BTreeMap<RelationStep, String>>,
    pub reverse: BTreeMap<String, ReverseSource>,
    pub labels: BTreeMap<String, String>,
    pub reduction: ReductionSource,
    pub dialects: Vec<DialectSource>,
}

fn parse<T: for<'de> Deserialize<'de> + Default>(table: &str, text: &str) -> Result<T, TableError> {
    // an empty document is an empty table
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(text).map_err(|source| TableError::Parse {
        table: table.to_string(),
        source,
    })
}

impl TableSource {
    /// Parses one YAML document per table. Each dialect is its own document.
    pub fn from_yaml(
        resolution: &str,
        continuation: &str,
        reverse: &str,
        labels: &str,
        reduction: &str,
        dialects: &[&str],
    ) -> Result<Self, TableError> {
        let dialects = dialects
            .iter()
            .enumerate()
            .map(|(i, text)| {
                serde_yaml::from_str::<DialectSource>(text).map_err(|source| TableError::Parse {
                    table: format!("dialect #{i}"),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            resolution: parse("resolution", resolution)?,
            continuation: parse("continuation", continuation)?,
            reverse: parse("reverse", reverse)?,
            labels: parse("labels", labels)?,
            reduction: parse("reduction", reduction)?,
            dialects,
        })
    }

    /// Interns every role name and builds the indexed tables.
    ///
    /// Only structural problems fail here; missing labels or terms are left
    /// to the integrity check.
    pub fn build(self) -> Result<KinshipTables, TableError> {
        let mut roles = RoleRegistry::new();

        let mut resolution = ResolutionTable::new();
        for entry in &self.resolution.entries {
            if entry.chain.is_empty() {
                return Err(TableError::EmptyChain { role: entry.role.clone() });
            }
            let role = roles.intern(&entry.role)?;
            resolution.insert(&entry.chain, entry.gender, role)?;
        }

        let mut continuation = ContinuationTable::new();
        for (from, steps) in &self.continuation {
            let from = roles.intern(from)?;
            for (step, to) in steps {
                let to = roles.intern(to)?;
                continuation.insert(from, *step, to);
            }
        }

        let mut reverse = ReverseTable::new();
        for (role, source) in &self.reverse {
            let role = roles.intern(role)?;
            let entry = match source {
                ReverseSource::Uniform(to) => ReverseEntry::Uniform(roles.intern(to)?),
                ReverseSource::ByGender { male, female } => ReverseEntry::ByGender {
                    male: roles.intern(male)?,
                    female: roles.intern(female)?,
                },
            };
            reverse.insert(role, entry);
        }

        let mut labels = RoleLabelTable::new();
        for (role, label) in self.labels {
            labels.insert(roles.intern(&role)?, label);
        }

        let mut dialects: BTreeMap<DialectId, DialectTermSet> = BTreeMap::new();
        for source in self.dialects {
            if dialects.contains_key(&source.id) {
                return Err(TableError::DuplicateDialect(source.id));
            }
            let mut set = DialectTermSet::new(DialectMeta {
                id: source.id,
                name: source.name,
                native_name: source.native_name,
                romanization_system: source.romanization_system,
            });
            for (role, term) in source.terms {
                set.insert(roles.intern(&role)?, term);
            }
            dialects.insert(source.id, set);
        }

        let rules = self
            .reduction
            .rules
            .into_iter()
            .map(|r| -> Result<ReductionRule, TableError> {
                let rule = ReductionRule::new(r.pattern, r.replacement)?;
                Ok(match r.gender {
                    Some(g) => rule.only_for(g),
                    None => rule,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(KinshipTables {
            roles,
            resolution,
            continuation,
            reverse,
            labels,
            dialects,
            normalizer: Normalizer::new(rules),
        })
    }
}
