//! Role Labels and Dialect Terms
//!
//! Localized renderings of canonical roles: an English label per role, and
//! per dialect the written form, its romanization and optional alternates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::roles::RoleId;

/// Regional varieties a role is projected into. Declaration order is the
/// order results list their terms in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectId {
    Mandarin,
    Hokkien,
    Cantonese,
    Teochew,
}

impl DialectId {
    pub const ALL: [DialectId; 4] = [
        DialectId::Mandarin,
        DialectId::Hokkien,
        DialectId::Cantonese,
        DialectId::Teochew,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DialectId::Mandarin => "mandarin",
            DialectId::Hokkien => "hokkien",
            DialectId::Cantonese => "cantonese",
            DialectId::Teochew => "teochew",
        }
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectMeta {
    pub id: DialectId,
    /// English name, e.g. "Hokkien".
    pub name: String,
    /// Name in the variety itself, e.g. "闽南话".
    pub native_name: String,
    pub romanization_system: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectTerm {
    pub characters: String,
    pub romanization: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DialectTerm {
    pub fn is_blank(&self) -> bool {
        self.characters.trim().is_empty() || self.romanization.trim().is_empty()
    }
}

/// All terms of one dialect.
#[derive(Debug, Clone)]
pub struct DialectTermSet {
    meta: DialectMeta,
    terms: HashMap<RoleId, DialectTerm>,
}

impl DialectTermSet {
    pub fn new(meta: DialectMeta) -> Self {
        Self {
            meta,
            terms: HashMap::new(),
        }
    }

    pub fn insert(&mut self, role: RoleId, term: DialectTerm) {
        self.terms.insert(role, term);
    }

    pub fn meta(&self) -> &DialectMeta {
        &self.meta
    }

    pub fn id(&self) -> DialectId {
        self.meta.id
    }

    pub fn term(&self, role: RoleId) -> Option<&DialectTerm> {
        self.terms.get(&role)
    }

    pub fn terms(&self) -> impl Iterator<Item = (RoleId, &DialectTerm)> {
        self.terms.iter().map(|(r, t)| (*r, t))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleLabelTable {
    labels: HashMap<RoleId, String>,
}

impl RoleLabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: RoleId, label: String) {
        self.labels.insert(role, label);
    }

    pub fn label(&self, role: RoleId) -> Option<&str> {
        self.labels.get(&role).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_yaml_optional_fields() {
        let term: DialectTerm = serde_yaml::from_str("{ characters: 伯伯, romanization: bóbo }").unwrap();
        assert!(term.alternates.is_empty());
        assert!(term.notes.is_none());
        assert!(!term.is_blank());

        let json = serde_json::to_string(&term).unwrap();
        assert!(!json.contains("alternates"));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_blank_term_detected() {
        let term = DialectTerm {
            characters: "  ".into(),
            romanization: "a".into(),
            alternates: vec![],
            notes: None,
        };
        assert!(term.is_blank());
    }

    #[test]
    fn test_dialect_order() {
        let mut ids = vec![DialectId::Teochew, DialectId::Mandarin, DialectId::Cantonese, DialectId::Hokkien];
        ids.sort();
        assert_eq!(ids, DialectId::ALL.to_vec());
    }
}
