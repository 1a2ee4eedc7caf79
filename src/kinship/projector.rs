//! Term Projection
//!
//! Maps a canonical role to its English label and its term in every loaded
//! dialect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tables::{DialectId, DialectTerm, KinshipTables, RoleId};

/// A resolved role as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub role_id: String,
    pub label: String,
    /// Ordered Mandarin, Hokkien, Cantonese, Teochew. Dialects without a
    /// term for the role are left out.
    pub terms: BTreeMap<DialectId, DialectTerm>,
}

impl ResolutionResult {
    pub fn term(&self, dialect: DialectId) -> Option<&DialectTerm> {
        self.terms.get(&dialect)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TermProjector<'a> {
    tables: &'a KinshipTables,
}

impl<'a> TermProjector<'a> {
    pub fn new(tables: &'a KinshipTables) -> Self {
        Self { tables }
    }

    pub fn project(&self, role: RoleId) -> ResolutionResult {
        let role_id = self.tables.role_name(role).to_string();
        let label = self
            .tables
            .labels()
            .label(role)
            .map(str::to_string)
            .unwrap_or_else(|| role_id.clone());
        let terms = self
            .tables
            .dialects()
            .filter_map(|set| set.term(role).map(|t| (set.id(), t.clone())))
            .collect();

        ResolutionResult { role_id, label, terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableSource;

    const HOKKIEN: &str = r#"
id: hokkien
name: Hokkien
native_name: 闽南话
terms:
  father: { characters: "阿爸", romanization: "a-pa" }
"#;

    const MANDARIN: &str = r#"
id: mandarin
name: Mandarin
native_name: 普通话
terms:
  father: { characters: "爸爸", romanization: "bàba", alternates: ["父亲"] }
  uncle: { characters: "伯伯", romanization: "bóbo" }
"#;

    #[test]
    fn test_projection_orders_dialects_and_falls_back() {
        let tables = TableSource::from_yaml(
            "entries:\n  - { chain: [father], role: father }\n  - { chain: [father, older_brother], role: uncle }\n",
            "",
            "",
            "father: Father\n",
            "",
            &[HOKKIEN, MANDARIN],
        )
        .unwrap()
        .build()
        .unwrap();
        let p = TermProjector::new(&tables);

        let father = p.project(tables.role("father").unwrap());
        assert_eq!(father.label, "Father");
        let order: Vec<_> = father.terms.keys().copied().collect();
        assert_eq!(order, vec![DialectId::Mandarin, DialectId::Hokkien]);
        assert_eq!(father.term(DialectId::Mandarin).unwrap().alternates, vec!["父亲"]);

        let uncle = p.project(tables.role("uncle").unwrap());
        assert_eq!(uncle.role_id, "uncle");
        assert_eq!(uncle.label, "uncle");
        assert_eq!(uncle.terms.len(), 1);
        assert!(uncle.term(DialectId::Hokkien).is_none());
    }
}
