//! Table Completeness Check
//!
//! Every role a query can produce must have a label and a term in every
//! dialect. Checked once at start-up; the resolver assumes it holds.

use std::collections::BTreeSet;
use std::fmt;

use super::roles::RoleId;
use super::terms::DialectId;
use super::KinshipTables;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Roles the queries can return.
    pub checked_roles: usize,
    pub missing_labels: Vec<String>,
    pub missing_terms: Vec<(DialectId, String)>,
    pub blank_terms: Vec<(DialectId, String)>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.missing_labels.is_empty() && self.missing_terms.is_empty() && self.blank_terms.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.missing_labels.len() + self.missing_terms.len() + self.blank_terms.len()
    }

    /// One line per problem, for logging.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.problem_count());
        out.extend(self.missing_labels.iter().map(|r| format!("role '{r}' has no label")));
        out.extend(self.missing_terms.iter().map(|(d, r)| format!("role '{r}' has no {d} term")));
        out.extend(self.blank_terms.iter().map(|(d, r)| format!("role '{r}' has a blank {d} term")));
        out
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{} roles checked, no problems", self.checked_roles);
        }
        write!(
            f,
            "{} roles checked: {} missing labels, {} missing terms, {} blank terms",
            self.checked_roles,
            self.missing_labels.len(),
            self.missing_terms.len(),
            self.blank_terms.len()
        )
    }
}

/// Roles reachable as a resolution, continuation or reverse value.
fn produced_roles(tables: &KinshipTables) -> BTreeSet<RoleId> {
    tables
        .resolution()
        .roles()
        .chain(tables.continuation().targets())
        .chain(tables.reverse().targets())
        .collect()
}

pub fn check(tables: &KinshipTables) -> IntegrityReport {
    let roles = produced_roles(tables);
    let mut report = IntegrityReport {
        checked_roles: roles.len(),
        ..Default::default()
    };

    for &role in &roles {
        let name = tables.role_name(role);
        if tables.labels().label(role).is_none() {
            report.missing_labels.push(name.to_string());
        }
        for id in DialectId::ALL {
            match tables.dialect(id).and_then(|set| set.term(role)) {
                None => report.missing_terms.push((id, name.to_string())),
                Some(term) if term.is_blank() => report.blank_terms.push((id, name.to_string())),
                Some(_) => {}
            }
        }
    }
    report
}
