//! Reverse Table
//!
//! What the addressed relative calls the subject. Not total: a missing row
//! means no conventional reciprocal term exists.

use crate::kinship::step::Gender;

use super::roles::RoleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseEntry {
    /// Same reciprocal whatever the subject's gender (spouses, co-parents-in-law).
    Uniform(RoleId),
    /// Reciprocal chosen by the subject's gender.
    ByGender { male: RoleId, female: RoleId },
}

impl ReverseEntry {
    pub fn for_gender(self, gender: Gender) -> RoleId {
        match self {
            ReverseEntry::Uniform(role) => role,
            ReverseEntry::ByGender { male, female } => match gender {
                Gender::Male => male,
                Gender::Female => female,
            },
        }
    }

    pub fn targets(self) -> impl Iterator<Item = RoleId> {
        let (a, b) = match self {
            ReverseEntry::Uniform(role) => (role, None),
            ReverseEntry::ByGender { male, female } => (male, Some(female)),
        };
        std::iter::once(a).chain(b)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReverseTable {
    rows: Vec<Option<ReverseEntry>>,
}

impl ReverseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: RoleId, entry: ReverseEntry) {
        if self.rows.len() <= role.index() {
            self.rows.resize(role.index() + 1, None);
        }
        self.rows[role.index()] = Some(entry);
    }

    pub fn entry(&self, role: RoleId) -> Option<ReverseEntry> {
        self.rows.get(role.index()).copied().flatten()
    }

    pub fn lookup(&self, role: RoleId, gender: Gender) -> Option<RoleId> {
        self.entry(role).map(|e| e.for_gender(gender))
    }

    /// Every role named as a reciprocal anywhere in the table.
    pub fn targets(&self) -> impl Iterator<Item = RoleId> + '_ {
        self.rows.iter().flatten().flat_map(|e| e.targets())
    }

    pub fn len(&self) -> usize {
        self.rows.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
