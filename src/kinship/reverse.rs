//! Reverse Resolver
//!
//! Given a resolved role, finds what that relative calls the subject.

use crate::tables::{KinshipTables, RoleId};

use super::step::Gender;

#[derive(Debug, Clone, Copy)]
pub struct ReverseResolver<'a> {
    tables: &'a KinshipTables,
}

impl<'a> ReverseResolver<'a> {
    pub fn new(tables: &'a KinshipTables) -> Self {
        Self { tables }
    }

    /// The reciprocal of `role` for a subject of `gender`. `None` means no
    /// conventional reciprocal term exists, which is not an error.
    pub fn reverse(&self, role: RoleId, gender: Gender) -> Option<RoleId> {
        self.tables.reverse().lookup(role, gender)
    }
}
