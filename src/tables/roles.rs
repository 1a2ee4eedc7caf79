//! Canonical role ids, interned into a dense integer space.

use std::collections::HashMap;
use std::fmt;

use super::error::TableError;

/// Index of a canonical role inside one `KinshipTables` instance.
///
/// Ids are only meaningful against the registry that issued them; the
/// stable, cross-instance identifier is the role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleId(u16);

impl RoleId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name table for role ids.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    names: Vec<String>,
    by_name: HashMap<String, RoleId>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, allocating one on first sight.
    pub fn intern(&mut self, name: &str) -> Result<RoleId, TableError> {
        if let Some(id) = self.by_name.get(name) {
            return Ok(*id);
        }
        let raw = u16::try_from(self.names.len()).map_err(|_| TableError::TooManyRoles(self.names.len()))?;
        let id = RoleId(raw);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<RoleId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: RoleId) -> &str {
        self.names.get(id.index()).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RoleId> + '_ {
        (0..self.names.len()).map(|i| RoleId(i as u16))
    }
}
