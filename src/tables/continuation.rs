//! Continuation Table
//!
//! One-step extensions of an already resolved role, one dense row per role.
//! Rows may lead back to roles of the same generation (a cousin's sibling is
//! another cousin); the resolver bounds the walk, not this table.

use crate::kinship::step::RelationStep;

use super::roles::RoleId;

type Row = [Option<RoleId>; RelationStep::COUNT];

#[derive(Debug, Clone, Default)]
pub struct ContinuationTable {
    rows: Vec<Row>,
    edges: usize,
}

impl ContinuationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `from --step--> to`, returning the edge it replaced, if any.
    pub fn insert(&mut self, from: RoleId, step: RelationStep, to: RoleId) -> Option<RoleId> {
        if self.rows.len() <= from.index() {
            self.rows.resize(from.index() + 1, [None; RelationStep::COUNT]);
        }
        let previous = self.rows[from.index()][step.index()].replace(to);
        if previous.is_none() {
            self.edges += 1;
        }
        previous
    }

    pub fn next(&self, from: RoleId, step: RelationStep) -> Option<RoleId> {
        self.rows.get(from.index())?[step.index()]
    }

    /// Steps that extend `from`, in `RelationStep` order.
    pub fn steps_from(&self, from: RoleId) -> impl Iterator<Item = (RelationStep, RoleId)> + '_ {
        let row = self.rows.get(from.index());
        RelationStep::ALL
            .into_iter()
            .filter_map(move |step| row.and_then(|r| r[step.index()]).map(|to| (step, to)))
    }

    /// Every role reachable as an edge target.
    pub fn targets(&self) -> impl Iterator<Item = RoleId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().flatten().copied())
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
