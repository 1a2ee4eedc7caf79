//! Resolution Table
//!
//! Directly enumerated chains, stored as a trie over `RelationStep` edges.
//! Each node may carry a plain role and a per-gender overlay; the overlay
//! for the subject's gender is consulted before the plain role.

use crate::kinship::step::{format_chain, Gender, RelationStep};

use super::error::TableError;
use super::roles::RoleId;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    plain: Option<RoleId>,
    gendered: [Option<RoleId>; 2],
    children: [Option<u32>; RelationStep::COUNT],
}

impl TrieNode {
    fn role_for(&self, gender: Gender) -> Option<RoleId> {
        self.gendered[gender.index()].or(self.plain)
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone)]
pub struct ResolutionTable {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for ResolutionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: 0,
        }
    }

    /// Adds one entry. `gender: None` is the plain entry for the chain.
    pub fn insert(&mut self, chain: &[RelationStep], gender: Option<Gender>, role: RoleId) -> Result<(), TableError> {
        let mut at = 0usize;
        for step in chain {
            at = match self.nodes[at].children[step.index()] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[at].children[step.index()] = Some(child as u32);
                    child
                }
            };
        }

        let slot = match gender {
            Some(g) => &mut self.nodes[at].gendered[g.index()],
            None => &mut self.nodes[at].plain,
        };
        if slot.is_some() {
            let mut key = format_chain(chain);
            if let Some(g) = gender {
                key = format!("{key}:{g}");
            }
            return Err(TableError::DuplicateChain { chain: key });
        }
        *slot = Some(role);
        self.entries += 1;
        Ok(())
    }

    fn node(&self, chain: &[RelationStep]) -> Option<&TrieNode> {
        let mut at = 0usize;
        for step in chain {
            at = self.nodes[at].children[step.index()]? as usize;
        }
        self.nodes.get(at)
    }

    /// Exact match for the whole chain, gendered entry first.
    pub fn lookup(&self, chain: &[RelationStep], gender: Gender) -> Option<RoleId> {
        if chain.is_empty() {
            return None;
        }
        self.node(chain)?.role_for(gender)
    }

    /// The longest non-empty prefix of `chain` (the whole slice included)
    /// that has an entry, as `(prefix_len, role)`.
    pub fn longest_prefix(&self, chain: &[RelationStep], gender: Gender) -> Option<(usize, RoleId)> {
        let mut best = None;
        let mut at = 0usize;
        for (depth, step) in chain.iter().enumerate() {
            match self.nodes[at].children[step.index()] {
                Some(child) => at = child as usize,
                None => break,
            }
            if let Some(role) = self.nodes[at].role_for(gender) {
                best = Some((depth + 1, role));
            }
        }
        best
    }

    /// Whether some entry strictly extends `chain`.
    pub fn is_strict_prefix(&self, chain: &[RelationStep]) -> bool {
        self.node(chain).map_or(false, TrieNode::has_children)
    }

    /// Every role stored in the table, gendered overlays included.
    pub fn roles(&self) -> impl Iterator<Item = RoleId> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.gendered.iter().copied().chain(std::iter::once(n.plain)))
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::roles::RoleRegistry;
    use RelationStep::*;

    fn table() -> (ResolutionTable, RoleRegistry) {
        let mut roles = RoleRegistry::new();
        let mut table = ResolutionTable::new();
        let father = roles.intern("father").unwrap();
        let grandfather = roles.intern("paternal_grandfather").unwrap();
        let in_law = roles.intern("spouses_father").unwrap();
        let husbands = roles.intern("husbands_father").unwrap();
        table.insert(&[Father], None, father).unwrap();
        table.insert(&[Father, Father], None, grandfather).unwrap();
        table.insert(&[Husband, Father], None, in_law).unwrap();
        table.insert(&[Husband, Father], Some(Gender::Female), husbands).unwrap();
        (table, roles)
    }

    #[test]
    fn test_gendered_entry_wins_over_plain() {
        let (table, roles) = table();
        let chain = [Husband, Father];
        assert_eq!(roles.name(table.lookup(&chain, Gender::Female).unwrap()), "husbands_father");
        assert_eq!(roles.name(table.lookup(&chain, Gender::Male).unwrap()), "spouses_father");
    }

    #[test]
    fn test_intermediate_nodes_do_not_resolve() {
        let (table, _) = table();
        assert!(table.lookup(&[Husband], Gender::Female).is_none());
        assert!(table.lookup(&[], Gender::Male).is_none());
        assert!(table.is_strict_prefix(&[Husband]));
        assert!(!table.is_strict_prefix(&[Husband, Father]));
        assert!(!table.is_strict_prefix(&[Son]));
    }

    #[test]
    fn test_longest_prefix() {
        let (table, roles) = table();
        let (len, role) = table.longest_prefix(&[Father, Father, Mother], Gender::Male).unwrap();
        assert_eq!(len, 2);
        assert_eq!(roles.name(role), "paternal_grandfather");
        assert!(table.longest_prefix(&[Husband], Gender::Male).is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let (mut table, mut roles) = table();
        let other = roles.intern("other").unwrap();
        let err = table.insert(&[Husband, Father], Some(Gender::Female), other).unwrap_err();
        assert!(err.to_string().contains("husband.father:female"));
        assert_eq!(table.len(), 4);
        assert_eq!(table.roles().count(), 4);
    }
}
