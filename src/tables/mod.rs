//! Kinship Tables
//!
//! Static, read-only data the resolution engine consults: the resolution
//! trie, continuation edges, reciprocal roles, English labels, per-dialect
//! terms and the chain reduction rules. Loaded once and never mutated.

pub mod continuation;
pub mod error;
pub mod integrity;
pub mod resolution;
pub mod reverse;
pub mod roles;
pub mod source;
pub mod terms;

use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::kinship::normalizer::Normalizer;

pub use continuation::ContinuationTable;
pub use error::TableError;
pub use integrity::IntegrityReport;
pub use resolution::ResolutionTable;
pub use reverse::{ReverseEntry, ReverseTable};
pub use roles::{RoleId, RoleRegistry};
pub use source::TableSource;
pub use terms::{DialectId, DialectMeta, DialectTerm, DialectTermSet, RoleLabelTable};

const RESOLUTION_YAML: &str = include_str!("../../data/resolution.yaml");
const CONTINUATION_YAML: &str = include_str!("../../data/continuation.yaml");
const REVERSE_YAML: &str = include_str!("../../data/reverse.yaml");
const LABELS_YAML: &str = include_str!("../../data/labels.yaml");
const REDUCTION_YAML: &str = include_str!("../../data/reduction.yaml");
const DIALECT_YAML: [&str; 4] = [
    include_str!("../../data/dialects/mandarin.yaml"),
    include_str!("../../data/dialects/hokkien.yaml"),
    include_str!("../../data/dialects/cantonese.yaml"),
    include_str!("../../data/dialects/teochew.yaml"),
];

fn read(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The complete, immutable table set.
#[derive(Debug, Clone)]
pub struct KinshipTables {
    pub(crate) roles: RoleRegistry,
    pub(crate) resolution: ResolutionTable,
    pub(crate) continuation: ContinuationTable,
    pub(crate) reverse: ReverseTable,
    pub(crate) labels: RoleLabelTable,
    pub(crate) dialects: BTreeMap<DialectId, DialectTermSet>,
    pub(crate) normalizer: Normalizer,
}

impl KinshipTables {
    /// Tables compiled into the crate from `data/`.
    pub fn embedded() -> Result<Self, TableError> {
        let tables = TableSource::from_yaml(
            RESOLUTION_YAML,
            CONTINUATION_YAML,
            REVERSE_YAML,
            LABELS_YAML,
            REDUCTION_YAML,
            &DIALECT_YAML,
        )?
        .build()?;
        tables.log_summary("embedded");
        Ok(tables)
    }

    /// Loads the same file layout as `data/` from `dir`. Every `*.yaml`
    /// file under `dir/dialects` is read as one dialect.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TableError> {
        let dir = dir.as_ref();

        let dialect_dir = dir.join("dialects");
        let mut dialect_paths: Vec<_> = std::fs::read_dir(&dialect_dir)
            .map_err(|source| TableError::Io {
                path: dialect_dir.clone(),
                source,
            })?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map_or(false, |ext| ext == "yaml"))
            .collect();
        dialect_paths.sort();
        let dialect_texts = dialect_paths.iter().map(|p| read(p)).collect::<Result<Vec<_>, _>>()?;
        let dialect_refs: Vec<&str> = dialect_texts.iter().map(String::as_str).collect();

        let tables = TableSource::from_yaml(
            &read(&dir.join("resolution.yaml"))?,
            &read(&dir.join("continuation.yaml"))?,
            &read(&dir.join("reverse.yaml"))?,
            &read(&dir.join("labels.yaml"))?,
            &read(&dir.join("reduction.yaml"))?,
            &dialect_refs,
        )?
        .build()?;
        tables.log_summary(&dir.display().to_string());
        Ok(tables)
    }

    fn log_summary(&self, origin: &str) {
        info!(
            "Loaded kinship tables from {}: {} roles, {} chains, {} continuations, {} reciprocals, {} dialects",
            origin,
            self.roles.len(),
            self.resolution.len(),
            self.continuation.edge_count(),
            self.reverse.len(),
            self.dialects.len()
        );
    }

    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    /// Looks up a role by its canonical name.
    pub fn role(&self, name: &str) -> Option<RoleId> {
        self.roles.get(name)
    }

    pub fn role_name(&self, id: RoleId) -> &str {
        self.roles.name(id)
    }

    pub fn resolution(&self) -> &ResolutionTable {
        &self.resolution
    }

    pub fn continuation(&self) -> &ContinuationTable {
        &self.continuation
    }

    pub fn reverse(&self) -> &ReverseTable {
        &self.reverse
    }

    pub fn labels(&self) -> &RoleLabelTable {
        &self.labels
    }

    pub fn dialect(&self, id: DialectId) -> Option<&DialectTermSet> {
        self.dialects.get(&id)
    }

    /// Dialect term sets in `DialectId` order.
    pub fn dialects(&self) -> impl Iterator<Item = &DialectTermSet> {
        self.dialects.values()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}
