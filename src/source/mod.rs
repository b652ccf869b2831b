//! Resource sources
//!
//! A `ResourceSource` lists the records of one kind within a scope. The build
//! fetches every tracked kind to completion, in ingestion order, before any
//! tree work starts. The first failure aborts the whole fetch.

mod memory;

pub use memory::MemorySource;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{SourceError, TreeError};
use crate::models::{ResourceKind, ResourceRecord, Scope};

/// Lists resource records from somewhere (a cluster, a fixture, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// List all records of `kind` visible in `scope`
    ///
    /// Cluster-scoped kinds ignore the namespace filter except Namespace
    /// itself, which returns only the selected namespace.
    async fn list(
        &self,
        kind: ResourceKind,
        scope: &Scope,
    ) -> Result<Vec<ResourceRecord>, SourceError>;
}

/// Every fetched collection, keyed by kind
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: HashMap<ResourceKind, Vec<ResourceRecord>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keeping per-kind collection order
    pub fn push(&mut self, record: ResourceRecord) {
        self.records.entry(record.kind()).or_default().push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ResourceRecord>) {
        for record in records {
            self.push(record);
        }
    }

    pub fn records(&self, kind: ResourceKind) -> &[ResourceRecord] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<ResourceRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        snapshot.extend(iter);
        snapshot
    }
}

/// Fetch every tracked kind from `source`
///
/// Records whose kind does not match the requested one are dropped, so a
/// misbehaving source cannot smuggle e.g. pods into the namespace slot.
pub async fn fetch_snapshot<S>(source: &S, scope: &Scope) -> Result<Snapshot, TreeError>
where
    S: ResourceSource + ?Sized,
{
    let mut snapshot = Snapshot::new();

    for &kind in ResourceKind::ingestion_order() {
        let records = source
            .list(kind, scope)
            .await
            .map_err(|source| TreeError::Fetch { kind, source })?;

        tracing::debug!("Fetched {} {} records ({})", records.len(), kind, scope);

        snapshot.extend(records.into_iter().filter(|r| {
            let matches = r.kind() == kind;
            if !matches {
                tracing::warn!("Dropping {} record {} listed as {}", r.kind(), r.name(), kind);
            }
            matches
        }));
    }

    Ok(snapshot)
}
