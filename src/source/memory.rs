//! In-memory resource source
//!
//! Serves a fixed set of records with the same scoping rules as a cluster.
//! Used by tests and by library consumers that already hold the objects.

use async_trait::async_trait;

use super::ResourceSource;
use crate::error::SourceError;
use crate::models::{ResourceKind, ResourceRecord, Scope};

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<ResourceRecord>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, record: ResourceRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn insert(&mut self, record: ResourceRecord) {
        self.records.push(record);
    }
}

impl FromIterator<ResourceRecord> for MemorySource {
    fn from_iter<I: IntoIterator<Item = ResourceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ResourceSource for MemorySource {
    async fn list(
        &self,
        kind: ResourceKind,
        scope: &Scope,
    ) -> Result<Vec<ResourceRecord>, SourceError> {
        let of_kind = self.records.iter().filter(|r| r.kind() == kind);

        let records: Vec<ResourceRecord> = match (scope, kind) {
            (Scope::All, _) | (_, ResourceKind::PersistentVolume) => of_kind.cloned().collect(),
            (Scope::Namespace(ns), ResourceKind::Namespace) => {
                let found: Vec<_> = of_kind.filter(|r| r.name() == ns).cloned().collect();
                if found.is_empty() {
                    return Err(SourceError::NamespaceNotFound(ns.clone()));
                }
                found
            }
            (Scope::Namespace(ns), _) => of_kind
                .filter(|r| &r.meta.namespace == ns)
                .cloned()
                .collect(),
        };

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ClaimDetails, RecordMeta, ResourceDetails, VolumeDetails,
    };

    fn source() -> MemorySource {
        MemorySource::new()
            .with(ResourceRecord::namespace("default"))
            .with(ResourceRecord::namespace("apps"))
            .with(ResourceRecord::new(
                RecordMeta::new("apps", "data"),
                ResourceDetails::PersistentVolumeClaim(ClaimDetails::default()),
            ))
            .with(ResourceRecord::new(
                RecordMeta::cluster("pv-1"),
                ResourceDetails::PersistentVolume(VolumeDetails::default()),
            ))
    }

    #[tokio::test]
    async fn test_all_scope_returns_everything() {
        let src = source();
        let ns = src.list(ResourceKind::Namespace, &Scope::All).await.unwrap();
        assert_eq!(ns.len(), 2);
    }

    #[tokio::test]
    async fn test_namespace_scope_filters() {
        let src = source();
        let scope = Scope::parse("default");
        let ns = src.list(ResourceKind::Namespace, &scope).await.unwrap();
        assert_eq!(ns.len(), 1);
        assert_eq!(ns[0].name(), "default");

        let claims = src
            .list(ResourceKind::PersistentVolumeClaim, &scope)
            .await
            .unwrap();
        assert!(claims.is_empty());

        // Volumes are cluster-scoped
        let volumes = src
            .list(ResourceKind::PersistentVolume, &scope)
            .await
            .unwrap();
        assert_eq!(volumes.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_namespace_is_an_error() {
        let src = source();
        let err = src
            .list(ResourceKind::Namespace, &Scope::parse("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NamespaceNotFound(ref ns) if ns == "nope"));
    }
}
