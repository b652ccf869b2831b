//! Tree assembly
//!
//! Ingests a snapshot kind by kind in dependency order so every owner is
//! indexed before its dependents arrive. Services are classified and
//! indexed in their slot but linked only once pods are indexed.

use super::graph::{NodeId, ResourceTree};
use super::index::ResourceIndex;
use super::linker;
use super::resolver::resolve_parents;
use crate::models::{ResourceDetails, ResourceKind, ResourceRecord};
use crate::source::Snapshot;

/// Build the ownership forest for a snapshot
pub fn build(snapshot: &Snapshot) -> ResourceTree {
    TreeBuilder::new().build(snapshot)
}

/// Owns the tree and the index for the duration of one build
struct TreeBuilder {
    tree: ResourceTree,
    index: ResourceIndex,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            tree: ResourceTree::new(),
            index: ResourceIndex::new(),
        }
    }

    fn build(mut self, snapshot: &Snapshot) -> ResourceTree {
        let mut services = Vec::new();

        for &kind in ResourceKind::ingestion_order() {
            let records = snapshot.records(kind);
            for record in records {
                match &record.details {
                    ResourceDetails::PersistentVolume(_) => self.add_volume(record),
                    ResourceDetails::Service(_) => services.push(self.register(record)),
                    ResourceDetails::Pod(_) => self.add_pod(record),
                    _ => {
                        self.add_owned(record);
                    }
                }
            }
            tracing::debug!("Ingested {} {} records", records.len(), kind);
        }

        let mut linked = 0;
        for service in services {
            if linker::link_service(&mut self.tree, &self.index, service) > 0 {
                linked += 1;
            }
        }
        tracing::debug!(
            "Linked {} of {} services to pods",
            linked,
            self.index.count(ResourceKind::Service)
        );

        self.tree
    }

    /// Create and index a node without attaching it anywhere
    fn register(&mut self, record: &ResourceRecord) -> NodeId {
        let key = ResourceIndex::key(&record.meta.namespace, &record.meta.name);
        let id = self.tree.insert(record.clone());
        self.index.register(record.kind(), key, id);
        id
    }

    /// Attach under every resolved parent; the last one is canonical
    fn add_owned(&mut self, record: &ResourceRecord) -> NodeId {
        // Resolve before registering so a record can never own itself
        let parents = resolve_parents(&self.tree, &self.index, &record.meta);
        let id = self.register(record);
        for &parent in &parents {
            self.tree.attach(parent, id);
            self.tree.set_parent(id, parent);
        }
        id
    }

    fn add_pod(&mut self, record: &ResourceRecord) {
        let id = self.add_owned(record);
        if let ResourceDetails::Pod(details) = &record.details {
            linker::link_pod_claims(
                &mut self.tree,
                &self.index,
                id,
                &record.meta.namespace,
                &details.claim_names,
            );
        }
    }

    /// Volumes only show up under the claim they are bound to
    fn add_volume(&mut self, record: &ResourceRecord) {
        let id = self.register(record);
        let root = self.tree.root();
        self.tree.set_parent(id, root);
        if let ResourceDetails::PersistentVolume(details) = &record.details {
            linker::link_volume(&mut self.tree, &self.index, id, details);
        }
    }
}
