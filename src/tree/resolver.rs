//! Ownership resolution
//!
//! Finds the nodes a new record hangs under. Owners are only looked up in
//! the index, which holds nodes of kinds ingested earlier, so parent links
//! always point toward controllers and the forest stays acyclic.

use super::graph::{NodeId, ResourceTree};
use super::index::ResourceIndex;
use crate::models::{RecordMeta, ResourceKind};

/// Candidate parents for `meta`, never empty
///
/// 1. cluster-scoped records hang under the root
/// 2. records without owner references hang under their namespace
/// 3. otherwise every owner found in the index, in reference order
/// 4. if no owner resolves, the namespace again
///
/// Callers attach the node under every candidate and make the last one the
/// canonical parent.
pub fn resolve_parents(tree: &ResourceTree, index: &ResourceIndex, meta: &RecordMeta) -> Vec<NodeId> {
    if meta.is_cluster_scoped() {
        return vec![tree.root()];
    }

    if meta.owner_references.is_empty() {
        return vec![namespace_node(tree, index, &meta.namespace)];
    }

    let owners: Vec<NodeId> = meta
        .owner_references
        .iter()
        .filter_map(|owner| {
            let found = index.lookup_raw(&owner.kind, &ResourceIndex::key(&meta.namespace, &owner.name));
            if found.is_none() {
                tracing::trace!(
                    "Owner {}/{} of {}/{} not indexed",
                    owner.kind,
                    owner.name,
                    meta.namespace,
                    meta.name
                );
            }
            found
        })
        .collect();

    if owners.is_empty() {
        tracing::debug!(
            "No owner of {}/{} resolved, falling back to namespace",
            meta.namespace,
            meta.name
        );
        return vec![namespace_node(tree, index, &meta.namespace)];
    }

    owners
}

/// Namespace node for `namespace`, or the root when the namespace itself
/// was never ingested.
pub fn namespace_node(tree: &ResourceTree, index: &ResourceIndex, namespace: &str) -> NodeId {
    index
        .lookup(ResourceKind::Namespace, namespace)
        .unwrap_or_else(|| {
            tracing::debug!("Namespace {} not indexed, using cluster root", namespace);
            tree.root()
        })
}
