//! Resource index
//!
//! Two-level lookup from kind and `namespace/name` key to node, scoped to a
//! single build. Later registrations under the same key overwrite earlier
//! ones; the cluster already guarantees unique names per namespace and kind.

use std::collections::HashMap;

use super::graph::NodeId;
use crate::models::ResourceKind;

#[derive(Debug, Default)]
pub struct ResourceIndex {
    nodes: HashMap<ResourceKind, HashMap<String, NodeId>>,
}

impl ResourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup key: `namespace/name`, or just `name` when cluster-scoped
    pub fn key(namespace: &str, name: &str) -> String {
        if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", namespace, name)
        }
    }

    pub fn register(&mut self, kind: ResourceKind, key: String, node: NodeId) {
        self.nodes.entry(kind).or_default().insert(key, node);
    }

    pub fn lookup(&self, kind: ResourceKind, key: &str) -> Option<NodeId> {
        self.nodes.get(&kind).and_then(|by_key| by_key.get(key)).copied()
    }

    /// Look up by a raw kind string from an owner or claim reference;
    /// untracked kinds never match.
    pub fn lookup_raw(&self, kind: &str, key: &str) -> Option<NodeId> {
        ResourceKind::parse_optional(kind).and_then(|kind| self.lookup(kind, key))
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.nodes.get(&kind).map(HashMap::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceRecord;
    use crate::tree::graph::ResourceTree;

    #[test]
    fn test_key() {
        assert_eq!(ResourceIndex::key("default", "web"), "default/web");
        assert_eq!(ResourceIndex::key("", "pv-1"), "pv-1");
    }

    #[test]
    fn test_register_and_lookup() {
        let mut tree = ResourceTree::new();
        let ns = tree.insert(ResourceRecord::namespace("default"));

        let mut index = ResourceIndex::new();
        index.register(ResourceKind::Namespace, "default".to_string(), ns);

        assert_eq!(index.lookup(ResourceKind::Namespace, "default"), Some(ns));
        assert_eq!(index.lookup(ResourceKind::Namespace, "other"), None);
        assert_eq!(index.lookup(ResourceKind::Pod, "default"), None);
        assert_eq!(index.count(ResourceKind::Namespace), 1);
    }

    #[test]
    fn test_lookup_raw_ignores_untracked_kinds() {
        let mut tree = ResourceTree::new();
        let ns = tree.insert(ResourceRecord::namespace("default"));

        let mut index = ResourceIndex::new();
        index.register(ResourceKind::Namespace, "default".to_string(), ns);

        assert_eq!(index.lookup_raw("Namespace", "default"), Some(ns));
        assert_eq!(index.lookup_raw("Job", "default"), None);
    }
}
