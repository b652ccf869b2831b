//! Node arena for the ownership forest
//!
//! Nodes live in a single `Vec` owned by the tree and refer to each other by
//! `NodeId`. Index 0 is always the synthetic cluster root.
//!
//! A node tracks two parent relations:
//! - `attached_under`: every node that lists it as a child (tree shape)
//! - `parent`: one canonical parent, used only by upward walks
//!
//! They can disagree when a record has several owners, or when a claim is
//! mounted by several pods. Rendering follows children lists, so a node
//! attached under two parents is printed under both.

use super::health::{self, Health};
use crate::models::{ResourceKind, ResourceRecord};

/// Title of the synthetic root
pub const CLUSTER_TITLE: &str = "kubernetes";

/// Handle to a node inside one `ResourceTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Kind of a tree node; the root is not a Kubernetes resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Cluster,
    Resource(ResourceKind),
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Cluster => "cluster",
            NodeKind::Resource(kind) => kind.as_str(),
        }
    }

    pub fn resource(&self) -> Option<ResourceKind> {
        match self {
            NodeKind::Cluster => None,
            NodeKind::Resource(kind) => Some(*kind),
        }
    }

    pub fn is(&self, kind: ResourceKind) -> bool {
        self.resource() == Some(kind)
    }
}

/// Kind + namespace + name; namespace is empty for cluster-scoped kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub kind: NodeKind,
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub identity: Identity,
    pub title: String,
    pub health: Health,
    pub health_detail: String,
    record: Option<ResourceRecord>,
    parent: Option<NodeId>,
    attached_under: Vec<NodeId>,
    children: Vec<(String, NodeId)>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.identity.kind
    }

    /// The source record; `None` for the cluster root
    pub fn record(&self) -> Option<&ResourceRecord> {
        self.record.as_ref()
    }

    /// Canonical parent
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Every parent this node is listed under, in attachment order
    pub fn attached_under(&self) -> &[NodeId] {
        &self.attached_under
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().map(|(_, id)| *id)
    }

    pub fn child(&self, key: &str) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, id)| *id)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// The assembled forest, rooted at the cluster node
#[derive(Debug, Clone)]
pub struct ResourceTree {
    nodes: Vec<Node>,
}

impl ResourceTree {
    pub fn new() -> Self {
        let root = Node {
            identity: Identity {
                kind: NodeKind::Cluster,
                namespace: String::new(),
                name: CLUSTER_TITLE.to_string(),
            },
            title: CLUSTER_TITLE.to_string(),
            health: Health::Unset,
            health_detail: String::new(),
            record: None,
            parent: None,
            attached_under: Vec::new(),
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All node ids in creation order, root first
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Ids of every node of `kind`, in creation order
    pub fn ids_of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(move |id| self.node(*id).kind().is(kind))
    }

    /// Find a node by identity
    pub fn find(&self, kind: ResourceKind, namespace: &str, name: &str) -> Option<NodeId> {
        self.ids_of_kind(kind).find(|id| {
            let identity = &self.node(*id).identity;
            identity.namespace == namespace && identity.name == name
        })
    }

    /// Create a node for `record`, classifying its health on the way in
    pub(crate) fn insert(&mut self, record: ResourceRecord) -> NodeId {
        let (health, health_detail) = health::classify(&record.details);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            identity: Identity {
                kind: NodeKind::Resource(record.kind()),
                namespace: record.meta.namespace.clone(),
                name: record.meta.name.clone(),
            },
            title: record.title(),
            health,
            health_detail,
            record: Some(record),
            parent: None,
            attached_under: Vec::new(),
            children: Vec::new(),
        });
        id
    }

    /// Key `child` is listed under in `parent`
    ///
    /// The title, except for namespaced records that fell back to the root,
    /// which are keyed `namespace/title` so equal names from different
    /// namespaces stay apart.
    pub fn child_key(&self, parent: NodeId, child: NodeId) -> String {
        let node = self.node(child);
        if parent == self.root() && !node.identity.namespace.is_empty() {
            format!("{}/{}", node.identity.namespace, node.title)
        } else {
            node.title.clone()
        }
    }

    /// List `child` under `parent`, keyed by `child_key`
    ///
    /// A child already present under the same key is replaced in place.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        let key = self.child_key(parent, child);
        let displaced = {
            let children = &mut self.nodes[parent.0].children;
            match children.iter().position(|(k, _)| *k == key) {
                Some(i) => Some(std::mem::replace(&mut children[i].1, child)),
                None => {
                    children.push((key, child));
                    None
                }
            }
        };

        if let Some(old) = displaced.filter(|old| *old != child) {
            self.nodes[old.0].attached_under.retain(|p| *p != parent);
        }

        let attached = &mut self.nodes[child.0].attached_under;
        if !attached.contains(&parent) {
            attached.push(parent);
        }
    }

    /// Remove `child` from `parent`'s children if it is listed there
    pub(crate) fn detach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.retain(|(_, id)| *id != child);
        self.nodes[child.0].attached_under.retain(|p| *p != parent);
    }

    pub(crate) fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0].parent = Some(parent);
    }
}

impl Default for ResourceTree {
    fn default() -> Self {
        Self::new()
    }
}
