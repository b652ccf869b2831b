//! Cross-reference linking
//!
//! Relationships that are not owner references:
//! - service -> topmost controller of each pod its selector matches
//! - pod -> persistent volume claims it mounts
//! - persistent volume -> the claim it is bound to

use std::collections::BTreeMap;

use super::graph::{NodeId, ResourceTree};
use super::index::ResourceIndex;
use super::resolver::namespace_node;
use crate::models::{ResourceDetails, ResourceKind, VolumeDetails, VolumePhase};

/// Walk canonical parents upward while the parent is a controller kind
///
/// Returns the last node reached: the topmost controller above a pod, or
/// the pod itself when it has no controller.
pub fn controller_of(tree: &ResourceTree, node: NodeId) -> NodeId {
    let mut current = node;
    // Bounded by the node count; parent links never form a cycle
    for _ in 0..tree.len() {
        match tree.node(current).parent() {
            Some(parent)
                if tree
                    .node(parent)
                    .kind()
                    .resource()
                    .is_some_and(|k| k.is_controller()) =>
            {
                current = parent;
            }
            _ => break,
        }
    }
    current
}

/// A pod matches when it carries every selector key with an equal value.
/// An empty selector matches nothing.
pub fn selector_matches(
    selector: &BTreeMap<String, String>,
    labels: &BTreeMap<String, String>,
) -> bool {
    !selector.is_empty()
        && !labels.is_empty()
        && selector
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value))
}

/// Pods in `namespace` whose labels satisfy `selector`, in ingestion order
pub fn find_pods_with_labels(
    tree: &ResourceTree,
    namespace: &str,
    selector: &BTreeMap<String, String>,
) -> Vec<NodeId> {
    tree.ids_of_kind(ResourceKind::Pod)
        .filter(|id| {
            tree.node(*id)
                .record()
                .is_some_and(|r| r.meta.namespace == namespace && selector_matches(selector, &r.meta.labels))
        })
        .collect()
}

/// Hang a service under the controller of every pod it selects
///
/// The last matching pod's controller becomes the canonical parent. A
/// service selecting nothing hangs under its namespace. Returns the number
/// of matched pods.
pub fn link_service(tree: &mut ResourceTree, index: &ResourceIndex, service: NodeId) -> usize {
    let Some((namespace, selector)) = tree.node(service).record().and_then(|r| match &r.details {
        ResourceDetails::Service(details) => Some((r.meta.namespace.clone(), details.selector.clone())),
        _ => None,
    }) else {
        return 0;
    };

    let pods = find_pods_with_labels(tree, &namespace, &selector);
    for &pod in &pods {
        let controller = controller_of(tree, pod);
        tracing::trace!(
            "Linking {} under {}",
            tree.node(service).title,
            tree.node(controller).title
        );
        tree.attach(controller, service);
        tree.set_parent(service, controller);
    }

    if pods.is_empty() {
        let ns = namespace_node(tree, index, &namespace);
        tree.attach(ns, service);
        tree.set_parent(service, ns);
    }

    pods.len()
}

/// Move every claim mounted by `pod` under it
///
/// Claims are detached from every parent that is not a pod. A claim mounted by several
/// pods is listed under each of them; its canonical parent is whichever pod
/// was linked last.
pub fn link_pod_claims(
    tree: &mut ResourceTree,
    index: &ResourceIndex,
    pod: NodeId,
    namespace: &str,
    claim_names: &[String],
) {
    for claim_name in claim_names {
        let key = ResourceIndex::key(namespace, claim_name);
        let Some(claim) = index.lookup(ResourceKind::PersistentVolumeClaim, &key) else {
            tracing::trace!("Claim {} mounted by {} not indexed", key, tree.node(pod).title);
            continue;
        };

        // Only pods keep a claim; namespace, root or owner attachments go
        let other_parents: Vec<NodeId> = tree
            .node(claim)
            .attached_under()
            .iter()
            .copied()
            .filter(|p| !tree.node(*p).kind().is(ResourceKind::Pod))
            .collect();
        for parent in other_parents {
            tree.detach(parent, claim);
        }

        tree.attach(pod, claim);
        tree.set_parent(claim, pod);
    }
}

/// Hang a bound volume under its claim; returns whether a claim was found
pub fn link_volume(
    tree: &mut ResourceTree,
    index: &ResourceIndex,
    volume: NodeId,
    details: &VolumeDetails,
) -> bool {
    if details.phase != VolumePhase::Bound {
        return false;
    }
    let Some(claim_ref) = details
        .claim_ref
        .as_ref()
        .filter(|c| c.kind == ResourceKind::PersistentVolumeClaim.as_str())
    else {
        return false;
    };

    let key = ResourceIndex::key(&claim_ref.namespace, &claim_ref.name);
    match index.lookup(ResourceKind::PersistentVolumeClaim, &key) {
        Some(claim) => {
            tree.attach(claim, volume);
            tree.set_parent(volume, claim);
            true
        }
        None => {
            tracing::trace!("Claim {} bound to {} not indexed", key, tree.node(volume).title);
            false
        }
    }
}
