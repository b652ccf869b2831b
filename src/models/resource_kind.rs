//! Tracked resource kind definitions
//!
//! This module provides a centralized enum for every Kubernetes kind that
//! appears in the tree. It replaces hardcoded kind strings throughout the
//! builder and gives the index a typed first-level key.

use std::fmt;
use std::str::FromStr;

/// Enumeration of all resource kinds placed in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Namespace,
    // Workload controllers
    Deployment,
    ReplicaSet,
    StatefulSet,
    DaemonSet,
    // Storage
    PersistentVolumeClaim,
    PersistentVolume,
    // Networking
    Service,
    Pod,
}

impl ResourceKind {
    /// Get the Kubernetes kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Namespace => "Namespace",
            ResourceKind::Deployment => "Deployment",
            ResourceKind::ReplicaSet => "ReplicaSet",
            ResourceKind::StatefulSet => "StatefulSet",
            ResourceKind::DaemonSet => "DaemonSet",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceKind::PersistentVolume => "PersistentVolume",
            ResourceKind::Service => "Service",
            ResourceKind::Pod => "Pod",
        }
    }

    /// Short prefix used in node titles (`deploy/foo`)
    pub fn title_prefix(&self) -> &'static str {
        match self {
            ResourceKind::Namespace => "ns",
            ResourceKind::Deployment => "deploy",
            ResourceKind::ReplicaSet => "rs",
            ResourceKind::StatefulSet => "statefulsets",
            ResourceKind::DaemonSet => "ds",
            ResourceKind::PersistentVolumeClaim => "pvc",
            ResourceKind::PersistentVolume => "pv",
            ResourceKind::Service => "svc",
            ResourceKind::Pod => "po",
        }
    }

    /// Build the display title for a resource of this kind
    pub fn title(&self, name: &str) -> String {
        format!("{}/{}", self.title_prefix(), name)
    }

    /// Controller kinds are skipped when walking from a pod up to the
    /// resource a service should hang under.
    pub fn is_controller(&self) -> bool {
        matches!(
            self,
            ResourceKind::ReplicaSet
                | ResourceKind::StatefulSet
                | ResourceKind::DaemonSet
                | ResourceKind::Deployment
        )
    }

    pub fn is_cluster_scoped(&self) -> bool {
        matches!(
            self,
            ResourceKind::Namespace | ResourceKind::PersistentVolume
        )
    }

    /// Try to parse a string into a ResourceKind, returning None if invalid
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Kinds in ingestion order: every owner kind comes before the kinds
    /// that may reference it.
    pub fn ingestion_order() -> &'static [Self] {
        &[
            ResourceKind::Namespace,
            ResourceKind::Deployment,
            ResourceKind::ReplicaSet,
            ResourceKind::StatefulSet,
            ResourceKind::DaemonSet,
            ResourceKind::PersistentVolumeClaim,
            ResourceKind::PersistentVolume,
            ResourceKind::Service,
            ResourceKind::Pod,
        ]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Namespace" => Ok(ResourceKind::Namespace),
            "Deployment" => Ok(ResourceKind::Deployment),
            "ReplicaSet" => Ok(ResourceKind::ReplicaSet),
            "StatefulSet" => Ok(ResourceKind::StatefulSet),
            "DaemonSet" => Ok(ResourceKind::DaemonSet),
            "PersistentVolumeClaim" => Ok(ResourceKind::PersistentVolumeClaim),
            "PersistentVolume" => Ok(ResourceKind::PersistentVolume),
            "Service" => Ok(ResourceKind::Service),
            "Pod" => Ok(ResourceKind::Pod),
            _ => Err(format!("Untracked resource kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(ResourceKind::Deployment.title("foo"), "deploy/foo");
        assert_eq!(ResourceKind::StatefulSet.title("db"), "statefulsets/db");
        assert_eq!(ResourceKind::Namespace.title("kube-system"), "ns/kube-system");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ResourceKind::parse_optional("ReplicaSet"),
            Some(ResourceKind::ReplicaSet)
        );
        assert_eq!(ResourceKind::parse_optional("Job"), None);
        assert_eq!(ResourceKind::parse_optional("replicaset"), None);
    }

    #[test]
    fn test_controller_kinds() {
        assert!(ResourceKind::Deployment.is_controller());
        assert!(ResourceKind::DaemonSet.is_controller());
        assert!(!ResourceKind::Pod.is_controller());
        assert!(!ResourceKind::Namespace.is_controller());
    }

    #[test]
    fn test_ingestion_order_puts_owners_first() {
        let order = ResourceKind::ingestion_order();
        let pos = |k| order.iter().position(|o| *o == k).unwrap();
        assert_eq!(order.len(), 9);
        assert!(pos(ResourceKind::Namespace) < pos(ResourceKind::Deployment));
        assert!(pos(ResourceKind::Deployment) < pos(ResourceKind::ReplicaSet));
        assert!(pos(ResourceKind::PersistentVolumeClaim) < pos(ResourceKind::PersistentVolume));
        assert!(pos(ResourceKind::PersistentVolumeClaim) < pos(ResourceKind::Pod));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ResourceKind::PersistentVolumeClaim), "PersistentVolumeClaim");
        let s: String = ResourceKind::Pod.into();
        assert_eq!(s, "Pod");
    }
}
