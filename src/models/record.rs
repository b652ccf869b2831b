//! Typed resource records
//!
//! A `ResourceRecord` is the slice of a Kubernetes object the tree needs:
//! identity, owner references, labels, and the per-kind status fields the
//! health classifier reads. Each tracked kind has its own details variant so
//! classification is an exhaustive match rather than a runtime type check.

use std::collections::BTreeMap;

use super::ResourceKind;

/// Owner reference as declared in object metadata
///
/// The kind is kept as a raw string: references to kinds the tree does not
/// track are legal and simply never resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRef {
    pub kind: String,
    pub name: String,
}

/// Metadata shared by every record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordMeta {
    /// Empty for cluster-scoped kinds
    pub namespace: String,
    pub name: String,
    pub owner_references: Vec<OwnerRef>,
    pub labels: BTreeMap<String, String>,
}

impl RecordMeta {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn cluster(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    pub fn with_owner(mut self, kind: impl Into<String>, name: impl Into<String>) -> Self {
        self.owner_references.push(OwnerRef {
            kind: kind.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploymentDetails {
    pub desired: i32,
    pub available: i32,
    pub updated: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicaSetDetails {
    pub desired: i32,
    pub available: i32,
    pub ready: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatefulSetDetails {
    pub desired: i32,
    pub current: i32,
    pub ready: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaemonSetDetails {
    pub desired: i32,
    pub current: i32,
    pub ready: i32,
    pub misscheduled: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    #[default]
    Unknown,
}

impl From<&str> for PodPhase {
    fn from(phase: &str) -> Self {
        match phase {
            "Pending" => PodPhase::Pending,
            "Running" => PodPhase::Running,
            "Succeeded" => PodPhase::Succeeded,
            "Failed" => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerState {
    pub ready: bool,
    pub running: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodDetails {
    pub phase: PodPhase,
    pub containers: Vec<ContainerState>,
    /// Names of persistent volume claims mounted as volumes, same namespace
    pub claim_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimPhase {
    Pending,
    Bound,
    Lost,
    #[default]
    Unknown,
}

impl From<&str> for ClaimPhase {
    fn from(phase: &str) -> Self {
        match phase {
            "Pending" => ClaimPhase::Pending,
            "Bound" => ClaimPhase::Bound,
            "Lost" => ClaimPhase::Lost,
            _ => ClaimPhase::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimDetails {
    pub phase: ClaimPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumePhase {
    Pending,
    Available,
    Bound,
    Released,
    Failed,
    #[default]
    Unknown,
}

impl From<&str> for VolumePhase {
    fn from(phase: &str) -> Self {
        match phase {
            "Pending" => VolumePhase::Pending,
            "Available" => VolumePhase::Available,
            "Bound" => VolumePhase::Bound,
            "Released" => VolumePhase::Released,
            "Failed" => VolumePhase::Failed,
            _ => VolumePhase::Unknown,
        }
    }
}

/// Claim reference from a volume's spec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeDetails {
    pub phase: VolumePhase,
    pub claim_ref: Option<ClaimRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceType {
    #[default]
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

impl From<&str> for ServiceType {
    fn from(value: &str) -> Self {
        match value {
            "NodePort" => ServiceType::NodePort,
            "LoadBalancer" => ServiceType::LoadBalancer,
            "ExternalName" => ServiceType::ExternalName,
            _ => ServiceType::ClusterIP,
        }
    }
}

/// One load balancer ingress point; either field may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancerIngress {
    pub ip: String,
    pub hostname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDetails {
    pub service_type: ServiceType,
    pub selector: BTreeMap<String, String>,
    pub ingress: Vec<LoadBalancerIngress>,
}

/// Kind-specific part of a record
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceDetails {
    Namespace,
    Deployment(DeploymentDetails),
    ReplicaSet(ReplicaSetDetails),
    StatefulSet(StatefulSetDetails),
    DaemonSet(DaemonSetDetails),
    PersistentVolumeClaim(ClaimDetails),
    PersistentVolume(VolumeDetails),
    Service(ServiceDetails),
    Pod(PodDetails),
}

impl ResourceDetails {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDetails::Namespace => ResourceKind::Namespace,
            ResourceDetails::Deployment(_) => ResourceKind::Deployment,
            ResourceDetails::ReplicaSet(_) => ResourceKind::ReplicaSet,
            ResourceDetails::StatefulSet(_) => ResourceKind::StatefulSet,
            ResourceDetails::DaemonSet(_) => ResourceKind::DaemonSet,
            ResourceDetails::PersistentVolumeClaim(_) => ResourceKind::PersistentVolumeClaim,
            ResourceDetails::PersistentVolume(_) => ResourceKind::PersistentVolume,
            ResourceDetails::Service(_) => ResourceKind::Service,
            ResourceDetails::Pod(_) => ResourceKind::Pod,
        }
    }
}

/// A fetched resource, ready to be placed in the tree
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub meta: RecordMeta,
    pub details: ResourceDetails,
}

impl ResourceRecord {
    pub fn new(meta: RecordMeta, details: ResourceDetails) -> Self {
        Self { meta, details }
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(RecordMeta::cluster(name), ResourceDetails::Namespace)
    }

    pub fn kind(&self) -> ResourceKind {
        self.details.kind()
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn title(&self) -> String {
        self.kind().title(&self.meta.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_builders() {
        let meta = RecordMeta::new("default", "web-abc")
            .with_owner("ReplicaSet", "web")
            .with_label("app", "web");
        assert_eq!(meta.owner_references.len(), 1);
        assert_eq!(meta.owner_references[0].kind, "ReplicaSet");
        assert_eq!(meta.labels.get("app").map(String::as_str), Some("web"));
        assert!(!meta.is_cluster_scoped());
        assert!(RecordMeta::cluster("pv-1").is_cluster_scoped());
    }

    #[test]
    fn test_phase_parsing() {
        assert_eq!(PodPhase::from("Running"), PodPhase::Running);
        assert_eq!(PodPhase::from("Weird"), PodPhase::Unknown);
        assert_eq!(ClaimPhase::from("Lost"), ClaimPhase::Lost);
        assert_eq!(VolumePhase::from("Released"), VolumePhase::Released);
        assert_eq!(ServiceType::from("LoadBalancer"), ServiceType::LoadBalancer);
        assert_eq!(ServiceType::from(""), ServiceType::ClusterIP);
    }

    #[test]
    fn test_record_kind_and_title() {
        let record = ResourceRecord::namespace("kube-system");
        assert_eq!(record.kind(), ResourceKind::Namespace);
        assert_eq!(record.title(), "ns/kube-system");
    }
}
