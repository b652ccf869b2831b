//! Conversion from k8s-openapi objects to resource records
//!
//! Only the fields the tree reads are carried over. Missing status blocks
//! read as zero counters and unknown phases, which is what a freshly created
//! object reports.

use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::core::v1::{
    Namespace, PersistentVolume, PersistentVolumeClaim, Pod, Service,
};
use kube::ResourceExt;

use crate::models::{
    ClaimDetails, ClaimPhase, ClaimRef, ContainerState, DaemonSetDetails, DeploymentDetails,
    LoadBalancerIngress, OwnerRef, PodDetails, PodPhase, RecordMeta, ReplicaSetDetails,
    ResourceDetails, ResourceRecord, ServiceDetails, ServiceType, StatefulSetDetails,
    VolumeDetails, VolumePhase,
};

/// Extract identity, owners and labels from any object
pub fn record_meta<K: kube::Resource>(obj: &K) -> RecordMeta {
    RecordMeta {
        namespace: obj.namespace().unwrap_or_default(),
        name: obj.name_any(),
        owner_references: obj
            .owner_references()
            .iter()
            .map(|o| OwnerRef {
                kind: o.kind.clone(),
                name: o.name.clone(),
            })
            .collect(),
        labels: obj.labels().clone(),
    }
}

impl From<&Namespace> for ResourceRecord {
    fn from(ns: &Namespace) -> Self {
        ResourceRecord::new(record_meta(ns), ResourceDetails::Namespace)
    }
}

impl From<&Deployment> for ResourceRecord {
    fn from(d: &Deployment) -> Self {
        let status = d.status.as_ref();
        let details = DeploymentDetails {
            desired: status.and_then(|s| s.replicas).unwrap_or(0),
            available: status.and_then(|s| s.available_replicas).unwrap_or(0),
            updated: status.and_then(|s| s.updated_replicas).unwrap_or(0),
        };
        ResourceRecord::new(record_meta(d), ResourceDetails::Deployment(details))
    }
}

impl From<&ReplicaSet> for ResourceRecord {
    fn from(rs: &ReplicaSet) -> Self {
        let status = rs.status.as_ref();
        let details = ReplicaSetDetails {
            desired: status.map(|s| s.replicas).unwrap_or(0),
            available: status.and_then(|s| s.available_replicas).unwrap_or(0),
            ready: status.and_then(|s| s.ready_replicas).unwrap_or(0),
        };
        ResourceRecord::new(record_meta(rs), ResourceDetails::ReplicaSet(details))
    }
}

impl From<&StatefulSet> for ResourceRecord {
    fn from(sts: &StatefulSet) -> Self {
        let status = sts.status.as_ref();
        let details = StatefulSetDetails {
            desired: status.map(|s| s.replicas).unwrap_or(0),
            current: status.and_then(|s| s.current_replicas).unwrap_or(0),
            ready: status.and_then(|s| s.ready_replicas).unwrap_or(0),
        };
        ResourceRecord::new(record_meta(sts), ResourceDetails::StatefulSet(details))
    }
}

impl From<&DaemonSet> for ResourceRecord {
    fn from(ds: &DaemonSet) -> Self {
        let details = ds
            .status
            .as_ref()
            .map(|s| DaemonSetDetails {
                desired: s.desired_number_scheduled,
                current: s.current_number_scheduled,
                ready: s.number_ready,
                misscheduled: s.number_misscheduled,
            })
            .unwrap_or_default();
        ResourceRecord::new(record_meta(ds), ResourceDetails::DaemonSet(details))
    }
}

impl From<&Pod> for ResourceRecord {
    fn from(pod: &Pod) -> Self {
        let status = pod.status.as_ref();

        let phase = status
            .and_then(|s| s.phase.as_deref())
            .map(PodPhase::from)
            .unwrap_or_default();

        let containers = status
            .and_then(|s| s.container_statuses.as_ref())
            .map(|statuses| {
                statuses
                    .iter()
                    .map(|c| ContainerState {
                        ready: c.ready,
                        running: c.state.as_ref().is_some_and(|s| s.running.is_some()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let claim_names = pod
            .spec
            .as_ref()
            .and_then(|s| s.volumes.as_ref())
            .map(|volumes| {
                volumes
                    .iter()
                    .filter_map(|v| v.persistent_volume_claim.as_ref())
                    .map(|pvc| pvc.claim_name.clone())
                    .collect()
            })
            .unwrap_or_default();

        ResourceRecord::new(
            record_meta(pod),
            ResourceDetails::Pod(PodDetails {
                phase,
                containers,
                claim_names,
            }),
        )
    }
}

impl From<&PersistentVolumeClaim> for ResourceRecord {
    fn from(pvc: &PersistentVolumeClaim) -> Self {
        let phase = pvc
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .map(ClaimPhase::from)
            .unwrap_or_default();
        ResourceRecord::new(
            record_meta(pvc),
            ResourceDetails::PersistentVolumeClaim(ClaimDetails { phase }),
        )
    }
}

impl From<&PersistentVolume> for ResourceRecord {
    fn from(pv: &PersistentVolume) -> Self {
        let phase = pv
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .map(VolumePhase::from)
            .unwrap_or_default();

        let claim_ref = pv
            .spec
            .as_ref()
            .and_then(|s| s.claim_ref.as_ref())
            .map(|r| ClaimRef {
                kind: r.kind.clone().unwrap_or_default(),
                namespace: r.namespace.clone().unwrap_or_default(),
                name: r.name.clone().unwrap_or_default(),
            });

        ResourceRecord::new(
            record_meta(pv),
            ResourceDetails::PersistentVolume(VolumeDetails { phase, claim_ref }),
        )
    }
}

impl From<&Service> for ResourceRecord {
    fn from(svc: &Service) -> Self {
        let spec = svc.spec.as_ref();

        let service_type = spec
            .and_then(|s| s.type_.as_deref())
            .map(ServiceType::from)
            .unwrap_or_default();

        let selector = spec
            .and_then(|s| s.selector.clone())
            .unwrap_or_default();

        let ingress = svc
            .status
            .as_ref()
            .and_then(|s| s.load_balancer.as_ref())
            .and_then(|lb| lb.ingress.as_ref())
            .map(|entries| {
                entries
                    .iter()
                    .map(|i| LoadBalancerIngress {
                        ip: i.ip.clone().unwrap_or_default(),
                        hostname: i.hostname.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        ResourceRecord::new(
            record_meta(svc),
            ResourceDetails::Service(ServiceDetails {
                service_type,
                selector,
                ingress,
            }),
        )
    }
}
