//! Health classification
//!
//! Turns the status counters and phases of a record into a tri-state health
//! plus the short description printed beside the node title.

use std::fmt;

use crate::models::{
    ClaimDetails, ClaimPhase, DaemonSetDetails, DeploymentDetails, PodDetails, PodPhase,
    ReplicaSetDetails, ResourceDetails, ServiceDetails, ServiceType, StatefulSetDetails,
    VolumeDetails, VolumePhase,
};

/// Health of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Health {
    #[default]
    Ok,
    Warning,
    Critical,
    /// Nodes that carry no health of their own (root, namespaces)
    Unset,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Health::Ok => "ok",
            Health::Warning => "warning",
            Health::Critical => "critical",
            Health::Unset => "unset",
        };
        write!(f, "{}", s)
    }
}

/// Classify a record; returns the health and a possibly empty description
pub fn classify(details: &ResourceDetails) -> (Health, String) {
    match details {
        ResourceDetails::Namespace => (Health::Unset, String::new()),
        ResourceDetails::Deployment(d) => deployment(d),
        ResourceDetails::ReplicaSet(d) => replica_set(d),
        ResourceDetails::StatefulSet(d) => stateful_set(d),
        ResourceDetails::DaemonSet(d) => daemon_set(d),
        ResourceDetails::Pod(d) => pod(d),
        ResourceDetails::PersistentVolumeClaim(d) => claim(d),
        ResourceDetails::PersistentVolume(d) => volume(d),
        ResourceDetails::Service(d) => service(d),
    }
}

// Warning is overwritten by Critical below; any shortfall reads as Critical.
#[allow(unused_assignments)]
fn deployment(d: &DeploymentDetails) -> (Health, String) {
    let detail = format!(
        "{}/{} av, {}/{} up to date",
        d.available, d.desired, d.updated, d.desired
    );

    let mut health = Health::Ok;
    if d.available < d.desired || d.updated < d.desired {
        if d.available != 0 && d.updated != 0 {
            health = Health::Warning;
        }
        health = Health::Critical;
    }

    (health, detail)
}

#[allow(unused_assignments)]
fn replica_set(d: &ReplicaSetDetails) -> (Health, String) {
    let detail = format!(
        "{}/{} up, {}/{} rdy",
        d.available, d.desired, d.ready, d.desired
    );

    let mut health = Health::Ok;
    if d.available < d.desired || d.ready < d.desired {
        if d.available != 0 && d.ready != 0 {
            health = Health::Warning;
        }
        health = Health::Critical;
    }

    (health, detail)
}

fn stateful_set(d: &StatefulSetDetails) -> (Health, String) {
    let detail = format!(
        "{}/{} repl, {}/{} rdy",
        d.current, d.desired, d.ready, d.desired
    );

    let health = if d.current < d.desired || d.ready < d.desired {
        Health::Critical
    } else {
        Health::Ok
    };

    (health, detail)
}

fn daemon_set(d: &DaemonSetDetails) -> (Health, String) {
    let misscheduled = if d.misscheduled == 0 {
        String::new()
    } else {
        format!(" ({} misscheduled)", d.misscheduled)
    };

    let detail = format!(
        "{}/{} up, {}/{} pods up{}",
        d.current, d.desired, d.ready, d.desired, misscheduled
    );

    let health = if d.misscheduled > 0 || d.current < d.desired || d.ready < d.desired {
        Health::Critical
    } else {
        Health::Ok
    };

    (health, detail)
}

fn pod(d: &PodDetails) -> (Health, String) {
    let total = d.containers.len();
    let ready = d.containers.iter().filter(|c| c.ready).count();
    let running = d.containers.iter().filter(|c| c.running).count();

    let mut detail = format!("{}/{} up, {}/{} rdy", running, total, ready, total);

    let health = match d.phase {
        PodPhase::Running if running != total || ready != total => Health::Critical,
        PodPhase::Running => Health::Ok,
        PodPhase::Pending => {
            detail.push_str(" (pending)");
            Health::Warning
        }
        PodPhase::Succeeded => {
            detail.push_str(" (succeeded)");
            Health::Unset
        }
        PodPhase::Failed => {
            detail.push_str(" (failed)");
            Health::Critical
        }
        PodPhase::Unknown => Health::Ok,
    };

    (health, detail)
}

fn claim(d: &ClaimDetails) -> (Health, String) {
    match d.phase {
        ClaimPhase::Pending => (Health::Warning, "pending".to_string()),
        ClaimPhase::Lost => (Health::Critical, "lost".to_string()),
        ClaimPhase::Bound | ClaimPhase::Unknown => (Health::Ok, String::new()),
    }
}

fn volume(d: &VolumeDetails) -> (Health, String) {
    match d.phase {
        VolumePhase::Pending => (Health::Warning, "pending".to_string()),
        // A released volume should no longer be attached to anything
        VolumePhase::Released => (Health::Warning, "released".to_string()),
        VolumePhase::Failed => (Health::Critical, "failed".to_string()),
        VolumePhase::Bound | VolumePhase::Available | VolumePhase::Unknown => {
            (Health::Ok, String::new())
        }
    }
}

fn service(d: &ServiceDetails) -> (Health, String) {
    if d.service_type != ServiceType::LoadBalancer {
        return (Health::Ok, String::new());
    }

    let mut address = None;
    for ingress in &d.ingress {
        if !ingress.ip.is_empty() {
            address = Some(ingress.ip.clone());
        }
        if !ingress.hostname.is_empty() {
            address = Some(ingress.hostname.clone());
        }
    }

    match address {
        Some(address) => (Health::Ok, address),
        None => (Health::Warning, "pending".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClaimRef, ContainerState, LoadBalancerIngress};

    fn deploy(desired: i32, available: i32, updated: i32) -> ResourceDetails {
        ResourceDetails::Deployment(DeploymentDetails {
            desired,
            available,
            updated,
        })
    }

    #[test]
    fn test_deployment_healthy() {
        let (health, detail) = classify(&deploy(3, 3, 3));
        assert_eq!(health, Health::Ok);
        assert_eq!(detail, "3/3 av, 3/3 up to date");
    }

    #[test]
    fn test_deployment_short_is_critical() {
        let (health, detail) = classify(&deploy(3, 0, 0));
        assert_eq!(health, Health::Critical);
        assert_eq!(detail, "0/3 av, 0/3 up to date");
    }

    #[test]
    fn test_deployment_partially_available_is_still_critical() {
        let (health, _) = classify(&deploy(3, 2, 1));
        assert_eq!(health, Health::Critical);
    }

    #[test]
    fn test_replica_set_partially_ready_is_still_critical() {
        let details = ResourceDetails::ReplicaSet(ReplicaSetDetails {
            desired: 2,
            available: 1,
            ready: 1,
        });
        let (health, detail) = classify(&details);
        assert_eq!(health, Health::Critical);
        assert_eq!(detail, "1/2 up, 1/2 rdy");
    }

    #[test]
    fn test_stateful_set() {
        let healthy = ResourceDetails::StatefulSet(StatefulSetDetails {
            desired: 2,
            current: 2,
            ready: 2,
        });
        assert_eq!(classify(&healthy), (Health::Ok, "2/2 repl, 2/2 rdy".to_string()));

        let short = ResourceDetails::StatefulSet(StatefulSetDetails {
            desired: 2,
            current: 2,
            ready: 1,
        });
        assert_eq!(classify(&short).0, Health::Critical);
    }

    #[test]
    fn test_daemon_set_misscheduled() {
        let details = ResourceDetails::DaemonSet(DaemonSetDetails {
            desired: 3,
            current: 3,
            ready: 3,
            misscheduled: 1,
        });
        let (health, detail) = classify(&details);
        assert_eq!(health, Health::Critical);
        assert_eq!(detail, "3/3 up, 3/3 pods up (1 misscheduled)");
    }

    #[test]
    fn test_daemon_set_healthy_has_no_suffix() {
        let details = ResourceDetails::DaemonSet(DaemonSetDetails {
            desired: 3,
            current: 3,
            ready: 3,
            misscheduled: 0,
        });
        assert_eq!(classify(&details), (Health::Ok, "3/3 up, 3/3 pods up".to_string()));
    }

    #[test]
    fn test_pod_phases() {
        let running = ContainerState {
            ready: true,
            running: true,
        };
        let waiting = ContainerState::default();

        let pod = |phase: PodPhase, containers: Vec<ContainerState>| {
            classify(&ResourceDetails::Pod(PodDetails {
                phase,
                containers,
                claim_names: Vec::new(),
            }))
        };

        assert_eq!(
            pod(PodPhase::Running, vec![running, running]),
            (Health::Ok, "2/2 up, 2/2 rdy".to_string())
        );
        assert_eq!(pod(PodPhase::Running, vec![running, waiting]).0, Health::Critical);
        assert_eq!(
            pod(PodPhase::Pending, vec![waiting]),
            (Health::Warning, "0/1 up, 0/1 rdy (pending)".to_string())
        );
        assert_eq!(
            pod(PodPhase::Succeeded, vec![waiting]),
            (Health::Unset, "0/1 up, 0/1 rdy (succeeded)".to_string())
        );
        assert_eq!(
            pod(PodPhase::Failed, vec![waiting]),
            (Health::Critical, "0/1 up, 0/1 rdy (failed)".to_string())
        );
    }

    #[test]
    fn test_claim_and_volume_phases() {
        let claim = |phase| classify(&ResourceDetails::PersistentVolumeClaim(ClaimDetails { phase }));
        assert_eq!(claim(ClaimPhase::Pending), (Health::Warning, "pending".to_string()));
        assert_eq!(claim(ClaimPhase::Lost), (Health::Critical, "lost".to_string()));
        assert_eq!(claim(ClaimPhase::Bound), (Health::Ok, String::new()));

        let volume = |phase| {
            classify(&ResourceDetails::PersistentVolume(VolumeDetails {
                phase,
                claim_ref: Some(ClaimRef::default()),
            }))
        };
        assert_eq!(volume(VolumePhase::Released), (Health::Warning, "released".to_string()));
        assert_eq!(volume(VolumePhase::Failed), (Health::Critical, "failed".to_string()));
        assert_eq!(volume(VolumePhase::Bound), (Health::Ok, String::new()));
    }

    #[test]
    fn test_load_balancer_service() {
        let lb = |ingress: Vec<LoadBalancerIngress>| {
            classify(&ResourceDetails::Service(ServiceDetails {
                service_type: ServiceType::LoadBalancer,
                ingress,
                ..Default::default()
            }))
        };

        assert_eq!(lb(Vec::new()), (Health::Warning, "pending".to_string()));
        assert_eq!(
            lb(vec![LoadBalancerIngress {
                ip: "10.0.0.7".to_string(),
                hostname: String::new(),
            }]),
            (Health::Ok, "10.0.0.7".to_string())
        );
        // Last non-empty value wins, hostname after ip
        assert_eq!(
            lb(vec![
                LoadBalancerIngress {
                    ip: "10.0.0.7".to_string(),
                    hostname: "lb.example.com".to_string(),
                },
                LoadBalancerIngress {
                    ip: "10.0.0.8".to_string(),
                    hostname: String::new(),
                },
            ])
            .1,
            "10.0.0.8"
        );
    }

    #[test]
    fn test_cluster_ip_service_has_no_detail() {
        let details = ResourceDetails::Service(ServiceDetails::default());
        assert_eq!(classify(&details), (Health::Ok, String::new()));
    }

    #[test]
    fn test_namespace_is_unset() {
        assert_eq!(classify(&ResourceDetails::Namespace), (Health::Unset, String::new()));
    }
}
