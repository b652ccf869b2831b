//! Error types for the tree build

use crate::models::ResourceKind;

/// Failure reported by a resource source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("Namespace not found: {0}")]
    NamespaceNotFound(String),

    #[error("{0}")]
    Other(String),
}

/// A build either produces the whole tree or fails with this
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Failed to list {kind} resources")]
    Fetch {
        kind: ResourceKind,
        #[source]
        source: SourceError,
    },
}
