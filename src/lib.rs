//! kubetree library
//!
//! Builds the ownership tree of a cluster's workloads and storage and
//! renders it as indented text with per-resource health. The binary is a
//! thin wrapper; everything here can be driven from an in-memory source in
//! tests.

pub mod cli;
pub mod config;
mod error;
pub mod kube;
pub mod models;
pub mod source;
pub mod tree;

pub use error::{SourceError, TreeError};
pub use models::{ResourceKind, ResourceRecord, Scope};
pub use source::{MemorySource, ResourceSource, Snapshot, fetch_snapshot};
pub use tree::{Health, Palette, ResourceTree};

/// Fetch, build and render in one call
///
/// Any listing failure aborts the run; partial trees are never rendered.
pub async fn kubetree<S>(source: &S, scope: &Scope, palette: &Palette) -> Result<String, TreeError>
where
    S: ResourceSource + ?Sized,
{
    let snapshot = fetch_snapshot(source, scope).await?;
    tracing::debug!("Fetched {} records", snapshot.len());
    let tree = tree::build(&snapshot);
    tracing::debug!("Built tree with {} nodes", tree.len());
    Ok(tree::render(&tree, palette))
}
