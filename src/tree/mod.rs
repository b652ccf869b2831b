//! Resource tree
//!
//! Builds the ownership forest from a fetched snapshot and renders it as
//! indented text.
//!
//! Flow: `Snapshot` -> `build` (index, resolver, linker, health) ->
//! `ResourceTree` -> `render`.

mod builder;
mod graph;
pub mod health;
mod index;
pub mod linker;
mod render;
pub mod resolver;

pub use builder::build;
pub use graph::{CLUSTER_TITLE, Identity, Node, NodeId, NodeKind, ResourceTree};
pub use health::{Health, classify};
pub use index::ResourceIndex;
pub use render::{INDENT, Palette, render, sorted_children};
