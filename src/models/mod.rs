//! Data models for kubetree
//!
//! Contains the tracked resource kinds, the namespace scope of a build and
//! the typed records the tree is built from.

mod record;
mod resource_kind;
mod scope;

pub use record::*;
pub use resource_kind::ResourceKind;
pub use scope::Scope;
