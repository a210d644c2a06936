//! Core interfaces for pluggable collaborators
//!
//! Source-level symbol resolution is supplied from outside the engine; this module
//! defines the seam.

pub mod hierarchy_resolver;

pub use hierarchy_resolver::{ClassHierarchyResolver, ParentRef};
