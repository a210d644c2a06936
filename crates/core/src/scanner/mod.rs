//! Component discovery over a project directory tree

pub mod component_scanner;
pub mod manifest;

pub use component_scanner::{scan, ComponentScanner, Components, DEFAULT_MAX_DEPTH};
pub use manifest::{PackageMeta, FRAMEWORK_LIBRARY_NAME};
