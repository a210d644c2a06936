//! uct-core - Deprecated API detection for Magento 2 extension code
//!
//! This crate provides functionality to:
//! - Discover Magento modules and the framework library inside a project tree
//! - Answer deprecation and removal questions from version catalogs
//! - Parse PHP sources into an interface hierarchy
//! - Flag interfaces that inherit, directly or transitively, from deprecated interfaces
pub mod analyzer;
pub mod config;
pub mod error;
pub mod inspection;
pub mod interfaces;
pub mod parser;
pub mod scanner;
pub mod services;
pub mod types;
pub mod versioning;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use analyzer::{AnalysisReport, Analyzer};
pub use config::Config;
pub use inspection::{
    DeprecationPropagationEngine, InheritedDeprecatedInterface, InspectionReporter, SupportedIssue,
};
pub use interfaces::{ClassHierarchyResolver, ParentRef};
pub use scanner::{ComponentScanner, DEFAULT_MAX_DEPTH};
pub use services::{PhpHierarchyIndex, SymbolTable};
pub use versioning::{VersionFact, VersionFactStore};
