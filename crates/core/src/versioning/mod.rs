//! Versioned knowledge base of deprecated framework symbols

pub mod catalog;
pub mod fact_store;

pub use catalog::{CatalogDocument, ReleaseEntry, VersionFact};
pub use fact_store::VersionFactStore;
