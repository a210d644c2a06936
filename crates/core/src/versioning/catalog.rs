//! Version catalog documents.
//!
//! A catalog lists, for each framework symbol, the release that deprecated it and
//! optionally the release that removed it. Two shapes are accepted in one document:
//!
//! ```json
//! {
//!   "releases": [
//!     { "version": "2.4.0", "deprecated": ["Magento\\Framework\\Foo"], "removed": [] }
//!   ],
//!   "facts": [
//!     { "symbol": "Magento\\Framework\\Bar", "deprecated_since": "2.3.5", "removed_since": "2.4.4" }
//!   ]
//! }
//! ```
//!
//! Release lists are expanded first; explicit facts then override them.

use crate::{
    error::{Error, Result},
    types::{Symbol, Version},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Deprecation record for a single symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFact {
    pub symbol: Symbol,
    pub deprecated_since: Version,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_since: Option<Version>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub version: Version,
    #[serde(default)]
    pub deprecated: Vec<Symbol>,
    #[serde(default)]
    pub removed: Vec<Symbol>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub releases: Vec<ReleaseEntry>,
    #[serde(default)]
    pub facts: Vec<VersionFact>,
}

impl CatalogDocument {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::CatalogError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
            .map_err(|e| Error::CatalogError(format!("{}: {e}", path.display())))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::CatalogError(format!("Failed to parse catalog: {e}")))
    }

    /// Flatten the document into one fact per symbol, in document order
    pub fn into_facts(self) -> Vec<VersionFact> {
        let mut order: Vec<Symbol> = Vec::new();
        let mut deprecated: HashMap<Symbol, Version> = HashMap::new();
        let mut removed: HashMap<Symbol, Version> = HashMap::new();

        for release in self.releases {
            for symbol in release.deprecated {
                if !deprecated.contains_key(&symbol) && !removed.contains_key(&symbol) {
                    order.push(symbol.clone());
                }
                deprecated.insert(symbol, release.version);
            }
            for symbol in release.removed {
                if !deprecated.contains_key(&symbol) && !removed.contains_key(&symbol) {
                    order.push(symbol.clone());
                }
                removed.insert(symbol, release.version);
            }
        }

        let mut facts: Vec<VersionFact> = order
            .into_iter()
            .filter_map(|symbol| {
                let removed_since = removed.get(&symbol).copied();
                // Removal without a recorded deprecation counts as deprecated on removal
                let deprecated_since = deprecated.get(&symbol).copied().or(removed_since)?;
                Some(VersionFact {
                    symbol,
                    deprecated_since,
                    removed_since,
                })
            })
            .collect();

        facts.extend(self.facts);
        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fact_records() {
        let doc = CatalogDocument::from_json(
            r#"{
                "facts": [
                    { "symbol": "Vendor\\ModuleApi\\FooInterface", "deprecated_since": "2.4.0" },
                    { "symbol": "\\Vendor\\ModuleApi\\Gone", "deprecated_since": "2.3.0", "removed_since": "2.4.4" }
                ]
            }"#,
        )
        .unwrap();

        let facts = doc.into_facts();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].symbol.as_str(), "Vendor\\ModuleApi\\FooInterface");
        assert_eq!(facts[0].deprecated_since, Version::new(2, 4, 0));
        assert_eq!(facts[0].removed_since, None);
        assert_eq!(facts[1].symbol.as_str(), "Vendor\\ModuleApi\\Gone");
        assert_eq!(facts[1].removed_since, Some(Version::new(2, 4, 4)));
    }

    #[test]
    fn test_release_lists_are_merged_per_symbol() {
        let doc = CatalogDocument::from_json(
            r#"{
                "releases": [
                    { "version": "2.4.0", "deprecated": ["A\\Foo", "A\\Bar"] },
                    { "version": "2.4.4", "removed": ["A\\Foo", "A\\Baz"] }
                ]
            }"#,
        )
        .unwrap();

        let facts = doc.into_facts();
        assert_eq!(facts.len(), 3);

        let foo = facts.iter().find(|f| f.symbol.as_str() == "A\\Foo").unwrap();
        assert_eq!(foo.deprecated_since, Version::new(2, 4, 0));
        assert_eq!(foo.removed_since, Some(Version::new(2, 4, 4)));

        let baz = facts.iter().find(|f| f.symbol.as_str() == "A\\Baz").unwrap();
        assert_eq!(baz.deprecated_since, Version::new(2, 4, 4));
        assert_eq!(baz.removed_since, Some(Version::new(2, 4, 4)));
    }

    #[test]
    fn test_explicit_facts_follow_releases() {
        let doc = CatalogDocument::from_json(
            r#"{
                "releases": [{ "version": "2.4.0", "deprecated": ["A\\Foo"] }],
                "facts": [{ "symbol": "A\\Foo", "deprecated_since": "2.3.0" }]
            }"#,
        )
        .unwrap();

        let facts = doc.into_facts();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts.last().unwrap().deprecated_since, Version::new(2, 3, 0));
    }

    #[test]
    fn test_bad_version_is_rejected() {
        let result = CatalogDocument::from_json(
            r#"{ "facts": [{ "symbol": "A\\Foo", "deprecated_since": "latest" }] }"#,
        );
        assert!(matches!(result, Err(Error::CatalogError(_))));
    }

    #[test]
    fn test_release_without_version_is_rejected() {
        let result = CatalogDocument::from_json(r#"{ "releases": [{ "deprecated": ["A\\Foo"] }] }"#);
        assert!(matches!(result, Err(Error::CatalogError(_))));
    }
}
