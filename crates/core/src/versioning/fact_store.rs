use super::catalog::{CatalogDocument, VersionFact};
use crate::{
    error::{Error, Result},
    types::{Symbol, Version},
};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Read-only knowledge base of deprecated framework symbols.
///
/// Populated once from one or more catalogs and never mutated afterwards, so a single
/// instance can be shared across analysis threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct VersionFactStore {
    facts: HashMap<Symbol, VersionFact>,
    target_version: Option<Version>,
}

impl VersionFactStore {
    /// Load a single catalog file
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_all(std::iter::once(path))
    }

    /// Load several catalog files in order; a symbol seen again replaces the earlier fact
    pub fn load_all<'a, I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut facts = Vec::new();
        let mut loaded = 0usize;
        for path in paths {
            debug!("Loading version catalog: {}", path.display());
            facts.extend(CatalogDocument::load_from_file(path)?.into_facts());
            loaded += 1;
        }

        if loaded == 0 {
            return Err(Error::CatalogError(
                "No version catalog configured".to_string(),
            ));
        }

        Self::from_facts(facts)
    }

    /// Build a store from facts already in memory; last write wins on duplicates
    pub fn from_facts<I>(facts: I) -> Result<Self>
    where
        I: IntoIterator<Item = VersionFact>,
    {
        let mut map = HashMap::new();
        for fact in facts {
            if let Some(previous) = map.insert(fact.symbol.clone(), fact) {
                debug!("Catalog fact for {} overwritten", previous.symbol);
            }
        }

        if map.is_empty() {
            return Err(Error::CatalogError(
                "Version catalog contains no facts".to_string(),
            ));
        }

        debug!("Version catalog ready with {} facts", map.len());
        Ok(Self {
            facts: map,
            target_version: None,
        })
    }

    /// Only count deprecations introduced at or before `version`
    pub fn with_target_version(mut self, version: Version) -> Self {
        self.target_version = Some(version);
        self
    }

    pub fn target_version(&self) -> Option<Version> {
        self.target_version
    }

    pub fn is_deprecated(&self, symbol: &Symbol) -> bool {
        self.fact_for(symbol)
            .is_some_and(|fact| self.reached(fact.deprecated_since))
    }

    /// Whether the symbol no longer exists in the target version
    pub fn is_removed(&self, symbol: &Symbol) -> bool {
        self.fact_for(symbol)
            .and_then(|fact| fact.removed_since)
            .is_some_and(|removed| self.reached(removed))
    }

    pub fn fact_for(&self, symbol: &Symbol) -> Option<&VersionFact> {
        self.facts.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    fn reached(&self, version: Version) -> bool {
        match self.target_version {
            Some(target) => version <= target,
            None => true,
        }
    }
}
