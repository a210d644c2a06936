use crate::{
    interfaces::ClassHierarchyResolver,
    types::{PropagationVerdict, Symbol},
    versioning::VersionFactStore,
};
use std::collections::HashSet;
use tracing::trace;

/// Decides whether an interface inherits from a deprecated interface at any depth.
///
/// At each level every direct parent is checked against the store before any of them
/// is expanded, so a deprecated parent wins over a deprecated grandparent even when the
/// grandparent sits under an earlier parent. Among parents at the same level,
/// declaration order breaks ties.
pub struct DeprecationPropagationEngine<'a, R: ClassHierarchyResolver + ?Sized> {
    resolver: &'a R,
    store: &'a VersionFactStore,
}

impl<'a, R: ClassHierarchyResolver + ?Sized> DeprecationPropagationEngine<'a, R> {
    pub fn new(resolver: &'a R, store: &'a VersionFactStore) -> Self {
        Self { resolver, store }
    }

    pub fn store(&self) -> &VersionFactStore {
        self.store
    }

    pub fn resolver(&self) -> &R {
        self.resolver
    }

    pub fn check_interface_inheritance(&self, symbol: &Symbol) -> PropagationVerdict {
        self.check(symbol, &mut Traversal::default())
    }

    fn check(&self, symbol: &Symbol, traversal: &mut Traversal) -> PropagationVerdict {
        if !self.resolver.is_interface(symbol) {
            return PropagationVerdict::not_deprecated();
        }

        if traversal.clean.contains(symbol) {
            return PropagationVerdict::not_deprecated();
        }

        if !traversal.active_path.insert(symbol.clone()) {
            trace!("Inheritance cycle through {}", symbol);
            return PropagationVerdict::not_deprecated();
        }

        let parents: Vec<Symbol> = self
            .resolver
            .direct_parent_interfaces(symbol)
            .into_iter()
            .filter_map(|parent| {
                if parent.resolved.is_none() {
                    trace!("Unresolved parent {} of {}", parent.declared_name, symbol);
                }
                parent.resolved
            })
            .collect();

        let verdict = match parents.iter().find(|parent| self.store.is_deprecated(parent)) {
            Some(deprecated) => PropagationVerdict::deprecated_by(deprecated.clone()),
            None => parents
                .iter()
                .map(|parent| self.check(parent, traversal))
                .find(|verdict| verdict.is_deprecated)
                .unwrap_or_default(),
        };

        traversal.active_path.remove(symbol);
        // Any positive ends the whole traversal, so a negative here is final for this call
        if !verdict.is_deprecated {
            traversal.clean.insert(symbol.clone());
        }
        verdict
    }
}

/// Per-call traversal state, never shared between top-level checks
#[derive(Default)]
struct Traversal {
    /// Interfaces on the current recursion path
    active_path: HashSet<Symbol>,
    /// Interfaces already fully explored without finding a deprecated ancestor
    clean: HashSet<Symbol>,
}
