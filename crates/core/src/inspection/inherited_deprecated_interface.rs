use super::{propagation::DeprecationPropagationEngine, reporter::InspectionReporter};
use crate::{
    interfaces::{ClassHierarchyResolver, ParentRef},
    types::{DiagnosticRecord, PropagationVerdict, Symbol},
};

/// Per-reference inspection of an interface's `extends` list.
///
/// Each resolved parent is reported on its own: directly when the parent is deprecated,
/// otherwise with the witness found by propagating through that parent.
pub struct InheritedDeprecatedInterface<'a, R: ClassHierarchyResolver + ?Sized> {
    engine: DeprecationPropagationEngine<'a, R>,
    reporter: &'a InspectionReporter,
}

impl<'a, R: ClassHierarchyResolver + ?Sized> InheritedDeprecatedInterface<'a, R> {
    pub fn new(engine: DeprecationPropagationEngine<'a, R>, reporter: &'a InspectionReporter) -> Self {
        Self { engine, reporter }
    }

    pub fn engine(&self) -> &DeprecationPropagationEngine<'a, R> {
        &self.engine
    }

    /// Records for `symbol`, each paired with the parent reference it belongs to
    pub fn inspect(&self, symbol: &Symbol) -> Vec<(ParentRef, DiagnosticRecord)> {
        let resolver = self.engine.resolver();
        if !resolver.is_interface(symbol) {
            return Vec::new();
        }

        resolver
            .direct_parent_interfaces(symbol)
            .into_iter()
            .filter_map(|reference| {
                let parent = reference.resolved.as_ref()?;
                let verdict = if self.engine.store().is_deprecated(parent) {
                    PropagationVerdict::deprecated_by(parent.clone())
                } else {
                    self.engine.check_interface_inheritance(parent)
                };
                let record = self.reporter.report(symbol, &verdict)?;
                Some((reference, record))
            })
            .collect()
    }
}
