//! In-memory class hierarchy
//!
//! Holds one declaration per fully-qualified symbol. A parent reference resolves only
//! when the parent itself is declared in the table.

use crate::{
    interfaces::{ClassHierarchyResolver, ParentRef},
    types::{ClassDeclaration, Symbol},
};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    declarations: HashMap<Symbol, ClassDeclaration>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any earlier one for the same symbol
    pub fn insert(&mut self, declaration: ClassDeclaration) {
        if let Some(previous) = self
            .declarations
            .insert(declaration.symbol.clone(), declaration)
        {
            debug!(
                "Duplicate declaration of {}, keeping the last one (previous in {:?})",
                previous.symbol, previous.file
            );
        }
    }

    /// Declare an interface whose `extends` list is given as fully-qualified names
    pub fn declare_interface(&mut self, symbol: &str, parents: &[&str]) {
        let declaration = parents
            .iter()
            .fold(ClassDeclaration::interface(symbol), |decl, parent| {
                decl.with_parent(parent)
            });
        self.insert(declaration);
    }

    /// Declare a class whose `implements` list is given as fully-qualified names
    pub fn declare_class(&mut self, symbol: &str, interfaces: &[&str]) {
        let declaration = interfaces
            .iter()
            .fold(ClassDeclaration::class(symbol), |decl, parent| {
                decl.with_parent(parent)
            });
        self.insert(declaration);
    }

    pub fn declaration(&self, symbol: &Symbol) -> Option<&ClassDeclaration> {
        self.declarations.get(symbol)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.declarations.contains_key(symbol)
    }

    pub fn declarations(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.declarations.values()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Extend<ClassDeclaration> for SymbolTable {
    fn extend<T: IntoIterator<Item = ClassDeclaration>>(&mut self, iter: T) {
        for declaration in iter {
            self.insert(declaration);
        }
    }
}

impl ClassHierarchyResolver for SymbolTable {
    fn is_interface(&self, symbol: &Symbol) -> bool {
        self.declaration(symbol)
            .is_some_and(|declaration| declaration.is_interface())
    }

    fn direct_parent_interfaces(&self, symbol: &Symbol) -> Vec<ParentRef> {
        let Some(declaration) = self.declaration(symbol) else {
            return Vec::new();
        };

        declaration
            .parents
            .iter()
            .map(|parent| ParentRef {
                declared_name: parent.declared_name.clone(),
                resolved: self
                    .contains(&parent.qualified)
                    .then(|| parent.qualified.clone()),
                line: parent.line,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_resolve_only_when_declared() {
        let mut table = SymbolTable::new();
        table.declare_interface("A\\Known", &[]);
        table.declare_interface("A\\Child", &["A\\Known", "A\\Missing"]);

        let parents = table.direct_parent_interfaces(&Symbol::from("A\\Child"));
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].resolved, Some(Symbol::from("A\\Known")));
        assert_eq!(parents[1].declared_name, "A\\Missing");
        assert_eq!(parents[1].resolved, None);
    }

    #[test]
    fn test_is_interface() {
        let mut table = SymbolTable::new();
        table.declare_interface("A\\Api", &[]);
        table.declare_class("A\\Impl", &["A\\Api"]);

        assert!(table.is_interface(&Symbol::from("A\\Api")));
        assert!(!table.is_interface(&Symbol::from("A\\Impl")));
        assert!(!table.is_interface(&Symbol::from("A\\Unknown")));
    }

    #[test]
    fn test_unknown_symbol_has_no_parents() {
        let table = SymbolTable::new();
        assert!(table.direct_parent_interfaces(&Symbol::from("A\\Nope")).is_empty());
    }

    #[test]
    fn test_redeclaration_replaces() {
        let mut table = SymbolTable::new();
        table.declare_interface("A\\Api", &["A\\Old"]);
        table.declare_interface("A\\Api", &["A\\New"]);

        assert_eq!(table.len(), 1);
        let declaration = table.declaration(&Symbol::from("A\\Api")).unwrap();
        assert_eq!(declaration.parents[0].qualified, Symbol::from("A\\New"));
    }
}
