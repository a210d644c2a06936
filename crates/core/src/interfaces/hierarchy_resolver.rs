//! Class hierarchy resolution interface
//!
//! The propagation engine never parses source itself. It asks a resolver for the
//! declared parents of a symbol, which lets the hierarchy come from a tree-sitter index,
//! an IDE's symbol tables, or a hand-built table in tests.

use crate::types::Symbol;
use serde::Serialize;

/// One entry of a declared `extends` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentRef {
    /// Name as written in source, before resolution
    pub declared_name: String,
    /// Target of the reference, absent when it could not be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Symbol>,
    /// 1-based source line of the reference, 0 when unknown
    pub line: u32,
}

impl ParentRef {
    pub fn resolved(declared_name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            declared_name: declared_name.into(),
            resolved: Some(symbol),
            line: 0,
        }
    }

    pub fn unresolved(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            resolved: None,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// Trait for class/interface hierarchy lookups
pub trait ClassHierarchyResolver: Send + Sync {
    /// Whether the symbol is declared as an interface
    fn is_interface(&self, symbol: &Symbol) -> bool;

    /// Directly declared parent interfaces, in declaration order.
    ///
    /// For an interface this is its `extends` list, for a class its `implements` list.
    fn direct_parent_interfaces(&self, symbol: &Symbol) -> Vec<ParentRef>;
}
