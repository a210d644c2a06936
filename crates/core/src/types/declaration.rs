use super::symbol::Symbol;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Interface,
    Class,
}

/// A parent named in an `extends`/`implements` list, with its name already qualified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredParent {
    pub declared_name: String,
    pub qualified: Symbol,
    /// 1-based line
    pub line: u32,
}

/// A class or interface declared in source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    pub symbol: Symbol,
    pub kind: DeclarationKind,
    /// `extends` list of an interface or `implements` list of a class
    pub parents: Vec<DeclaredParent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// 1-based line of the declaration
    pub line: u32,
}

impl ClassDeclaration {
    pub fn interface(symbol: impl Into<Symbol>) -> Self {
        Self::new(symbol.into(), DeclarationKind::Interface)
    }

    pub fn class(symbol: impl Into<Symbol>) -> Self {
        Self::new(symbol.into(), DeclarationKind::Class)
    }

    fn new(symbol: Symbol, kind: DeclarationKind) -> Self {
        Self {
            symbol,
            kind,
            parents: Vec::new(),
            file: None,
            line: 0,
        }
    }

    /// Add a parent given by its fully-qualified name
    pub fn with_parent(mut self, qualified: &str) -> Self {
        self.parents.push(DeclaredParent {
            declared_name: qualified.to_string(),
            qualified: Symbol::from(qualified),
            line: 0,
        });
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }
}
