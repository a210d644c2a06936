//! Service implementations for the hierarchy resolver interface
//!
//! `SymbolTable` is the plain in-memory resolver; `PhpHierarchyIndex` fills one from
//! PHP sources on disk.

pub mod php_hierarchy_index;
pub mod symbol_table;

pub use php_hierarchy_index::PhpHierarchyIndex;
pub use symbol_table::SymbolTable;
