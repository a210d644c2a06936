//! PHP source parsing and declaration extraction using tree-sitter

pub mod declaration_extractor;
pub mod name_scope;
pub mod php_parser;
pub mod utils;

// Re-export commonly used items
pub use declaration_extractor::DeclarationExtractor;
pub use name_scope::NameScope;
pub use php_parser::PhpParser;
pub use utils::{node_line, node_text};
