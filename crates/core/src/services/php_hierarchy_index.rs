//! Tree-sitter backed hierarchy resolver
//!
//! Parses every PHP file under a set of roots and answers hierarchy queries from the
//! resulting symbol table.

use super::symbol_table::SymbolTable;
use crate::{
    error::Result,
    interfaces::{ClassHierarchyResolver, ParentRef},
    parser::PhpParser,
    types::Symbol,
};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

const PHP_EXTENSION: &str = "php";

#[derive(Debug, Clone, Default)]
pub struct PhpHierarchyIndex {
    table: SymbolTable,
    files_indexed: usize,
}

impl PhpHierarchyIndex {
    /// Index all `.php` files below each root.
    ///
    /// Files that cannot be read are skipped; only a parser setup failure is an error.
    pub fn index_paths<P: AsRef<Path>>(roots: &[P]) -> Result<Self> {
        let mut parser = PhpParser::new()?;
        let mut index = Self::default();

        for root in roots {
            let root = root.as_ref();
            debug!("Indexing PHP sources under {}", root.display());

            for entry in WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(PHP_EXTENSION) {
                    continue;
                }
                index.index_file(&mut parser, path);
            }
        }

        debug!(
            "Indexed {} declarations from {} files",
            index.table.len(),
            index.files_indexed
        );
        Ok(index)
    }

    /// Index one in-memory source; `path` is only recorded for reporting
    pub fn index_source(&mut self, parser: &mut PhpParser, source: &str, path: Option<&Path>) -> Result<()> {
        let declarations = parser.declarations(source, path)?;
        self.table.extend(declarations);
        self.files_indexed += 1;
        Ok(())
    }

    fn index_file(&mut self, parser: &mut PhpParser, path: &Path) {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                debug!("Skipping unreadable file {}: {}", path.display(), e);
                return;
            }
        };

        if let Err(e) = self.index_source(parser, &source, Some(path)) {
            warn!("Failed to index {}: {}", path.display(), e);
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn files_indexed(&self) -> usize {
        self.files_indexed
    }
}

impl ClassHierarchyResolver for PhpHierarchyIndex {
    fn is_interface(&self, symbol: &Symbol) -> bool {
        self.table.is_interface(symbol)
    }

    fn direct_parent_interfaces(&self, symbol: &Symbol) -> Vec<ParentRef> {
        self.table.direct_parent_interfaces(symbol)
    }
}
