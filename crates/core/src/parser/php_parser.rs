use crate::{
    error::{Error, Result},
    parser::declaration_extractor::DeclarationExtractor,
    types::ClassDeclaration,
};
use std::path::Path;
use tree_sitter::Parser;

pub struct PhpParser {
    parser: Parser,
}

impl PhpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<tree_sitter::Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Interfaces, classes and enums declared in `source`, in source order
    pub fn declarations(
        &mut self,
        source: &str,
        file_path: Option<&Path>,
    ) -> Result<Vec<ClassDeclaration>> {
        let tree = self.parse(source)?;
        Ok(DeclarationExtractor::new().extract(&tree, source, file_path))
    }
}
