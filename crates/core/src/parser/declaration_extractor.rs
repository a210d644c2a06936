use super::name_scope::NameScope;
use super::utils::{node_line, node_text};
use crate::types::{ClassDeclaration, DeclarationKind, DeclaredParent};
use std::path::Path;
use tree_sitter::{Node, Tree};
use tracing::trace;

/// Node kinds that can name a parent type in a base clause
const NAME_KINDS: &[&str] = &["name", "qualified_name", "relative_name"];

/// Collects class-like declarations and their parent lists from a PHP syntax tree.
pub struct DeclarationExtractor;

impl Default for DeclarationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, tree: &Tree, source: &str, file: Option<&Path>) -> Vec<ClassDeclaration> {
        let root = tree.root_node();
        if root.has_error() {
            trace!("Syntax errors in {:?}, extracting what parsed", file);
        }

        let mut declarations = Vec::new();
        let mut scope = NameScope::new();
        self.visit_statements(&root, source, file, &mut scope, &mut declarations);
        declarations
    }

    fn visit_statements(
        &self,
        parent: &Node,
        source: &str,
        file: Option<&Path>,
        scope: &mut NameScope,
        declarations: &mut Vec<ClassDeclaration>,
    ) {
        let mut cursor = parent.walk();
        for node in parent.named_children(&mut cursor) {
            match node.kind() {
                "namespace_definition" => {
                    let name = node
                        .child_by_field_name("name")
                        .and_then(|n| node_text(&n, source))
                        .unwrap_or("");
                    match node.child_by_field_name("body") {
                        Some(body) => {
                            let mut inner = NameScope::in_namespace(name);
                            self.visit_statements(&body, source, file, &mut inner, declarations);
                        }
                        None => scope.enter_namespace(name),
                    }
                }
                "namespace_use_declaration" => {
                    if let Some(text) = node_text(&node, source) {
                        scope.import_statement(text);
                    }
                }
                "interface_declaration" => {
                    if let Some(declaration) = self.declaration(
                        &node,
                        source,
                        file,
                        scope,
                        DeclarationKind::Interface,
                        "base_clause",
                    ) {
                        declarations.push(declaration);
                    }
                }
                "class_declaration" | "enum_declaration" => {
                    if let Some(declaration) = self.declaration(
                        &node,
                        source,
                        file,
                        scope,
                        DeclarationKind::Class,
                        "class_interface_clause",
                    ) {
                        declarations.push(declaration);
                    }
                }
                // Conditional declarations such as `if (!interface_exists(...)) { ... }`
                "compound_statement" | "if_statement" | "else_if_clause" | "else_clause"
                | "colon_block" => {
                    self.visit_statements(&node, source, file, scope, declarations);
                }
                _ => {}
            }
        }
    }

    fn declaration(
        &self,
        node: &Node,
        source: &str,
        file: Option<&Path>,
        scope: &NameScope,
        kind: DeclarationKind,
        parent_clause: &str,
    ) -> Option<ClassDeclaration> {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| node_text(&n, source))?;

        let mut cursor = node.walk();
        let parents = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == parent_clause)
            .flat_map(|clause| self.clause_names(&clause, source, scope))
            .collect();

        Some(ClassDeclaration {
            symbol: scope.qualify(name),
            kind,
            parents,
            file: file.map(|f| f.to_path_buf()),
            line: node_line(node),
        })
    }

    fn clause_names(&self, clause: &Node, source: &str, scope: &NameScope) -> Vec<DeclaredParent> {
        let mut cursor = clause.walk();
        clause
            .named_children(&mut cursor)
            .filter(|child| NAME_KINDS.contains(&child.kind()))
            .filter_map(|child| {
                let text = node_text(&child, source)?;
                Some(DeclaredParent {
                    declared_name: text.to_string(),
                    qualified: scope.resolve(text),
                    line: node_line(&child),
                })
            })
            .collect()
    }
}
