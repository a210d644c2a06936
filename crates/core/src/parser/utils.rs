use tree_sitter::Node;

/// 1-based line where the node starts
pub fn node_line(node: &Node) -> u32 {
    node.start_position().row as u32 + 1
}

pub fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    node.utf8_text(source.as_bytes()).ok()
}
