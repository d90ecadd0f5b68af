use std::collections::HashMap;

use crate::tree::Node;

/// Character to '0'/'1' code string, '0' = left, '1' = right.
pub type CodeTable = HashMap<char, String>;

/// Derives the code table by a depth-first walk accumulating the
/// root-to-leaf path of each character. A lone-leaf tree maps its character
/// to the empty code; the encoder and decoder treat that alphabet as a
/// special case since an empty code cannot drive bit-by-bit traversal.
pub fn derive(root: &Node) -> CodeTable {
    let mut table = HashMap::new();
    walk(root, String::new(), &mut table);
    table
}

fn walk(node: &Node, path: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { ch, .. } => {
            table.insert(*ch, path);
        }
        Node::Internal { left, right, .. } => {
            walk(left, format!("{path}0"), table);
            walk(right, format!("{path}1"), table);
        }
    }
}
