//! Text rendering of a tree's shape.
//!
//! This is a presentation adapter layered on the read-only accessors
//! ([`Tree::root`], [`Node::left`], [`Node::right`]); it has no access to
//! the tree's internals and no effect on its semantics.

use std::fmt::{self, Write};

use crate::tree::{Node, Tree};

/// Renders the tree with box-drawing connectors, one node per line: the
/// right subtree above its parent, the left subtree below, indented one
/// level per edge. The empty tree renders as the empty string.
///
/// # Examples
///
/// ```
/// use bstree::pretty::render;
/// use bstree::tree::Tree;
///
/// let tree = Tree::build(vec![2, 1, 3]);
///
/// assert_eq!(render(&tree), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
pub fn render<T: fmt::Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(root, "", true, &mut out);
    }
    out
}

fn render_node<T: fmt::Display>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, &deeper, false, out);
    }
    let connector = if is_left { "└── " } else { "┌── " };
    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "{}{}{}", prefix, connector, node.value());
    if let Some(left) = node.left() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, &deeper, true, out);
    }
}
