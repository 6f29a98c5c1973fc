use std::fmt;

use termtree::Tree as TermTree;

use crate::tree::Tree;

/// Two spaces per depth level; the parser relies on this unit.
pub(crate) const INDENT: usize = 2;

/// Literal denoting the empty tree.
pub(crate) const EMPTY_LITERAL: &str = "Tree()";

impl fmt::Display for Tree {
    /// Renders the empty tree as `Tree()`, otherwise one value per line,
    /// indented two spaces per depth level, children in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", EMPTY_LITERAL)
        } else {
            self.fmt_indented(f, 0)
        }
    }
}

impl Tree {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let Some(root) = self.root else {
            return Ok(());
        };
        writeln!(f, "{:indent$}{root}", "", indent = depth * INDENT)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }

    /// Converts to a `termtree` tree for branch-drawn terminal output,
    /// `None` for the empty tree.
    pub fn to_termtree(&self) -> Option<TermTree<String>> {
        let root = self.root?;
        let leaves: Vec<_> = self
            .children
            .iter()
            .filter_map(Tree::to_termtree)
            .collect();
        Some(TermTree::new(root.to_string()).with_leaves(leaves))
    }
}
