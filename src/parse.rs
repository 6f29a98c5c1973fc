use std::str::FromStr;

use crate::errors::{TreeError, TreeResult};
use crate::render::{EMPTY_LITERAL, INDENT};
use crate::tree::Tree;

impl FromStr for Tree {
    type Err = TreeError;

    /// Parses exactly what `Display` produces: the `Tree()` literal or an
    /// indented value listing, two spaces per depth level.
    ///
    /// For every tree `t`, `t.to_string().parse() == Ok(t)`.
    fn from_str(s: &str) -> TreeResult<Self> {
        if s.trim() == EMPTY_LITERAL {
            return Ok(Tree::new());
        }

        // Path from the root to the node currently open at each depth.
        let mut stack: Vec<Tree> = Vec::new();

        for (idx, raw) in s.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let body = raw.trim_start_matches(' ');
            let spaces = raw.len() - body.len();
            if spaces % INDENT != 0 {
                return Err(TreeError::BadIndent { line });
            }
            let depth = spaces / INDENT;
            // Deeper than one level below the previous line, or a second
            // root at depth 0.
            if depth > stack.len() || (depth == 0 && !stack.is_empty()) {
                return Err(TreeError::BadIndent { line });
            }

            let value: i64 = body
                .trim_end()
                .parse()
                .map_err(|source| TreeError::InvalidValue { line, source })?;

            // Close nodes deeper than the new line before opening it.
            while stack.len() > depth {
                if let Some(done) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(done);
                    }
                }
            }
            stack.push(Tree::leaf(value));
        }

        let mut current = stack.pop().ok_or(TreeError::EmptyInput)?;
        while let Some(mut parent) = stack.pop() {
            parent.children.push(current);
            current = parent;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_literal() {
        let tree: Tree = "Tree()".parse().unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_parse_rebuilds_nesting() {
        let tree: Tree = "1\n  2\n    4\n  3\n".parse().unwrap();
        assert_eq!(tree.root(), Some(1));
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[0].children()[0].root(), Some(4));
        assert_eq!(tree.leaves(), vec![4, 3]);
    }

    #[test]
    fn test_parse_rejects_skipped_level() {
        let err = "1\n    2\n".parse::<Tree>().unwrap_err();
        assert!(matches!(err, TreeError::BadIndent { line: 2 }));
    }

    #[test]
    fn test_parse_rejects_odd_indent() {
        let err = "1\n 2\n".parse::<Tree>().unwrap_err();
        assert!(matches!(err, TreeError::BadIndent { line: 2 }));
    }

    #[test]
    fn test_parse_rejects_second_root() {
        let err = "1\n2\n".parse::<Tree>().unwrap_err();
        assert!(matches!(err, TreeError::BadIndent { line: 2 }));
    }

    #[test]
    fn test_parse_rejects_garbage_value() {
        let err = "1\n  x\n".parse::<Tree>().unwrap_err();
        assert!(matches!(err, TreeError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(matches!("".parse::<Tree>(), Err(TreeError::EmptyInput)));
        assert!(matches!("  \n".parse::<Tree>(), Err(TreeError::EmptyInput)));
    }
}
