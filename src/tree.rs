use tracing::instrument;

use crate::rng::InsertRng;

/// A general rooted tree over integer values.
///
/// A tree is either *empty* (no value, no children) or a root value plus an
/// ordered list of child subtrees. The empty state is a whole-tree state
/// only: a stored child is never the empty tree, and every mutation below
/// maintains that. Child order is insertion order and carries no ranking
/// semantics; duplicate values may occur anywhere.
///
/// Equality and hashing are structural and order-sensitive, so two trees
/// compare equal exactly when their rendered forms match line for line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tree {
    pub(crate) root: Option<i64>,
    pub(crate) children: Vec<Tree>,
}

impl Tree {
    /// Creates the empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-node tree holding `value`, with no children.
    pub fn leaf(value: i64) -> Self {
        Self {
            root: Some(value),
            children: Vec::new(),
        }
    }

    /// Returns the root value, `None` for the empty tree.
    pub fn root(&self) -> Option<i64> {
        self.root
    }

    /// Returns the direct child subtrees in insertion order.
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// True iff no value is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self.root {
            None => 0,
            Some(_) => 1 + self.children.iter().map(Tree::size).sum::<usize>(),
        }
    }

    /// Height of the tree: 0 for empty, 1 for a single node.
    ///
    /// Recursion is bounded by tree height.
    pub fn depth(&self) -> usize {
        match self.root {
            None => 0,
            Some(_) => 1 + self.children.iter().map(Tree::depth).max().unwrap_or(0),
        }
    }

    /// Number of nodes whose value equals `item`, over the whole tree.
    pub fn count(&self, item: i64) -> usize {
        self.iter().filter(|&v| v == item).count()
    }

    /// True iff at least one node equals `item`.
    ///
    /// Short-circuits on the first match: the root is checked before the
    /// children, children in order.
    pub fn contains(&self, item: i64) -> bool {
        self.iter().any(|v| v == item)
    }

    /// Values of all leaf nodes, in child order.
    ///
    /// Only childless nodes count as leaves; an interior node contributes no
    /// value of its own even though it has one.
    pub fn leaves(&self) -> Vec<i64> {
        match self.root {
            None => Vec::new(),
            Some(value) if self.children.is_empty() => vec![value],
            Some(_) => self.children.iter().flat_map(Tree::leaves).collect(),
        }
    }

    /// Mean of all node values, 0.0 for the empty tree.
    ///
    /// Sum and node count are accumulated in one pass and divided once at
    /// the top.
    pub fn average(&self) -> f64 {
        let (sum, count) = self.sum_and_count();
        if count == 0 {
            return 0.0;
        }
        sum as f64 / count as f64
    }

    fn sum_and_count(&self) -> (i64, usize) {
        let Some(root) = self.root else {
            return (0, 0);
        };
        let mut sum = root;
        let mut count = 1;
        for child in &self.children {
            let (s, n) = child.sum_and_count();
            sum += s;
            count += n;
        }
        (sum, count)
    }

    /// Pre-order iterator over all node values.
    ///
    /// Uses an explicit stack, so it is safe for trees too deep for the
    /// recursive queries.
    pub fn iter(&self) -> PreOrderValues<'_> {
        PreOrderValues::new(self)
    }

    /// Inserts `item` at a randomized position.
    ///
    /// An empty tree takes `item` as its root; a childless root gains `item`
    /// as its sole child. Otherwise a draw from {1,2,3} decides: 3 appends a
    /// new leaf child under this node, 1 or 2 descends into a uniformly
    /// chosen existing child. Each call adds exactly one node.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn insert<R: InsertRng>(&mut self, item: i64, rng: &mut R) {
        match self.root {
            None => self.root = Some(item),
            Some(_) if self.children.is_empty() => self.children.push(Tree::leaf(item)),
            Some(_) => {
                if rng.draw_choice() == 3 {
                    self.children.push(Tree::leaf(item));
                } else {
                    let idx = rng.pick_child(self.children.len());
                    self.children[idx].insert(item, rng);
                }
            }
        }
    }

    /// Appends a new leaf child holding `item` under the first node (in
    /// pre-order) whose value equals `parent_value`.
    ///
    /// Returns false and leaves the tree unchanged when no node matches.
    /// When `parent_value` occurs more than once, only the first pre-order
    /// match is mutated.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_child(&mut self, item: i64, parent_value: i64) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        if root == parent_value {
            self.children.push(Tree::leaf(item));
            return true;
        }
        self.children
            .iter_mut()
            .any(|child| child.insert_child(item, parent_value))
    }

    /// Removes one occurrence of `item`, returning whether anything was
    /// deleted.
    ///
    /// Deleting the root promotes the last child: its value becomes the new
    /// root value and its children are appended to the end of the remaining
    /// child list. Deleting a leaf elsewhere removes that node from its
    /// parent's child list, so an empty tree is never stored as a child.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, item: i64) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        if root == item {
            self.delete_root();
            return true;
        }
        for idx in 0..self.children.len() {
            if self.children[idx].delete(item) {
                if self.children[idx].is_empty() {
                    self.children.remove(idx);
                }
                return true;
            }
        }
        false
    }

    // Precondition: self is non-empty.
    fn delete_root(&mut self) {
        match self.children.pop() {
            None => self.root = None,
            Some(promoted) => {
                self.root = promoted.root;
                self.children.extend(promoted.children);
            }
        }
    }
}

/// Pre-order traversal over node values, stack-based.
pub struct PreOrderValues<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> PreOrderValues<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::new();
        if !tree.is_empty() {
            stack.push(tree);
        }
        Self { stack }
    }
}

impl Iterator for PreOrderValues<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        node.root
    }
}
