//! Outline tree storage and traversal.

use crate::expansion::ExpansionState;
use crate::node::OutlineNode;

use super::path::NodePath;

/// A visible entry in the flattened outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    /// Identity of the entry.
    pub path: NodePath,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// Whether this entry has children.
    pub has_children: bool,
    /// Whether this entry is currently expanded.
    pub is_expanded: bool,
}

/// The outline of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineTree<D> {
    roots: Vec<OutlineNode<D>>,
}

impl<D> OutlineTree<D> {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Create an outline from its top-level entries.
    pub fn with_roots(roots: Vec<OutlineNode<D>>) -> Self {
        Self { roots }
    }

    /// Top-level entries in document order.
    pub fn roots(&self) -> &[OutlineNode<D>] {
        &self.roots
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the outline has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of entries at every depth.
    pub fn node_count(&self) -> usize {
        fn count<D>(items: &[OutlineNode<D>]) -> usize {
            items.iter().map(|item| 1 + count(&item.children)).sum()
        }
        count(&self.roots)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.roots.clear();
    }

    /// Look up an entry by path.
    pub fn get(&self, path: &NodePath) -> Option<&OutlineNode<D>> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    /// Paths of all entries that have children, in pre-order.
    pub fn expandable_paths(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        for (index, item) in self.roots.iter().enumerate() {
            Self::collect_expandable(item, NodePath::root(index), &mut out);
        }
        out
    }

    fn collect_expandable(item: &OutlineNode<D>, path: NodePath, out: &mut Vec<NodePath>) {
        if !item.has_children() {
            return;
        }
        out.push(path.clone());
        for (index, child) in item.children.iter().enumerate() {
            Self::collect_expandable(child, path.child(index), out);
        }
    }

    /// Flatten the entries that are currently visible.
    ///
    /// Depth-first, pre-order, siblings in stored order. An entry's children
    /// are included only if it has at least one child and its path is
    /// expanded.
    pub fn visible(&self, expanded: &ExpansionState) -> Vec<FlatNode> {
        let mut out = Vec::new();
        for (index, item) in self.roots.iter().enumerate() {
            Self::collect_visible(item, NodePath::root(index), expanded, &mut out);
        }
        out
    }

    fn collect_visible(
        item: &OutlineNode<D>,
        path: NodePath,
        expanded: &ExpansionState,
        out: &mut Vec<FlatNode>,
    ) {
        let has_children = item.has_children();
        let is_expanded = has_children && expanded.is_expanded(&path);
        let depth = path.depth();

        out.push(FlatNode {
            path: path.clone(),
            depth,
            has_children,
            is_expanded,
        });

        if is_expanded {
            for (index, child) in item.children.iter().enumerate() {
                Self::collect_visible(child, path.child(index), expanded, out);
            }
        }
    }
}

impl<D> Default for OutlineTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> From<Vec<OutlineNode<D>>> for OutlineTree<D> {
    fn from(roots: Vec<OutlineNode<D>>) -> Self {
        Self::with_roots(roots)
    }
}
