//! Expansion state tracking.

use std::collections::HashSet;

use crate::tree::NodePath;

/// The set of outline entries currently showing their children.
///
/// This is a plain key set. It holds no reference to the tree and performs no
/// validation; refusing to expand leaves is the controller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<NodePath>,
}

impl ExpansionState {
    /// Create an empty state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `path`. Returns the new membership.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.clone());
            true
        }
    }

    /// Check if `path` is expanded.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.contains(path)
    }

    /// Mark `path` expanded. Returns `true` if it was not already.
    pub fn expand(&mut self, path: &NodePath) -> bool {
        self.expanded.insert(path.clone())
    }

    /// Mark `path` collapsed. Returns `true` if it was expanded.
    pub fn collapse(&mut self, path: &NodePath) -> bool {
        self.expanded.remove(path)
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded entries.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded paths in pre-order.
    pub fn paths(&self) -> Vec<NodePath> {
        let mut paths: Vec<NodePath> = self.expanded.iter().cloned().collect();
        paths.sort();
        paths
    }
}
