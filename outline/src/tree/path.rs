//! Structural identity for outline entries.

use std::fmt;

/// Position of an entry in the outline, as sibling indices from the root.
///
/// `[0]` is the first top-level entry, `[0, 2]` its third child. Two entries
/// with the same title in different places always have different paths, so
/// expansion state keyed by path never leaks between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of a top-level entry.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Build a path from explicit sibling indices.
    ///
    /// Returns `None` for an empty slice, which names no entry.
    pub fn from_indices(indices: &[usize]) -> Option<Self> {
        if indices.is_empty() {
            None
        } else {
            Some(Self(indices.to_vec()))
        }
    }

    /// Path of this entry's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent entry, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Nesting level (0 = top-level).
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    /// The sibling indices from the root.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_parent() {
        let root = NodePath::root(1);
        let child = root.child(0).child(4);

        assert_eq!(child.indices(), &[1, 0, 4]);
        assert_eq!(child.depth(), 2);
        assert_eq!(child.parent(), Some(root.child(0)));
        assert_eq!(root.parent(), None);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodePath::root(0).child(2).child(1).to_string(), "0.2.1");
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(NodePath::from_indices(&[]), None);
        assert_eq!(NodePath::from_indices(&[3]), Some(NodePath::root(3)));
    }
}
