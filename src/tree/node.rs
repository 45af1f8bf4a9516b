//! Implicit node addressing
//!
//! A node is just its position in the level-order array.
//! Children computed via index arithmetic:
//!   Left child: 2i + 1
//!   Right child: 2i + 2

use std::fmt;

/// Position of a node in a level-order array (implicit — just an index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// The root of every level-order array
    pub const ROOT: NodeIndex = NodeIndex(0);

    /// Root of the left branch
    pub const LEFT_BRANCH: NodeIndex = NodeIndex(1);

    /// Root of the right branch
    pub const RIGHT_BRANCH: NodeIndex = NodeIndex(2);

    /// Check whether this index exists in an array of `len` entries
    #[inline]
    pub fn in_bounds(&self, len: usize) -> bool {
        self.0 < len
    }

    /// Left child index: 2i + 1
    #[inline]
    pub fn left_child(&self) -> NodeIndex {
        NodeIndex(2 * self.0 + 1)
    }

    /// Right child index: 2i + 2
    #[inline]
    pub fn right_child(&self) -> NodeIndex {
        NodeIndex(2 * self.0 + 2)
    }

    /// Get children via index arithmetic
    ///
    /// Returns: (2i+1, 2i+2) — bounds are the caller's concern
    pub fn children(&self) -> (NodeIndex, NodeIndex) {
        (self.left_child(), self.right_child())
    }

    /// Parent index: ⌊(i−1)/2⌋; the root has none
    pub fn parent(&self) -> Option<NodeIndex> {
        if self.0 == 0 {
            None
        } else {
            Some(NodeIndex((self.0 - 1) / 2))
        }
    }

    /// Depth below the root: ⌊log2(i + 1)⌋
    pub fn depth(&self) -> u32 {
        (self.0 as u64 + 1).ilog2()
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_arithmetic() {
        let node = NodeIndex(2);
        let (left, right) = node.children();
        assert_eq!(left, NodeIndex(5));
        assert_eq!(right, NodeIndex(6));
    }

    #[test]
    fn test_parent_inverts_children() {
        for i in 0..64usize {
            let node = NodeIndex(i);
            let (left, right) = node.children();
            assert_eq!(left.parent(), Some(node));
            assert_eq!(right.parent(), Some(node));
        }
        assert_eq!(NodeIndex::ROOT.parent(), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(NodeIndex::ROOT.depth(), 0);
        assert_eq!(NodeIndex::LEFT_BRANCH.depth(), 1);
        assert_eq!(NodeIndex::RIGHT_BRANCH.depth(), 1);
        assert_eq!(NodeIndex(3).depth(), 2);
        assert_eq!(NodeIndex(6).depth(), 2);
        assert_eq!(NodeIndex(7).depth(), 3);
    }

    #[test]
    fn test_branch_roots_hang_off_root() {
        let (left, right) = NodeIndex::ROOT.children();
        assert_eq!(left, NodeIndex::LEFT_BRANCH);
        assert_eq!(right, NodeIndex::RIGHT_BRANCH);
    }
}
