use super::handle::NodeId;
use crate::{Key, KeySum};

/// Height reported for a sentinel (absent) child.
pub(crate) const SENTINEL_HEIGHT: i32 = -1;

/// A tree node together with its augmentation.
///
/// A child slot holding `None` is the sentinel: it behaves as a node of height
/// -1, size 0 and key sum 0 but is never allocated.
#[derive(Clone)]
pub(crate) struct Node<V> {
    pub(crate) key: Key,
    pub(crate) value: V,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    // max(height(left), height(right)) + 1
    pub(crate) height: i32,
    // Number of nodes in the subtree rooted here.
    pub(crate) size: usize,
    // Sum of every key in the subtree rooted here.
    pub(crate) key_sum: KeySum,
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<V> Node<V> {
    /// Creates a detached leaf: height 0, size 1, two sentinel children.
    pub(crate) fn leaf(key: Key, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
            height: 0,
            size: 1,
            key_sum: KeySum::from(key),
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// The real child of a node with at most one, preferring the right slot.
    pub(crate) fn only_child(&self) -> Option<NodeId> {
        self.right.or(self.left)
    }

    /// Which side `child` hangs on. `child` must be one of this node's children.
    pub(crate) fn side_of(&self, child: NodeId) -> Side {
        if self.right == Some(child) {
            Side::Right
        } else {
            debug_assert_eq!(self.left, Some(child), "`Node::side_of()` - not a child of this node");
            Side::Left
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_leaf_is_augmented_for_itself() {
        let node = Node::leaf(-7, "v", None);
        assert_eq!(node.height, 0);
        assert_eq!(node.size, 1);
        assert_eq!(node.key_sum, -7);
        assert!(node.is_leaf());
        assert!(!node.has_two_children());
        assert_eq!(node.only_child(), None);
    }

    #[test]
    fn child_slots_by_side() {
        let mut node = Node::leaf(1, (), None);
        let a = NodeId::from_index(3);
        let b = NodeId::from_index(4);

        node.set_child(Side::Left, Some(a));
        assert_eq!(node.only_child(), Some(a));
        assert_eq!(node.side_of(a), Side::Left);

        node.set_child(Side::Right, Some(b));
        assert!(node.has_two_children());
        assert_eq!(node.child(Side::Right), Some(b));
        assert_eq!(node.side_of(b), Side::Right);
        assert_eq!(node.only_child(), Some(b));
    }
}
