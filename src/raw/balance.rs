use tracing::trace;

use super::handle::NodeId;
use super::raw_avl_tree::RawAvlTree;

/// What kind of edit the upward walk is repairing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    /// One rotation always restores balance, so the walk stops after it.
    Insert,
    /// Rotations may be needed at several ancestors.
    Delete,
}

/// The rotation applied at an unbalanced node, named after the heavy path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Rotation {
    /// Left-heavy, left child not right-heavy: one right rotation.
    LeftLeft,
    /// Left-heavy, left child right-heavy: left on the child, then right.
    LeftRight,
    /// Right-heavy, right child left-heavy: right on the child, then left.
    RightLeft,
    /// Right-heavy, right child not left-heavy: one left rotation.
    RightRight,
}

impl Rotation {
    /// Number of single rotations this case performs.
    pub(crate) const fn count(self) -> usize {
        match self {
            Rotation::LeftLeft | Rotation::RightRight => 1,
            Rotation::LeftRight | Rotation::RightLeft => 2,
        }
    }
}

impl<V> RawAvlTree<V> {
    /// Walks from `start` toward the root restoring heights and balance.
    /// Returns the number of single rotations performed.
    pub(super) fn rebalance(&mut self, start: NodeId, mode: Mode) -> usize {
        let mut rotations = 0;
        let mut cursor = Some(start);

        while let Some(id) = cursor {
            let bf = self.balance_factor(id);
            let height = self.computed_height(id);
            debug_assert!(bf.abs() <= 2, "`RawAvlTree::rebalance()` - balance factor {bf} out of range");

            let node = self.node_mut(id);
            if bf.abs() < 2 {
                if node.height == height {
                    // Nothing above this node can have changed.
                    return rotations;
                }
                node.height = height;
                cursor = node.parent;
                continue;
            }

            node.height = height;
            let parent = node.parent;
            let key = node.key;

            let rotation = self.rotate(id);
            rotations += rotation.count();
            trace!(key, ?rotation, ?mode, "rotated unbalanced node");

            match mode {
                Mode::Insert => return rotations,
                Mode::Delete => cursor = parent,
            }
        }

        rotations
    }

    /// Picks and applies the rotation case for a node with `|bf| == 2`.
    fn rotate(&mut self, id: NodeId) -> Rotation {
        let node = self.node(id);
        if self.balance_factor(id) > 0 {
            let left = node.left.expect("`RawAvlTree::rotate()` - left-heavy node has no left child");
            if self.balance_factor(left) >= 0 {
                self.rotate_right(id);
                Rotation::LeftLeft
            } else {
                self.rotate_left(left);
                self.rotate_right(id);
                Rotation::LeftRight
            }
        } else {
            let right = node.right.expect("`RawAvlTree::rotate()` - right-heavy node has no right child");
            if self.balance_factor(right) > 0 {
                self.rotate_right(right);
                self.rotate_left(id);
                Rotation::RightLeft
            } else {
                self.rotate_left(id);
                Rotation::RightRight
            }
        }
    }

    /// `a`'s left child `b` takes `a`'s place, `a` becomes `b.right` and `b`'s
    /// old right subtree becomes `a.left`.
    fn rotate_right(&mut self, a: NodeId) {
        let parent = self.node(a).parent;
        let b = self.node(a).left.expect("`RawAvlTree::rotate_right()` - pivot has no left child");
        let inner = self.node(b).right;

        self.replace_child(parent, a, Some(b));

        let a_node = self.node_mut(a);
        a_node.left = inner;
        a_node.parent = Some(b);
        self.node_mut(b).right = Some(a);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(a);
        }

        // `b` is derived from `a`, so `a` goes first.
        self.refresh(a);
        self.refresh(b);
    }

    /// Mirror of `rotate_right`.
    fn rotate_left(&mut self, a: NodeId) {
        let parent = self.node(a).parent;
        let b = self.node(a).right.expect("`RawAvlTree::rotate_left()` - pivot has no right child");
        let inner = self.node(b).left;

        self.replace_child(parent, a, Some(b));

        let a_node = self.node_mut(a);
        a_node.right = inner;
        a_node.parent = Some(b);
        self.node_mut(b).left = Some(a);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(a);
        }

        self.refresh(a);
        self.refresh(b);
    }
}
