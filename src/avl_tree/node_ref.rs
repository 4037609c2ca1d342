use core::fmt;
use core::ptr;

use crate::raw::{Node, NodeId, RawAvlTree};
use crate::{Key, KeySum};

/// A read-only handle on one node of an [`AvlTree`](crate::AvlTree).
///
/// Obtained from [`AvlTree::root`](crate::AvlTree::root) and navigated with
/// [`left`](NodeRef::left), [`right`](NodeRef::right) and
/// [`parent`](NodeRef::parent). An absent child (the sentinel) is `None`.
///
/// # Examples
///
/// ```
/// use rank_avl::AvlTree;
///
/// let tree = AvlTree::from([(1, ()), (2, ()), (3, ()), (4, ())]);
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.balance_factor(), -1);
///
/// let right = root.right().unwrap();
/// assert_eq!(right.parent(), Some(root));
/// assert_eq!(right.size(), 2);
/// assert_eq!(right.key_sum(), 7);
/// ```
pub struct NodeRef<'a, V> {
    tree: &'a RawAvlTree<V>,
    id: NodeId,
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(tree: &'a RawAvlTree<V>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node<V> {
        self.tree.node(self.id)
    }

    fn link(&self, link: Option<NodeId>) -> Option<NodeRef<'a, V>> {
        link.map(|id| NodeRef::new(self.tree, id))
    }

    /// The key held by this node.
    #[must_use]
    pub fn key(&self) -> Key {
        self.node().key
    }

    /// The value stored under [`key`](NodeRef::key).
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// Edges on the longest path down to a leaf; a leaf has height 0.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.node().height.unsigned_abs()
    }

    /// Number of nodes in this subtree, this one included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.node().size
    }

    /// Sum of the keys in this subtree, this one included.
    #[must_use]
    pub fn key_sum(&self) -> KeySum {
        self.node().key_sum
    }

    /// `height(left) - height(right)`, with -1 as the height of an absent child.
    #[must_use]
    pub fn balance_factor(&self) -> i32 {
        self.tree.balance_factor(self.id)
    }

    /// Root of the left subtree, whose keys are all smaller.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().left)
    }

    /// Root of the right subtree, whose keys are all larger.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().right)
    }

    /// `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        self.link(self.node().parent)
    }

    /// `true` when both children are absent.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<V> PartialEq for NodeRef<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<V> Eq for NodeRef<'_, V> {}

impl<V> fmt::Debug for NodeRef<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("key", &node.key)
            .field("height", &node.height)
            .field("size", &node.size)
            .field("key_sum", &node.key_sum)
            .finish()
    }
}
