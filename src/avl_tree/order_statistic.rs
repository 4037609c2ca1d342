use core::ops::Index;

use super::AvlTree;
use crate::{Key, KeySum, Rank};

impl<V> AvlTree<V> {
    /// Returns the value whose key has one-based `rank` in ascending order.
    ///
    /// Returns `None` if `rank` is 0 or greater than [`len`](AvlTree::len).
    ///
    /// The search starts at the cached minimum and climbs to the first
    /// ancestor whose subtree is big enough, so small ranks stay cheap.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree = AvlTree::from([(30, "c"), (10, "a"), (20, "b")]);
    /// assert_eq!(tree.select(1), Some(&"a"));
    /// assert_eq!(tree.select(3), Some(&"c"));
    /// assert_eq!(tree.select(0), None);
    /// assert_eq!(tree.select(4), None);
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&V> {
        self.raw.select(rank).map(|id| &self.raw.node(id).value)
    }

    /// Like [`select`](AvlTree::select), but also returns the key.
    #[must_use]
    pub fn select_key_value(&self, rank: usize) -> Option<(Key, &V)> {
        self.raw.select(rank).map(|id| self.entry_at(id))
    }

    /// Returns the one-based rank of `key`, or `None` if it is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree = AvlTree::from([(30, ()), (10, ()), (20, ())]);
    /// assert_eq!(tree.rank_of(20), Some(2));
    /// assert_eq!(tree.rank_of(25), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: Key) -> Option<usize> {
        self.raw.rank_of(key)
    }

    /// Returns the sum of every key less than or equal to `threshold`.
    ///
    /// `threshold` does not have to be present. An empty tree sums to 0.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree = AvlTree::from([(5, ()), (3, ()), (8, ()), (1, ()), (4, ()), (7, ()), (9, ())]);
    /// assert_eq!(tree.less(6), 13);
    /// assert_eq!(tree.less(5), 13);
    /// assert_eq!(tree.less(0), 0);
    /// assert_eq!(tree.less(100), 37);
    /// ```
    #[must_use]
    pub fn less(&self, threshold: Key) -> KeySum {
        self.raw.less(threshold)
    }
}

/// Indexes into the tree by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or past the end.
///
/// # Examples
///
/// ```
/// use rank_avl::{AvlTree, Rank};
///
/// let tree = AvlTree::from([(2, "b"), (1, "a")]);
/// assert_eq!(tree[Rank(2)], "b");
/// ```
impl<V> Index<Rank> for AvlTree<V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).expect("rank out of bounds")
    }
}
