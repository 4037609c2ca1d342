use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::raw::{NodeId, RawAvlTree};
use crate::{Error, Key};

mod capacity;
mod node_ref;
mod order_statistic;

pub use crate::Rank;
pub use node_ref::NodeRef;

/// Inline depth of the traversal stack. An AVL tree is at most about
/// 1.44 log2(n) tall, so this covers any tree that fits in the arena.
/// `smallvec` only backs certain array lengths inline; 64 is one of them.
const STACK_DEPTH: usize = 64;

/// An ordered map from `i64` keys to values, kept balanced as an AVL tree.
///
/// Besides exact lookup the tree answers two augmented queries in O(log n):
/// [`select`](AvlTree::select) finds the value at a given rank and
/// [`less`](AvlTree::less) sums every key up to a threshold. Both read cached
/// subtree sizes and key sums instead of visiting whole subtrees.
///
/// Mutations report how much rebalancing they needed: [`insert`](AvlTree::insert)
/// and [`delete`](AvlTree::delete) return the number of single rotations
/// performed (a double rotation counts as two).
///
/// # Examples
///
/// ```
/// use rank_avl::AvlTree;
///
/// let mut tree = AvlTree::new();
/// assert_eq!(tree.insert(1, "one"), Ok(0));
/// assert_eq!(tree.insert(2, "two"), Ok(0));
/// // The third ascending key unbalances the root and costs one rotation.
/// assert_eq!(tree.insert(3, "three"), Ok(1));
///
/// assert_eq!(tree.search(2), Some(&"two"));
/// assert_eq!(tree.root().map(|root| root.key()), Some(2));
///
/// assert!(tree.delete(2).is_ok());
/// assert_eq!(tree.keys_to_array(), [1, 3]);
/// ```
pub struct AvlTree<V> {
    raw: RawAvlTree<V>,
}

/// An iterator over the entries of an `AvlTree`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`AvlTree`].
///
/// [`iter`]: AvlTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    tree: &'a RawAvlTree<V>,
    // Nodes whose left subtree is done but which are not yet yielded.
    stack: SmallVec<[NodeId; STACK_DEPTH]>,
    remaining: usize,
}

/// An iterator over the keys of an `AvlTree`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`AvlTree`].
///
/// [`keys`]: AvlTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

/// An iterator over the values of an `AvlTree`, in ascending key order.
///
/// This `struct` is created by the [`values`] method on [`AvlTree`].
///
/// [`values`]: AvlTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<V> AvlTree<V> {
    /// Makes a new, empty `AvlTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, "a").unwrap();
    /// ```
    #[must_use]
    pub const fn new() -> AvlTree<V> {
        AvlTree { raw: RawAvlTree::new() }
    }

    /// Returns `true` if the tree holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1, ()).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of entries, read from the root's cached subtree size.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the value stored under `key`.
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
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, "a").unwrap();
    /// assert_eq!(tree.search(1), Some(&"a"));
    /// assert_eq!(tree.search(2), None);
    /// ```
    #[must_use]
    pub fn search(&self, key: Key) -> Option<&V> {
        self.raw.search(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, 10).unwrap();
    /// if let Some(value) = tree.search_mut(1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(tree.search(1), Some(&15));
    /// ```
    pub fn search_mut(&mut self, key: Key) -> Option<&mut V> {
        self.raw.search_mut(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: Key) -> bool {
        self.raw.find(key).is_some()
    }

    /// Inserts `value` under `key` and rebalances.
    ///
    /// Returns the number of rotations the rebalancing performed: 0, 1, or 2
    /// for a double rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if `key` is already present. The tree is
    /// not modified and `value` is dropped.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(3, "c"), Ok(0));
    /// assert_eq!(tree.insert(1, "a"), Ok(0));
    /// // 3 -> 1 -> 2 zig-zags and needs a double rotation.
    /// assert_eq!(tree.insert(2, "b"), Ok(2));
    /// assert_eq!(tree.insert(2, "again"), Err(Error::DuplicateKey(2)));
    /// ```
    pub fn insert(&mut self, key: Key, value: V) -> Result<usize, Error> {
        self.raw.insert(key, value)
    }

    /// Removes `key` and rebalances.
    ///
    /// Returns the number of rotations the rebalancing performed. Unlike an
    /// insert, a delete can need rotations at several ancestors, up to
    /// O(log n) in total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::{AvlTree, Error};
    ///
    /// let mut tree: AvlTree<()> = [5, 3, 8].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(tree.delete(8), Ok(0));
    /// assert_eq!(tree.delete(8), Err(Error::KeyNotFound(8)));
    /// ```
    pub fn delete(&mut self, key: Key) -> Result<usize, Error> {
        self.raw.delete(key)
    }

    /// Removes `key` and returns its value, if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, "a").unwrap();
    /// assert_eq!(tree.remove(1), Some("a"));
    /// assert_eq!(tree.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: Key) -> Option<V> {
        self.raw.remove(key)
    }

    /// Returns the value with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.min(), None);
    /// tree.insert(2, "b").unwrap();
    /// tree.insert(1, "a").unwrap();
    /// assert_eq!(tree.min(), Some(&"a"));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&V> {
        self.raw.min().map(|id| &self.raw.node(id).value)
    }

    /// Returns the value with the largest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn max(&self) -> Option<&V> {
        self.raw.max().map(|id| &self.raw.node(id).value)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(Key, &V)> {
        self.raw.min().map(|id| self.entry_at(id))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(Key, &V)> {
        self.raw.max().map(|id| self.entry_at(id))
    }

    /// Returns every key in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree: AvlTree<()> = [9, -1, 4].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(tree.keys_to_array(), [-1, 4, 9]);
    /// ```
    #[must_use]
    pub fn keys_to_array(&self) -> Vec<Key> {
        self.raw.keys_to_array()
    }

    /// Returns every value, ordered by ascending key.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn values_to_array(&self) -> Vec<&V> {
        self.raw.values_to_array()
    }

    /// Returns a read-only handle on the root node, for inspecting the shape
    /// and augmentation of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree: AvlTree<()> = [2, 1, 3].into_iter().map(|k| (k, ())).collect();
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), 2);
    /// assert_eq!(root.size(), 3);
    /// assert_eq!(root.key_sum(), 6);
    /// assert_eq!(root.left().map(|n| n.key()), Some(1));
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, V>> {
        self.raw.root().map(|id| NodeRef::new(&self.raw, id))
    }

    /// Gets an iterator over the entries, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_avl::AvlTree;
    ///
    /// let tree: AvlTree<&str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(1, &"a"), (2, &"b"), (3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.raw)
    }

    /// Gets an iterator over the keys, in ascending order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values, in ascending key order.
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    fn entry_at(&self, id: NodeId) -> (Key, &V) {
        let node = self.raw.node(id);
        (node.key, &node.value)
    }
}

impl<V: Clone> Clone for AvlTree<V> {
    fn clone(&self) -> Self {
        AvlTree { raw: self.raw.clone() }
    }
}

impl<V: PartialEq> PartialEq for AvlTree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<V: Eq> Eq for AvlTree<V> {}

impl<V: fmt::Debug> fmt::Debug for AvlTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        AvlTree::new()
    }
}

impl<V> FromIterator<(Key, V)> for AvlTree<V> {
    /// Builds a tree from entries. When a key repeats, the first value wins.
    fn from_iter<T: IntoIterator<Item = (Key, V)>>(iter: T) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<V> Extend<(Key, V)> for AvlTree<V> {
    /// Inserts every entry whose key is not present yet.
    fn extend<T: IntoIterator<Item = (Key, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            // A repeated key keeps the value already stored.
            let _ = self.insert(key, value);
        }
    }
}

impl<V, const N: usize> From<[(Key, V); N]> for AvlTree<V> {
    fn from(arr: [(Key, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, V> IntoIterator for &'a AvlTree<V> {
    type Item = (Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> Iter<'a, V> {
    fn new(tree: &'a RawAvlTree<V>) -> Self {
        let mut iter = Iter {
            tree,
            stack: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.descend_left(tree.root());
        iter
    }

    fn descend_left(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.tree.node(id).left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(id);
        self.descend_left(node.right);
        self.remaining -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<V> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

impl<V> fmt::Debug for Keys<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining).finish()
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.remaining).finish()
    }
}
