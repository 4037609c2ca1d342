/// A one-based rank into the ascending key order of a tree.
///
/// `Rank(1)` is the smallest key. Indexing panics on `Rank(0)` or a rank past
/// the end; use [`AvlTree::select`](crate::AvlTree::select) for a checked lookup.
///
/// # Examples
///
/// ```
/// use rank_avl::{AvlTree, Rank};
///
/// let mut tree = AvlTree::new();
/// tree.insert(20, "b").unwrap();
/// tree.insert(10, "a").unwrap();
///
/// assert_eq!(tree[Rank(1)], "a");
/// assert_eq!(tree[Rank(2)], "b");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
