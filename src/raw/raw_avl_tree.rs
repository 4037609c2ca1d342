use core::cmp::Ordering;
use core::iter;

use alloc::vec::Vec;

use tracing::{debug, trace};

use super::arena::Arena;
use super::balance::Mode;
use super::handle::NodeId;
use super::node::{Node, SENTINEL_HEIGHT, Side};
use crate::{Error, Key, KeySum};

/// The core AVL tree backing `AvlTree`.
#[derive(Clone)]
pub(crate) struct RawAvlTree<V> {
    /// Arena owning every node; links between nodes are `NodeId`s into it.
    nodes: Arena<Node<V>>,
    /// The root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Node holding the smallest key, for `min` and `select`.
    min: Option<NodeId>,
    /// Node holding the largest key.
    max: Option<NodeId>,
}

impl<V> RawAvlTree<V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            min: None,
            max: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            min: None,
            max: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of nodes, read from the root's augmentation.
    pub(crate) fn len(&self) -> usize {
        let len = self.size(self.root);
        debug_assert_eq!(len, self.nodes.len(), "`RawAvlTree::len()` - root size disagrees with the arena");
        len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn min(&self) -> Option<NodeId> {
        self.min
    }

    pub(crate) fn max(&self) -> Option<NodeId> {
        self.max
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        self.nodes.get_mut(id)
    }

    // ─── Sentinel-aware augmentation reads ──────────────────────────────────

    #[inline]
    pub(crate) fn height(&self, link: Option<NodeId>) -> i32 {
        link.map_or(SENTINEL_HEIGHT, |id| self.nodes.get(id).height)
    }

    #[inline]
    pub(crate) fn size(&self, link: Option<NodeId>) -> usize {
        link.map_or(0, |id| self.nodes.get(id).size)
    }

    #[inline]
    pub(crate) fn key_sum(&self, link: Option<NodeId>) -> KeySum {
        link.map_or(0, |id| self.nodes.get(id).key_sum)
    }

    /// `height(left) - height(right)`.
    pub(crate) fn balance_factor(&self, id: NodeId) -> i32 {
        let node = self.nodes.get(id);
        self.height(node.left) - self.height(node.right)
    }

    /// Height derived from the children, ignoring the stored value.
    pub(super) fn computed_height(&self, id: NodeId) -> i32 {
        let node = self.nodes.get(id);
        self.height(node.left).max(self.height(node.right)) + 1
    }

    /// Recomputes height, size and key sum of `id` from its children.
    pub(super) fn refresh(&mut self, id: NodeId) {
        let node = self.nodes.get(id);
        let height = self.computed_height(id);
        let size = self.size(node.left) + self.size(node.right) + 1;
        let key_sum = KeySum::from(node.key) + self.key_sum(node.left) + self.key_sum(node.right);

        let node = self.nodes.get_mut(id);
        node.height = height;
        node.size = size;
        node.key_sum = key_sum;
    }

    /// Recomputes size and key sum from `from` up to the root. Heights are left
    /// to the balancing walk.
    fn refresh_totals_upward(&mut self, from: NodeId) {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            let size = self.size(node.left) + self.size(node.right) + 1;
            let key_sum = KeySum::from(node.key) + self.key_sum(node.left) + self.key_sum(node.right);

            let node = self.nodes.get_mut(id);
            node.size = size;
            node.key_sum = key_sum;
            cursor = node.parent;
        }
    }

    /// Puts `new` where `old` hung under `parent` (or at the root when `parent`
    /// is `None`) and points `new` back at `parent`.
    pub(super) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.nodes.get(parent).side_of(old);
                self.nodes.get_mut(parent).set_child(side, new);
            }
        }
        if let Some(new) = new {
            self.nodes.get_mut(new).parent = parent;
        }
    }

    // ─── Search ─────────────────────────────────────────────────────────────

    /// Finds the node holding `key`.
    pub(crate) fn find(&self, key: Key) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
        }
        None
    }

    pub(crate) fn search(&self, key: Key) -> Option<&V> {
        self.find(key).map(|id| &self.nodes.get(id).value)
    }

    pub(crate) fn search_mut(&mut self, key: Key) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.nodes.get_mut(id).value)
    }

    // ─── Insertion ──────────────────────────────────────────────────────────

    /// Inserts `key` with `value` and returns the number of rotations used to
    /// rebalance, which is 0, 1 or 2.
    pub(crate) fn insert(&mut self, key: Key, value: V) -> Result<usize, Error> {
        let Some(root) = self.root else {
            let id = self.nodes.alloc(Node::leaf(key, value, None));
            self.root = Some(id);
            self.min = Some(id);
            self.max = Some(id);
            trace!(key, rotations = 0, "inserted key as root");
            return Ok(0);
        };

        // Descend to the sentinel slot the key belongs in.
        let mut parent = root;
        let side = loop {
            let node = self.nodes.get(parent);
            let side = match key.cmp(&node.key) {
                Ordering::Equal => {
                    debug!(key, "insert rejected, key already present");
                    return Err(Error::DuplicateKey(key));
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(next) => parent = next,
                None => break side,
            }
        };

        let id = self.nodes.alloc(Node::leaf(key, value, Some(parent)));
        self.nodes.get_mut(parent).set_child(side, Some(id));
        self.refresh_totals_upward(parent);

        let rotations = self.rebalance(parent, Mode::Insert);
        self.refresh_extremes();
        trace!(key, rotations, "inserted key");
        Ok(rotations)
    }

    // ─── Deletion ───────────────────────────────────────────────────────────

    /// Deletes `key` and returns the number of rotations used to rebalance.
    pub(crate) fn delete(&mut self, key: Key) -> Result<usize, Error> {
        let Some(target) = self.find(key) else {
            debug!(key, "delete rejected, key not present");
            return Err(Error::KeyNotFound(key));
        };
        let (rotations, _) = self.unlink(target);
        trace!(key, rotations, "deleted key");
        Ok(rotations)
    }

    /// Deletes `key` and hands back its value.
    pub(crate) fn remove(&mut self, key: Key) -> Option<V> {
        let target = self.find(key)?;
        let (rotations, value) = self.unlink(target);
        trace!(key, rotations, "removed key");
        Some(value)
    }

    /// Removes the entry stored at `target`, returning the rotation count and
    /// the removed value.
    fn unlink(&mut self, mut target: NodeId) -> (usize, V) {
        // A node with two children trades its key and value with its in-order
        // successor, which has no left child, and the successor's slot goes.
        if self.nodes.get(target).has_two_children() {
            let successor = self.leftmost(self.nodes.get(target).right);
            let successor = successor.expect("`RawAvlTree::unlink()` - right subtree is empty");
            let (node, next) = self.nodes.get_pair_mut(target, successor);
            core::mem::swap(&mut node.key, &mut next.key);
            core::mem::swap(&mut node.value, &mut next.value);
            target = successor;
        }

        let removed = self.nodes.take(target);
        let child = removed.only_child();
        self.replace_child(removed.parent, target, child);

        // Removing the root leaves its only child already balanced.
        let rotations = match removed.parent {
            None => 0,
            Some(parent) => {
                self.refresh_totals_upward(parent);
                self.rebalance(parent, Mode::Delete)
            }
        };

        self.refresh_extremes();
        (rotations, removed.value)
    }

    // ─── Extremal tracking ──────────────────────────────────────────────────

    fn leftmost(&self, from: Option<NodeId>) -> Option<NodeId> {
        let mut current = from?;
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        Some(current)
    }

    fn rightmost(&self, from: Option<NodeId>) -> Option<NodeId> {
        let mut current = from?;
        while let Some(right) = self.nodes.get(current).right {
            current = right;
        }
        Some(current)
    }

    fn refresh_extremes(&mut self) {
        self.min = self.leftmost(self.root);
        self.max = self.rightmost(self.root);
    }

    // ─── Order statistics ───────────────────────────────────────────────────

    /// Returns the node at one-based `rank`.
    pub(crate) fn select(&self, rank: usize) -> Option<NodeId> {
        if rank == 0 || rank > self.len() {
            return None;
        }

        // Every ancestor of the minimum holds a prefix of the sorted keys, so
        // climb until that prefix is long enough.
        let mut current = self.min?;
        while self.nodes.get(current).size < rank {
            current = self.nodes.get(current).parent?;
        }

        let mut rank = rank;
        loop {
            let node = self.nodes.get(current);
            let own = self.size(node.left) + 1;
            match rank.cmp(&own) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = node.left?,
                Ordering::Greater => {
                    rank -= own;
                    current = node.right?;
                }
            }
        }
    }

    /// Returns the one-based rank of `key`, if present.
    pub(crate) fn rank_of(&self, key: Key) -> Option<usize> {
        let mut before = 0;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(before + self.size(node.left) + 1),
                Ordering::Less => cursor = node.left,
                Ordering::Greater => {
                    before += self.size(node.left) + 1;
                    cursor = node.right;
                }
            }
        }
        None
    }

    /// Sum of every key `<= threshold`.
    pub(crate) fn less(&self, threshold: Key) -> KeySum {
        let mut sum = self.key_sum(self.root);
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            if node.key == threshold {
                // The node itself stays counted, everything to its right goes.
                sum -= self.key_sum(node.right);
                break;
            }
            if threshold > node.key {
                cursor = node.right;
            } else {
                sum -= self.key_sum(node.right) + KeySum::from(node.key);
                cursor = node.left;
            }
        }

        sum
    }

    // ─── Export ─────────────────────────────────────────────────────────────

    pub(crate) fn keys_to_array(&self) -> Vec<Key> {
        self.collect_in_order(|node| node.key)
    }

    pub(crate) fn values_to_array(&self) -> Vec<&V> {
        self.collect_in_order(|node| &node.value)
    }

    fn collect_in_order<'a, T>(&'a self, project: impl Fn(&'a Node<V>) -> T) -> Vec<T> {
        let mut slots: Vec<Option<T>> = iter::repeat_with(|| None).take(self.len()).collect();
        self.place_in_order(self.root, 0, &mut slots, &project);
        slots.into_iter().flatten().collect()
    }

    /// Writes the subtree at `link` into `out`, starting at `offset`. Each node
    /// lands at `offset + size(left)`.
    fn place_in_order<'a, T>(
        &'a self,
        link: Option<NodeId>,
        offset: usize,
        out: &mut [Option<T>],
        project: &impl Fn(&'a Node<V>) -> T,
    ) {
        let Some(id) = link else {
            return;
        };
        let node = self.nodes.get(id);
        let index = offset + self.size(node.left);

        self.place_in_order(node.left, offset, out, project);
        out[index] = Some(project(node));
        self.place_in_order(node.right, index + 1, out, project);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<V> RawAvlTree<V> {
        /// Checks every structural invariant. Panics with a list of violations.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            if let Some(root) = self.root {
                if self.nodes.get(root).parent.is_some() {
                    errors.push(String::from("root has a parent"));
                }
                self.validate_node(root, None, None, &mut errors);
            }

            if self.nodes.len() != self.len() {
                errors.push(format!("arena holds {} nodes, root size is {}", self.nodes.len(), self.len()));
            }
            if self.min != self.leftmost(self.root) {
                errors.push(format!("min {:?} is not the leftmost node", self.min));
            }
            if self.max != self.rightmost(self.root) {
                errors.push(format!("max {:?} is not the rightmost node", self.max));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns (height, size, key_sum) recomputed from scratch.
        fn validate_node(
            &self,
            id: NodeId,
            lower: Option<Key>,
            upper: Option<Key>,
            errors: &mut Vec<String>,
        ) -> (i32, usize, KeySum) {
            let node = self.nodes.get(id);

            if lower.is_some_and(|lower| node.key <= lower) || upper.is_some_and(|upper| node.key >= upper) {
                errors.push(format!("key {} is outside ({lower:?}, {upper:?})", node.key));
            }

            let (lh, ls, lsum) = self.validate_child(id, node.left, lower, Some(node.key), errors);
            let (rh, rs, rsum) = self.validate_child(id, node.right, Some(node.key), upper, errors);

            let height = lh.max(rh) + 1;
            let size = ls + rs + 1;
            let key_sum = lsum + rsum + KeySum::from(node.key);

            if (lh - rh).abs() > 1 {
                errors.push(format!("node {} is out of balance ({lh} vs {rh})", node.key));
            }
            if node.height != height {
                errors.push(format!("node {} stores height {}, expected {height}", node.key, node.height));
            }
            if node.size != size {
                errors.push(format!("node {} stores size {}, expected {size}", node.key, node.size));
            }
            if node.key_sum != key_sum {
                errors.push(format!("node {} stores key sum {}, expected {key_sum}", node.key, node.key_sum));
            }

            (height, size, key_sum)
        }

        fn validate_child(
            &self,
            parent: NodeId,
            child: Option<NodeId>,
            lower: Option<Key>,
            upper: Option<Key>,
            errors: &mut Vec<String>,
        ) -> (i32, usize, KeySum) {
            let Some(child) = child else {
                return (SENTINEL_HEIGHT, 0, 0);
            };
            if self.nodes.get(child).parent != Some(parent) {
                errors.push(format!("node {} has a stale parent link", self.nodes.get(child).key));
            }
            self.validate_node(child, lower, upper, errors)
        }
    }

    fn tree_from(keys: &[Key]) -> RawAvlTree<Key> {
        let mut tree = RawAvlTree::new();
        for &key in keys {
            tree.insert(key, key.wrapping_mul(10)).expect("keys are distinct");
            tree.validate_invariants();
        }
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i64),
        Delete(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (-500i64..500).prop_map(Op::Insert),
            2 => (-500i64..500).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawAvlTree<i64> = RawAvlTree::new();
            let mut model: BTreeMap<i64, i64> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        let result = tree.insert(key, -key);
                        if model.contains_key(&key) {
                            prop_assert_eq!(result, Err(Error::DuplicateKey(key)));
                        } else {
                            model.insert(key, -key);
                            prop_assert!(matches!(result, Ok(0..=2)), "insert({}) -> {:?}", key, result);
                        }
                    }
                    Op::Delete(key) => {
                        let result = tree.delete(key);
                        if model.remove(&key).is_some() {
                            prop_assert!(result.is_ok(), "delete({}) -> {:?}", key, result);
                        } else {
                            prop_assert_eq!(result, Err(Error::KeyNotFound(key)));
                        }
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.keys_to_array(), model.keys().copied().collect::<Vec<_>>());
            }
        }

        #[test]
        fn select_matches_sorted_values(keys in prop::collection::btree_set(-1000i64..1000, 1..200)) {
            let keys: Vec<i64> = keys.into_iter().collect();
            let mut tree = RawAvlTree::new();
            // Descending evens, then ascending odds, so the shape is not a pure sequential build.
            let evens = keys.iter().step_by(2).rev();
            let odds = keys.iter().skip(1).step_by(2);
            for &key in evens.chain(odds) {
                tree.insert(key, key * 3).expect("keys are distinct");
            }

            let values = tree.values_to_array();
            for rank in 1..=keys.len() {
                let id = tree.select(rank).expect("rank is in range");
                prop_assert_eq!(&tree.node(id).value, values[rank - 1]);
                prop_assert_eq!(tree.rank_of(tree.node(id).key), Some(rank));
            }
            prop_assert!(tree.select(0).is_none());
            prop_assert!(tree.select(keys.len() + 1).is_none());
        }

        #[test]
        fn less_matches_filtered_sum(
            keys in prop::collection::btree_set(-1000i64..1000, 0..200),
            thresholds in prop::collection::vec(-1200i64..1200, 50),
        ) {
            let mut tree = RawAvlTree::new();
            for &key in &keys {
                tree.insert(key, ()).expect("keys are distinct");
            }

            for threshold in thresholds {
                let expected: KeySum = keys.iter().filter(|&&k| k <= threshold).map(|&k| KeySum::from(k)).sum();
                prop_assert_eq!(tree.less(threshold), expected, "less({})", threshold);
            }
        }
    }

    #[test]
    fn empty_tree_queries() {
        let tree: RawAvlTree<i64> = RawAvlTree::new();
        tree.validate_invariants();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.search(0).is_none());
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
        assert!(tree.select(1).is_none());
        assert_eq!(tree.less(0), 0);
        assert!(tree.keys_to_array().is_empty());
        assert!(tree.values_to_array().is_empty());
    }

    #[test]
    fn delete_on_empty_tree_is_rejected() {
        let mut tree: RawAvlTree<i64> = RawAvlTree::new();
        assert_eq!(tree.delete(3), Err(Error::KeyNotFound(3)));
        assert!(tree.remove(3).is_none());
    }

    #[test]
    fn deleting_lone_root_empties_tree() {
        let mut tree = tree_from(&[42]);
        assert_eq!(tree.delete(42), Ok(0));
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
    }

    #[test]
    fn deleting_root_with_one_child_promotes_it() {
        let mut tree = tree_from(&[10, 20]);
        assert_eq!(tree.delete(10), Ok(0));
        tree.validate_invariants();

        let root = tree.root().expect("one key remains");
        assert_eq!(tree.node(root).key, 20);
        assert_eq!(tree.node(root).parent, None);
        assert_eq!(tree.min(), Some(root));
        assert_eq!(tree.max(), Some(root));
    }

    #[test]
    fn two_child_delete_moves_successor_entry() {
        let mut tree = tree_from(&[5, 3, 8, 1, 4, 7, 9]);
        let root = tree.root().expect("non-empty");

        assert_eq!(tree.remove(5), Some(50));
        tree.validate_invariants();

        // The root slot survives and now carries the successor's entry.
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.node(root).key, 7);
        assert_eq!(tree.node(root).value, 70);
        assert_eq!(tree.keys_to_array(), vec![1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn scenario_from_seven_keys() {
        let mut tree = tree_from(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.keys_to_array(), vec![1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(tree.min().map(|id| tree.node(id).value), Some(10));
        assert_eq!(tree.max().map(|id| tree.node(id).value), Some(90));
        assert_eq!(tree.less(6), 13);
        assert_eq!(tree.select(4).map(|id| tree.node(id).value), Some(50));

        assert_eq!(tree.insert(5, 0), Err(Error::DuplicateKey(5)));
        assert_eq!(tree.search(5), Some(&50));

        assert!(tree.delete(8).is_ok());
        tree.validate_invariants();
        assert_eq!(tree.keys_to_array(), vec![1, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn less_on_exact_match_drops_only_right_subtree() {
        let tree = tree_from(&[5, 3, 8, 1, 4, 7, 9]);

        // Root hit: left subtree and root stay.
        assert_eq!(tree.less(5), 13);
        // Interior hit after a left turn and a right turn.
        assert_eq!(tree.less(4), 8);
        // Leaf hit on the right spine.
        assert_eq!(tree.less(9), 37);
        // Hit on a node whose right subtree is non-empty.
        assert_eq!(tree.less(8), 28);
        assert_eq!(tree.less(3), 4);
    }

    #[test]
    fn less_outside_key_range() {
        let tree = tree_from(&[-4, 2, 11]);
        assert_eq!(tree.less(-5), 0);
        assert_eq!(tree.less(-4), -4);
        assert_eq!(tree.less(0), -4);
        assert_eq!(tree.less(100), 9);
        assert_eq!(tree.less(i64::MIN), 0);
        assert_eq!(tree.less(i64::MAX), 9);
    }

    #[test]
    fn key_sum_does_not_overflow_at_extremes() {
        let tree = tree_from(&[i64::MAX, i64::MAX - 1, i64::MAX - 2]);
        let expected = 3 * KeySum::from(i64::MAX) - 3;
        assert_eq!(tree.less(i64::MAX), expected);
    }

    #[test]
    fn select_climbs_from_minimum() {
        let tree = tree_from(&(1..=31).collect::<Vec<_>>());
        for rank in 1..=31 {
            let id = tree.select(rank).expect("rank is in range");
            assert_eq!(tree.node(id).key, rank as i64);
        }
    }

    #[test]
    fn insert_then_delete_restores_contents() {
        let mut tree = tree_from(&[50, 20, 80, 10, 30, 70, 90, 25]);
        let keys = tree.keys_to_array();
        let values: Vec<i64> = tree.values_to_array().into_iter().copied().collect();

        for probe in [0, 15, 27, 55, 100] {
            tree.insert(probe, probe).expect("probe is absent");
            tree.validate_invariants();
            tree.delete(probe).expect("probe was just inserted");
            tree.validate_invariants();

            assert_eq!(tree.keys_to_array(), keys);
            assert_eq!(tree.values_to_array().into_iter().copied().collect::<Vec<_>>(), values);
        }
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut tree = tree_from(&[1, 2, 3, 4]);
        let capacity = tree.capacity();
        for _ in 0..10 {
            tree.delete(2).expect("present");
            tree.insert(2, 20).expect("absent");
        }
        tree.validate_invariants();
        assert_eq!(tree.capacity(), capacity);
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = tree_from(&[3, 1, 2]);
        tree.clear();
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert!(tree.min().is_none());
        assert_eq!(tree.insert(7, 70), Ok(0));
        tree.validate_invariants();
    }
}
