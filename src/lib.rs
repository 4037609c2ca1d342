//! An AVL tree over integer keys with order-statistic and prefix-sum queries.
//!
//! [`AvlTree`] maps distinct `i64` keys to arbitrary values and keeps itself
//! height-balanced, so every operation below is O(log n) in the worst case:
//!
//! - [`insert`](AvlTree::insert) / [`delete`](AvlTree::delete) - report how many
//!   rotations rebalancing took
//! - [`search`](AvlTree::search) - exact-match lookup
//! - [`select`](AvlTree::select) - the value with the i-th smallest key (one-based)
//! - [`less`](AvlTree::less) - the sum of every key `<=` a threshold
//! - [`min`](AvlTree::min) / [`max`](AvlTree::max) - O(1) from cached extremes
//!
//! # Example
//!
//! ```
//! use rank_avl::{AvlTree, Error, Rank};
//!
//! let mut tree = AvlTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key.to_string()).unwrap();
//! }
//!
//! assert_eq!(tree.keys_to_array(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.min().map(String::as_str), Some("1"));
//! assert_eq!(tree.less(6), 1 + 3 + 4 + 5);
//! assert_eq!(tree.select(4).map(String::as_str), Some("5"));
//! assert_eq!(tree[Rank(1)], "1");
//!
//! // Keys are unique; a second insert is refused and changes nothing.
//! assert_eq!(tree.insert(5, "x".to_string()), Err(Error::DuplicateKey(5)));
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by index; the parent link is
//! a plain index as well, so upward walks are O(1) per step without shared
//! ownership. An absent child is the sentinel, with height -1, size 0 and key
//! sum 0. Every node caches its height, subtree size and subtree key sum.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod avl_tree;

pub use avl_tree::{AvlTree, NodeRef};
pub use error::Error;
pub use order_statistic::Rank;

/// Key type stored in the tree.
pub type Key = i64;

/// Type of subtree key sums and of [`AvlTree::less`]. Wide enough that no
/// tree of `i64` keys can overflow it.
pub type KeySum = i128;
