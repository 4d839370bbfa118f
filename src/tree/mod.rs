//! Height-balanced binary search tree.
//!
//! This module provides [`AvlTree`], an in-memory ordered key/value container
//! kept balanced by AVL rotations.
//!
//! # Overview
//!
//! - O(log N) get, insert and remove
//! - In-order, pre-order and post-order traversal with fallible visitors
//! - Predicate scans over every entry
//! - Batch insertion that reports rejected items instead of stopping
//!
//! # Examples
//!
//! ```rust
//! use bbtree::tree::AvlTree;
//!
//! let mut tree: AvlTree<i32> = AvlTree::new();
//! let rejections = tree.bulk_insert_keys([Some(0), Some(1), Some(2), None, Some(2)]);
//!
//! assert_eq!(tree.count(), 3);
//! assert_eq!(rejections.len(), 2);
//!
//! tree.remove(&1).unwrap();
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![0, 2]);
//! ```
//!
//! # Internal Structure
//!
//! Every node owns its two children and caches the height of its subtree.
//! After an insert or remove the walk unwinds toward the root, refreshing the
//! cached heights and rotating any node whose children's heights differ by
//! more than one. The tree therefore satisfies, after every operation:
//!
//! 1. In-order keys are strictly ascending under the comparator
//! 2. `|height(left) - height(right)| <= 1` at every node
//! 3. `height(node) = 1 + max(height(left), height(right))`

mod avl_tree;
mod iter;
mod node;

pub use avl_tree::{AvlTree, Rejection};
pub use iter::Iter;
