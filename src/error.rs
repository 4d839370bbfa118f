//! Error types for tree operations.
//!
//! Every fallible operation on [`AvlTree`](crate::tree::AvlTree) reports a
//! [`TreeError`]. Errors raised by caller-supplied visitors and predicates are
//! not wrapped; they are handed back to the caller unchanged.

use thiserror::Error;

/// Represents the conditions a tree operation can fail with.
///
/// No variant is ever produced after the tree has been modified: an operation
/// either completes its rebalancing unwind or fails before touching the
/// structure.
///
/// # Examples
///
/// ```rust
/// use bbtree::error::TreeError;
/// use bbtree::tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(1, "one").unwrap();
///
/// assert_eq!(tree.insert(1, "uno"), Err(TreeError::DuplicateKey));
/// assert_eq!(tree.get(&2), Err(TreeError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TreeError {
    /// An insert was attempted without a key.
    #[error("invalid value: the key is missing")]
    InvalidOperand,
    /// The key of an insert already compares equal to a stored key.
    #[error("value already exists")]
    DuplicateKey,
    /// The target of a lookup or removal is not in the tree.
    #[error("value not found")]
    NotFound,
    /// A batch insert received something other than a sequence.
    #[error("array expected, found {found}")]
    InvalidBatchInput {
        /// A short description of what was received instead.
        found: &'static str,
    },
}

/// Describes the first structural invariant a tree was found to violate.
///
/// Produced by [`AvlTree::check_invariants`](crate::tree::AvlTree::check_invariants).
/// A tree built only through the public API never reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvariantViolation {
    /// An in-order neighbour pair was not strictly ascending.
    #[error("keys out of order at in-order position {position}")]
    Ordering {
        /// Zero-based in-order index of the second key of the pair.
        position: usize,
    },
    /// A node's subtree heights differ by more than one.
    #[error("balance factor {balance_factor} out of range at in-order position {position}")]
    Balance {
        /// Zero-based in-order index of the node.
        position: usize,
        /// The offending `height(left) - height(right)`.
        balance_factor: isize,
    },
    /// A node's cached height disagrees with its children.
    #[error("cached height {cached} differs from computed height {computed} at in-order position {position}")]
    Height {
        /// Zero-based in-order index of the node.
        position: usize,
        /// The stored height.
        cached: usize,
        /// `1 + max(height(left), height(right))`.
        computed: usize,
    },
}
