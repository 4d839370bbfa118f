//! # bbtree
//!
//! An in-memory ordered key/value container backed by a height-balanced
//! (AVL) binary search tree.
//!
//! ## Overview
//!
//! - **Tree**: [`AvlTree`](tree::AvlTree) with lookup, insertion, deletion,
//!   predicate scans and pre/in/post-order traversal
//! - **Ordering**: natural order by default, or any [`Comparator`](comparator::Comparator)
//! - **Policy**: duplicates and misses either fail or resolve quietly, chosen
//!   once per tree through [`TreeConfig`](config::TreeConfig)
//! - **Deferred results**: [`DeferredTree`](deferred::DeferredTree) returns
//!   every outcome as an already-settled future
//!
//! ## Feature Flags
//!
//! - `deferred` (default): the settled-future adapter
//! - `serde`: serialization of trees and configuration, and JSON batch input
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use bbtree::prelude::*;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(2, "two").unwrap();
//! tree.insert(1, "one").unwrap();
//!
//! assert_eq!(tree.get(&1), Ok(Some(&"one")));
//! assert_eq!(tree.insert(1, "uno"), Err(TreeError::DuplicateKey));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bbtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{Comparator, NaturalOrder, by_key};
    pub use crate::config::{Policy, TreeConfig};
    pub use crate::error::{InvariantViolation, TreeError};
    pub use crate::tree::{AvlTree, Iter, Rejection};

    #[cfg(feature = "deferred")]
    pub use crate::deferred::{Deferred, DeferredTree};
}

pub mod comparator;
pub mod config;
pub mod error;
pub mod tree;

#[cfg(feature = "deferred")]
pub mod deferred;
