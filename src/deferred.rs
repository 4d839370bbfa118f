//! Settled-future call convention.
//!
//! [`DeferredTree`] wraps an [`AvlTree`] and returns every outcome as a
//! [`Deferred`]: a future that is already complete when the call returns.
//! Failures become failed futures and successes can be chained with the
//! combinators of [`futures::TryFutureExt`]. Nothing runs in the background
//! and no operation is reordered; awaiting a `Deferred` never suspends.
//!
//! # Examples
//!
//! ```rust
//! use bbtree::deferred::DeferredTree;
//! use bbtree::error::TreeError;
//! use futures::executor::block_on;
//!
//! let mut tree: DeferredTree<i32> = DeferredTree::new();
//!
//! block_on(async {
//!     tree.insert(1).await?;
//!     tree.insert(2).await?;
//!     assert_eq!(tree.count().await, Ok(2));
//!     assert_eq!(tree.insert(1).await, Err(TreeError::DuplicateKey));
//!     Ok::<_, TreeError>(())
//! })
//! .unwrap();
//! ```

use futures::future::{Ready, ready};

use crate::comparator::{Comparator, NaturalOrder};
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::{AvlTree, Rejection};

/// The already-settled outcome of a [`DeferredTree`] call.
pub type Deferred<T, E = TreeError> = Ready<Result<T, E>>;

/// An [`AvlTree`] whose operations return settled futures.
///
/// Values handed out of the tree are cloned so that the returned futures do
/// not borrow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredTree<K, V = (), C = NaturalOrder> {
    tree: AvlTree<K, V, C>,
}

impl<K, V> DeferredTree<K, V, NaturalOrder> {
    /// Creates an empty, naturally ordered tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Creates an empty, naturally ordered tree with the given configuration.
    #[must_use]
    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            tree: AvlTree::with_config(config),
        }
    }
}

impl<K, V> Default for DeferredTree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> From<AvlTree<K, V, C>> for DeferredTree<K, V, C> {
    fn from(tree: AvlTree<K, V, C>) -> Self {
        Self { tree }
    }
}

impl<K, V, C: Comparator<K>> DeferredTree<K, V, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: AvlTree::with_comparator(comparator),
        }
    }

    /// Returns the wrapped tree.
    #[must_use]
    pub const fn as_tree(&self) -> &AvlTree<K, V, C> {
        &self.tree
    }

    /// Unwraps the tree.
    #[must_use]
    pub fn into_inner(self) -> AvlTree<K, V, C> {
        self.tree
    }

    /// Deferred [`AvlTree::insert`]; succeeds with whether the entry was added.
    pub fn insert_entry(&mut self, key: K, value: V) -> Deferred<bool> {
        ready(self.tree.insert(key, value))
    }

    /// Deferred [`AvlTree::bulk_insert`]; always succeeds with the rejections.
    pub fn bulk_insert<I>(&mut self, items: I) -> Deferred<Vec<Rejection<Option<(K, V)>>>>
    where
        I: IntoIterator<Item = Option<(K, V)>>,
    {
        ready(Ok(self.tree.bulk_insert(items)))
    }

    /// Deferred [`AvlTree::get`], resolving to a clone of the value.
    pub fn get(&self, key: &K) -> Deferred<Option<V>>
    where
        V: Clone,
    {
        ready(self.tree.get(key).map(Option::<&V>::cloned))
    }

    /// Deferred [`AvlTree::remove`], resolving to the removed entry.
    pub fn remove(&mut self, key: &K) -> Deferred<Option<(K, V)>> {
        ready(self.tree.remove(key))
    }

    /// Deferred [`AvlTree::count`].
    pub fn count(&self) -> Deferred<usize> {
        ready(Ok(self.tree.count()))
    }

    /// Deferred [`AvlTree::try_find`], resolving to clones of the matches.
    pub fn find<E, P>(&self, predicate: P) -> Deferred<Vec<(K, V)>, E>
    where
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> Result<bool, E>,
    {
        ready(self.tree.try_find(predicate).map(|found| {
            found
                .into_iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        }))
    }

    /// Deferred [`AvlTree::traverse_pre_order`].
    pub fn traverse_pre_order<E, F>(&self, visitor: F) -> Deferred<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        ready(self.tree.traverse_pre_order(visitor))
    }

    /// Deferred [`AvlTree::traverse_in_order`].
    pub fn traverse_in_order<E, F>(&self, visitor: F) -> Deferred<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        ready(self.tree.traverse_in_order(visitor))
    }

    /// Deferred [`AvlTree::traverse_post_order`].
    pub fn traverse_post_order<E, F>(&self, visitor: F) -> Deferred<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        ready(self.tree.traverse_post_order(visitor))
    }
}

impl<K, C: Comparator<K>> DeferredTree<K, (), C> {
    /// Deferred [`AvlTree::insert_entry`] for ordered sets; a `None` key
    /// fails with [`TreeError::InvalidOperand`].
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Deferred<bool> {
        ready(self.tree.insert_entry(key.into().map(|key| (key, ()))))
    }

    /// Deferred [`AvlTree::bulk_insert_keys`].
    pub fn bulk_insert_keys<I>(&mut self, keys: I) -> Deferred<Vec<Rejection<Option<K>>>>
    where
        I: IntoIterator<Item = Option<K>>,
    {
        ready(Ok(self.tree.bulk_insert_keys(keys)))
    }
}

#[cfg(feature = "serde")]
impl<K, C> DeferredTree<K, (), C>
where
    K: serde::de::DeserializeOwned,
    C: Comparator<K>,
{
    /// Deferred [`AvlTree::bulk_insert_json`].
    pub fn bulk_insert_json(
        &mut self,
        values: &serde_json::Value,
    ) -> Deferred<Vec<Rejection<serde_json::Value>>> {
        ready(self.tree.bulk_insert_json(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use futures::TryFutureExt;
    use futures::executor::block_on;
    use rstest::rstest;

    #[rstest]
    fn test_deferred_is_settled_immediately() {
        let mut tree: DeferredTree<i32> = DeferredTree::new();
        let outcome = tree.insert(1).now_or_never();
        assert_eq!(outcome, Some(Ok(true)));
    }

    #[rstest]
    fn test_failure_becomes_failed_future() {
        let mut tree: DeferredTree<i32> = DeferredTree::new();
        let outcome = block_on(tree.insert(None));
        assert_eq!(outcome, Err(TreeError::InvalidOperand));
        assert!(tree.as_tree().is_empty());
    }

    #[rstest]
    fn test_chaining_success() {
        let mut tree: DeferredTree<i32> = DeferredTree::new();
        block_on(tree.insert(5)).unwrap();

        let doubled = block_on(tree.count().map_ok(|count| count * 2));
        assert_eq!(doubled, Ok(2));
    }

    #[rstest]
    fn test_get_clones_value() {
        let mut tree = DeferredTree::new();
        block_on(tree.insert_entry(1, "one".to_string())).unwrap();

        assert_eq!(block_on(tree.get(&1)), Ok(Some("one".to_string())));
        assert_eq!(block_on(tree.get(&2)), Err(TreeError::NotFound));
    }
}
