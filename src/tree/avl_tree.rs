//! The AVL tree and its operations.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::iter::Iter;
use super::node::{self, Link, Node, detach_min, rebalance_slot};
use crate::comparator::{Comparator, NaturalOrder};
use crate::config::{Policy, TreeConfig};
use crate::error::{InvariantViolation, TreeError};

// =============================================================================
// Rejection
// =============================================================================

/// A batch item that could not be inserted, and why.
///
/// Returned by [`AvlTree::bulk_insert`] and its variants. `item` is the input
/// item exactly as it was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection<T> {
    /// The rejected input item.
    pub item: T,
    /// Why it was rejected.
    pub reason: TreeError,
}

// =============================================================================
// AvlTree Definition
// =============================================================================

/// An ordered key/value container backed by an AVL tree.
///
/// Keys are ordered by the comparator `C` chosen at construction and are
/// unique under it. Setting `V = ()` turns the tree into an ordered set.
///
/// After every public operation the tree satisfies:
///
/// 1. in-order keys are strictly ascending under `C`,
/// 2. every node's subtree heights differ by at most one,
/// 3. every cached height equals `1 + max(height(left), height(right))`.
///
/// How duplicates and missing keys are reported is decided by the tree's
/// [`TreeConfig`].
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `get`                  | O(log N)   |
/// | `insert`               | O(log N)   |
/// | `remove`               | O(log N)   |
/// | `min`/`max`            | O(log N)   |
/// | `count`                | O(N)       |
/// | `find`, traversals     | O(N)       |
///
/// # Examples
///
/// ```rust
/// use bbtree::tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [9, 5, 10, 0, 8, 11, -1, 1, 2] {
///     tree.insert(key, key.to_string()).unwrap();
/// }
///
/// assert_eq!(tree.count(), 9);
/// assert_eq!(tree.get(&10), Ok(Some(&"10".to_string())));
///
/// let keys: Vec<i32> = tree.keys().copied().collect();
/// assert_eq!(keys, vec![-1, 0, 1, 2, 5, 8, 9, 10, 11]);
/// ```
#[derive(Clone)]
pub struct AvlTree<K, V = (), C = NaturalOrder> {
    root: Link<K, V>,
    comparator: C,
    config: TreeConfig,
}

#[derive(Clone, Copy)]
enum TraversalOrder {
    Pre,
    In,
    Post,
}

impl<K, V> AvlTree<K, V, NaturalOrder> {
    /// Creates an empty tree ordered by the keys' natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    ///
    /// let tree: AvlTree<i32, String> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(TreeConfig {
            policy: Policy::Strict,
        })
    }

    /// Creates an empty, naturally ordered tree with the given configuration.
    #[inline]
    #[must_use]
    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            root: None,
            comparator: NaturalOrder,
            config,
        }
    }
}

impl<K, V, C> AvlTree<K, V, C> {
    /// Creates an empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32, (), _> =
    ///     AvlTree::with_comparator(|left: &i32, right: &i32| right.cmp(left));
    /// for key in [1, 3, 2] {
    ///     tree.insert_key(key).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self
    where
        C: Comparator<K>,
    {
        Self::with_comparator_and_config(comparator, TreeConfig::default())
    }

    /// Creates an empty tree ordered by `comparator` with the given configuration.
    #[inline]
    #[must_use]
    pub const fn with_comparator_and_config(comparator: C, config: TreeConfig) -> Self
    where
        C: Comparator<K>,
    {
        Self {
            root: None,
            comparator,
            config,
        }
    }

    /// Returns the configuration the tree was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the tree's comparator.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns `true` if the tree holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree; 0 when empty.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Counts the entries by walking the whole tree.
    ///
    /// # Complexity
    ///
    /// O(N). The count is not cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree: AvlTree<&str> = AvlTree::new();
    /// assert_eq!(tree.count(), 0);
    /// tree.insert_key("a").unwrap();
    /// assert_eq!(tree.count(), 1);
    /// ```
    #[must_use]
    pub fn count(&self) -> usize {
        fn count_nodes<K, V>(node: Option<&Node<K, V>>) -> usize {
            node.map_or(0, |node| {
                1 + count_nodes(node.left.as_deref()) + count_nodes(node.right.as_deref())
            })
        }
        count_nodes(self.root.as_deref())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns a lazy iterator over the entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns every entry accepted by `predicate`, in key order.
    ///
    /// Every entry is offered to the predicate exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 1..=6 {
    ///     tree.insert(key, key * key).unwrap();
    /// }
    ///
    /// let even: Vec<_> = tree.find(|_, square| square % 2 == 0);
    /// assert_eq!(even, vec![(&2, &4), (&4, &16), (&6, &36)]);
    /// assert!(tree.find(|_, square| *square > 100).is_empty());
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Vec<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|(key, value)| predicate(key, value))
            .collect()
    }

    /// Like [`find`](Self::find), with a fallible predicate.
    ///
    /// The scan stops at the first error, which is returned unchanged; no
    /// partial result is produced.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate`.
    pub fn try_find<E, P>(&self, mut predicate: P) -> Result<Vec<(&K, &V)>, E>
    where
        P: FnMut(&K, &V) -> Result<bool, E>,
    {
        self.iter()
            .filter_map(|entry| {
                predicate(entry.0, entry.1)
                    .map(|keep| keep.then_some(entry))
                    .transpose()
            })
            .collect()
    }

    /// Visits every entry root first, then the left and right subtrees.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by `visitor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// for key in 0..5 {
    ///     tree.insert_key(key).unwrap();
    /// }
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse_pre_order(|key, _| {
    ///     visited.push(*key);
    ///     Ok::<_, ()>(())
    /// })
    /// .unwrap();
    /// assert_eq!(visited, vec![1, 0, 3, 2, 4]);
    /// ```
    pub fn traverse_pre_order<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        Self::visit(self.root.as_deref(), TraversalOrder::Pre, &mut visitor)
    }

    /// Visits every entry in ascending key order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by `visitor`.
    pub fn traverse_in_order<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        Self::visit(self.root.as_deref(), TraversalOrder::In, &mut visitor)
    }

    /// Visits the left and right subtrees of every entry before the entry.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by `visitor`.
    pub fn traverse_post_order<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        Self::visit(self.root.as_deref(), TraversalOrder::Post, &mut visitor)
    }

    fn visit<E, F>(node: Option<&Node<K, V>>, order: TraversalOrder, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>,
    {
        let Some(node) = node else {
            return Ok(());
        };
        if matches!(order, TraversalOrder::Pre) {
            visitor(&node.key, &node.value)?;
        }
        Self::visit(node.left.as_deref(), order, visitor)?;
        if matches!(order, TraversalOrder::In) {
            visitor(&node.key, &node.value)?;
        }
        Self::visit(node.right.as_deref(), order, visitor)?;
        if matches!(order, TraversalOrder::Post) {
            visitor(&node.key, &node.value)?;
        }
        Ok(())
    }

    /// Applies the policy to a lookup result: a miss is an error when strict.
    fn resolve<T>(&self, found: Option<T>) -> Result<Option<T>, TreeError> {
        match found {
            None if self.config.is_strict() => Err(TreeError::NotFound),
            found => Ok(found),
        }
    }
}

impl<K, V, C: Comparator<K>> AvlTree<K, V, C> {
    fn lookup(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if the key is absent and the policy is
    /// strict. Under the lenient policy a miss is `Ok(None)`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn get(&self, key: &K) -> Result<Option<&V>, TreeError> {
        self.resolve(self.lookup(key).map(|node| &node.value))
    }

    /// Returns the stored key and value comparing equal to `key`.
    ///
    /// # Errors
    ///
    /// Same policy as [`get`](Self::get).
    pub fn get_key_value(&self, key: &K) -> Result<Option<(&K, &V)>, TreeError> {
        self.resolve(self.lookup(key).map(|node| (&node.key, &node.value)))
    }

    /// Returns `true` if a key comparing equal to `key` is stored.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Inserts `key` with `value`.
    ///
    /// Returns `Ok(true)` when the entry was added. When the key is already
    /// present the tree is left exactly as it was, including the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] for a present key under the strict
    /// policy. Under the lenient policy a duplicate is `Ok(false)`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::error::TreeError;
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(1, "one"), Ok(true));
    /// assert_eq!(tree.insert(1, "uno"), Err(TreeError::DuplicateKey));
    /// assert_eq!(tree.get(&1), Ok(Some(&"one")));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, TreeError> {
        match self.place(key, value) {
            Ok(()) => Ok(true),
            Err(_) if self.config.is_strict() => Err(TreeError::DuplicateKey),
            Err(_) => {
                tracing::debug!("duplicate key ignored");
                Ok(false)
            }
        }
    }

    /// Inserts an entry that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidOperand`] for `None` without touching the
    /// tree; otherwise behaves like [`insert`](Self::insert).
    pub fn insert_entry(&mut self, entry: Option<(K, V)>) -> Result<bool, TreeError> {
        let (key, value) = entry.ok_or(TreeError::InvalidOperand)?;
        self.insert(key, value)
    }

    /// Inserts every item in order without stopping at failures.
    ///
    /// Items that are `None` or, under the strict policy, duplicate a key
    /// already in the tree are reported as [`Rejection`]s in input order.
    /// Every other item is inserted. Under the lenient policy duplicates are
    /// skipped silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::error::TreeError;
    /// use bbtree::tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// let rejections = tree.bulk_insert([Some((1, 'a')), None, Some((1, 'b'))]);
    ///
    /// assert_eq!(tree.count(), 1);
    /// assert_eq!(rejections[0].reason, TreeError::InvalidOperand);
    /// assert_eq!(rejections[1].item, Some((1, 'b')));
    /// assert_eq!(rejections[1].reason, TreeError::DuplicateKey);
    /// ```
    pub fn bulk_insert<I>(&mut self, items: I) -> Vec<Rejection<Option<(K, V)>>>
    where
        I: IntoIterator<Item = Option<(K, V)>>,
    {
        let mut rejections = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let Some((key, value)) = item else {
                tracing::debug!(index, reason = %TreeError::InvalidOperand, "batch item rejected");
                rejections.push(Rejection {
                    item: None,
                    reason: TreeError::InvalidOperand,
                });
                continue;
            };
            if let Err(entry) = self.place(key, value)
                && self.config.is_strict()
            {
                tracing::debug!(index, reason = %TreeError::DuplicateKey, "batch item rejected");
                rejections.push(Rejection {
                    item: Some(entry),
                    reason: TreeError::DuplicateKey,
                });
            }
        }
        rejections
    }

    /// Removes the entry stored under `key` and returns it.
    ///
    /// A node with two children takes over its in-order successor's entry,
    /// and the successor's node is the one unlinked.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if the key is absent and the policy is
    /// strict. Under the lenient policy a miss is `Ok(None)`. The tree is not
    /// modified on a miss.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn remove(&mut self, key: &K) -> Result<Option<(K, V)>, TreeError> {
        let removed = Self::remove_from(&mut self.root, key, &self.comparator);
        self.resolve(removed)
    }

    /// Checks the ordering, balance and height invariants of every node.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in an in-order walk.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut position = 0;
        let mut previous = None;
        Self::check_node(
            self.root.as_deref(),
            &self.comparator,
            &mut position,
            &mut previous,
        )
        .map(drop)
    }

    /// Adds the entry unless its key is present; a present key hands the
    /// entry back untouched.
    fn place(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        Self::insert_into(&mut self.root, key, value, &self.comparator).map(drop)
    }

    /// Returns how `key` compared with the key at `slot`, or `Equal` when a
    /// new leaf was created there.
    fn insert_into(
        slot: &mut Link<K, V>,
        key: K,
        value: V,
        comparator: &C,
    ) -> Result<Ordering, (K, V)> {
        let Some(node) = slot.as_mut() else {
            *slot = Some(Box::new(Node::leaf(key, value)));
            return Ok(Ordering::Equal);
        };
        let direction = comparator.compare(&key, &node.key);
        let child = match direction {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return Err((key, value)),
        };
        let landed = Self::insert_into(child, key, value, comparator)?;
        rebalance_slot(slot, |node| node.rebalance_after_insert(landed));
        Ok(direction)
    }

    fn remove_from(slot: &mut Link<K, V>, key: &K, comparator: &C) -> Option<(K, V)> {
        let direction = comparator.compare(key, &slot.as_ref()?.key);
        let removed = match direction {
            Ordering::Less => Self::remove_from(&mut slot.as_mut()?.left, key, comparator)?,
            Ordering::Greater => Self::remove_from(&mut slot.as_mut()?.right, key, comparator)?,
            Ordering::Equal => {
                let mut node = slot.take()?;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return Some((node.key, node.value)),
                    (Some(child), None) | (None, Some(child)) => {
                        *slot = Some(child);
                        return Some((node.key, node.value));
                    }
                    (Some(left), Some(right)) => {
                        tracing::trace!("splice in-order successor");
                        let (rest, successor) = detach_min(right);
                        let Node {
                            key: successor_key,
                            value: successor_value,
                            ..
                        } = *successor;
                        node.left = Some(left);
                        node.right = rest;
                        let key = mem::replace(&mut node.key, successor_key);
                        let value = mem::replace(&mut node.value, successor_value);
                        *slot = Some(node);
                        (key, value)
                    }
                }
            }
        };
        rebalance_slot(slot, Node::rebalance_after_remove);
        Some(removed)
    }

    /// Returns the true height of the subtree at `node`.
    fn check_node<'a>(
        node: Option<&'a Node<K, V>>,
        comparator: &C,
        position: &mut usize,
        previous: &mut Option<&'a K>,
    ) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let left = Self::check_node(node.left.as_deref(), comparator, position, previous)?;
        let here = *position;
        if let Some(previous_key) = previous
            && comparator.compare(previous_key, &node.key) != Ordering::Less
        {
            return Err(InvariantViolation::Ordering { position: here });
        }
        *previous = Some(&node.key);
        *position += 1;
        let right = Self::check_node(node.right.as_deref(), comparator, position, previous)?;

        let computed = 1 + left.max(right);
        if node.height != computed {
            return Err(InvariantViolation::Height {
                position: here,
                cached: node.height,
                computed,
            });
        }
        let balance_factor = left.cast_signed() - right.cast_signed();
        if balance_factor.abs() > 1 {
            return Err(InvariantViolation::Balance {
                position: here,
                balance_factor,
            });
        }
        Ok(computed)
    }
}

impl<K, C: Comparator<K>> AvlTree<K, (), C> {
    /// Inserts `key` into a tree used as an ordered set.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn insert_key(&mut self, key: K) -> Result<bool, TreeError> {
        self.insert(key, ())
    }

    /// Batch-inserts keys into a tree used as an ordered set.
    ///
    /// Rejections carry the input item as given. See
    /// [`bulk_insert`](Self::bulk_insert).
    pub fn bulk_insert_keys<I>(&mut self, keys: I) -> Vec<Rejection<Option<K>>>
    where
        I: IntoIterator<Item = Option<K>>,
    {
        self.bulk_insert(keys.into_iter().map(|key| key.map(|key| (key, ()))))
            .into_iter()
            .map(|rejection| Rejection {
                item: rejection.item.map(|(key, ())| key),
                reason: rejection.reason,
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
impl<K, C> AvlTree<K, (), C>
where
    K: serde::de::DeserializeOwned,
    C: Comparator<K>,
{
    /// Batch-inserts the elements of a JSON array into an ordered set.
    ///
    /// `null` elements and elements that do not deserialize into `K` are
    /// rejected as [`TreeError::InvalidOperand`]; duplicates follow the
    /// policy as in [`bulk_insert`](Self::bulk_insert).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidBatchInput`] if `values` is not an array;
    /// nothing is inserted in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bbtree::tree::AvlTree;
    /// use serde_json::json;
    ///
    /// let mut tree: AvlTree<i64> = AvlTree::new();
    /// let rejections = tree.bulk_insert_json(&json!([2, null, 1, 2])).unwrap();
    ///
    /// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(rejections.len(), 2);
    /// ```
    pub fn bulk_insert_json(
        &mut self,
        values: &serde_json::Value,
    ) -> Result<Vec<Rejection<serde_json::Value>>, TreeError> {
        use serde_json::Value;

        let Value::Array(items) = values else {
            let found = match values {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            };
            return Err(TreeError::InvalidBatchInput { found });
        };

        let mut rejections = Vec::new();
        for item in items {
            let key = if item.is_null() {
                None
            } else {
                K::deserialize(item).ok()
            };
            if let Err(reason) = self.insert_entry(key.map(|key| (key, ()))) {
                tracing::debug!(%item, %reason, "batch item rejected");
                rejections.push(Rejection {
                    item: item.clone(),
                    reason,
                });
            }
        }
        Ok(rejections)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for AvlTree<K, V, NaturalOrder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extending a tree skips entries whose key is already present, keeping the
/// stored value, regardless of the policy.
impl<K, V, C: Comparator<K>> Extend<(K, V)> for AvlTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.place(key, value);
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlTree<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for AvlTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for AvlTree<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Tests
// =============================================================================
