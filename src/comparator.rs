//! Key ordering for trees.
//!
//! A tree is ordered by a [`Comparator`] chosen when the tree is created.
//! [`NaturalOrder`] uses the key's own [`Ord`] implementation; any closure of
//! shape `Fn(&K, &K) -> Ordering` works as well.
//!
//! # Examples
//!
//! ```rust
//! use bbtree::comparator::{Comparator, NaturalOrder, by_key};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1_i32, &2), Ordering::Less);
//!
//! struct Account {
//!     number: u32,
//! }
//!
//! let by_number = by_key(|account: &Account| account.number);
//! assert_eq!(
//!     by_number.compare(&Account { number: 7 }, &Account { number: 3 }),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;

/// A total order over keys.
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of
/// `compare(b, a)`, and the relation is transitive. A tree whose comparator
/// breaks these rules keeps its balance but may fail to find stored keys.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// The natural ascending order of keys implementing [`Ord`].
///
/// This is the default comparator of [`AvlTree`](crate::tree::AvlTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// Builds a comparator that orders keys by a projected field.
///
/// # Examples
///
/// ```rust
/// use bbtree::comparator::by_key;
/// use bbtree::tree::AvlTree;
///
/// let mut tree: AvlTree<(u32, &str), (), _> =
///     AvlTree::with_comparator(by_key(|pair: &(u32, &str)| pair.0));
/// tree.insert_key((2, "b")).unwrap();
/// tree.insert_key((1, "a")).unwrap();
///
/// let keys: Vec<_> = tree.keys().map(|pair| pair.1).collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn by_key<K, T, F>(projection: F) -> impl Fn(&K, &K) -> Ordering + Clone
where
    T: Ord,
    F: Fn(&K) -> T + Clone,
{
    move |left, right| projection(left).cmp(&projection(right))
}
