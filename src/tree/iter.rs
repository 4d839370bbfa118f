//! Lazy in-order iteration.

use std::iter::FusedIterator;

use super::node::Node;

/// An iterator over the entries of an [`AvlTree`](super::AvlTree) in
/// ascending key order.
///
/// Entries are produced lazily by walking an explicit stack of pending
/// ancestors, so only `O(height)` extra memory is held at any time. The
/// iterator borrows the tree; each call to
/// [`AvlTree::iter`](super::AvlTree::iter) starts a fresh walk from the root.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iterator = Self { stack: Vec::new() };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::AvlTree;
    use rstest::rstest;

    #[rstest]
    fn test_iter_on_empty_tree() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert_eq!(tree.iter().next(), None);
    }

    #[rstest]
    fn test_iter_is_lazy_and_restartable() {
        let mut tree = AvlTree::new();
        for key in [5, 3, 8, 1, 4] {
            tree.insert(key, key * 10).unwrap();
        }

        let mut first = tree.iter();
        assert_eq!(first.next(), Some((&1, &10)));
        assert_eq!(first.next(), Some((&3, &30)));

        let restarted: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
        assert_eq!(restarted, vec![1, 3, 4, 5, 8]);

        let rest: Vec<_> = first.map(|(key, _)| *key).collect();
        assert_eq!(rest, vec![4, 5, 8]);
    }

    #[rstest]
    fn test_iter_clone_continues_independently() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in 0..4 {
            tree.insert_key(key).unwrap();
        }

        let mut original = tree.iter();
        original.next();
        let cloned = original.clone();

        assert_eq!(original.count(), 3);
        assert_eq!(cloned.map(|(key, ())| *key).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
