//! Node representation and the rotation primitives.
//!
//! Each node exclusively owns its children through [`Link`]. Rotations take a
//! boxed subtree root by value and hand back the new root, so ownership of the
//! pivoted subtree moves with the rotation and no node is ever shared.

use std::cmp::Ordering;

/// An owned, possibly missing subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single tree node with its cached subtree height.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) height: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

/// Height of a possibly missing subtree; 0 for a missing one.
#[inline]
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// `height(left) - height(right)` of a possibly missing subtree; 0 for a missing one.
#[inline]
pub(crate) fn balance_factor<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

impl<K, V> Node<K, V> {
    /// Creates a leaf of height 1.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the children.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    #[inline]
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left).cast_signed() - height(&self.right).cast_signed()
    }

    /// Rotates the subtree rooted at `self` to the right.
    ///
    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C   ->   A   y
    ///    / \              / \
    ///   A   T2           T2  C
    /// ```
    ///
    /// Leaves the subtree unchanged when there is no left child.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match self.left.take() {
            Some(mut pivot) => {
                tracing::trace!("rotate right");
                self.left = pivot.right.take();
                self.update_height();
                pivot.right = Some(self);
                pivot.update_height();
                pivot
            }
            None => self,
        }
    }

    /// Rotates the subtree rooted at `self` to the left; mirror of
    /// [`rotate_right`](Self::rotate_right).
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match self.right.take() {
            Some(mut pivot) => {
                tracing::trace!("rotate left");
                self.right = pivot.left.take();
                self.update_height();
                pivot.left = Some(self);
                pivot.update_height();
                pivot
            }
            None => self,
        }
    }

    /// Left-rotates the left child, then right-rotates `self`.
    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    /// Right-rotates the right child, then left-rotates `self`.
    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }

    /// Restores balance on the unwind of an insertion.
    ///
    /// `landed` is how the inserted key compares with the key of the child
    /// it was inserted under: `Less` means it went into that child's left
    /// subtree. Only called after a node was actually added below `self`.
    pub(crate) fn rebalance_after_insert(mut self: Box<Self>, landed: Ordering) -> Box<Self> {
        self.update_height();
        let balance = self.balance_factor();

        if balance > 1 {
            match landed {
                Ordering::Less => self.rotate_right(),
                _ => self.rotate_left_right(),
            }
        } else if balance < -1 {
            match landed {
                Ordering::Greater => self.rotate_left(),
                _ => self.rotate_right_left(),
            }
        } else {
            self
        }
    }

    /// Restores balance on the unwind of a removal.
    ///
    /// Either side may be heavy regardless of where the removal happened. A
    /// heavy child with balance factor 0 takes the single rotation.
    pub(crate) fn rebalance_after_remove(mut self: Box<Self>) -> Box<Self> {
        self.update_height();
        let balance = self.balance_factor();

        if balance > 1 {
            if balance_factor(&self.left) >= 0 {
                self.rotate_right()
            } else {
                self.rotate_left_right()
            }
        } else if balance < -1 {
            if balance_factor(&self.right) <= 0 {
                self.rotate_left()
            } else {
                self.rotate_right_left()
            }
        } else {
            self
        }
    }
}

/// Detaches the leftmost node of the subtree rooted at `node`.
///
/// Returns the remaining subtree, rebalanced along the left spine, and the
/// detached node. The detached node has no children.
pub(crate) fn detach_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(node.rebalance_after_remove()), min)
        }
        None => {
            let rest = node.right.take();
            (rest, node)
        }
    }
}

/// Replaces the subtree in `slot` with `rebalance` applied to it.
#[inline]
pub(crate) fn rebalance_slot<K, V>(
    slot: &mut Link<K, V>,
    rebalance: impl FnOnce(Box<Node<K, V>>) -> Box<Node<K, V>>,
) {
    if let Some(node) = slot.take() {
        *slot = Some(rebalance(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn boxed(key: i32, left: Link<i32, ()>, right: Link<i32, ()>) -> Box<Node<i32, ()>> {
        let mut node = Box::new(Node::leaf(key, ()));
        node.left = left;
        node.right = right;
        node.update_height();
        node
    }

    fn pre_order(link: &Link<i32, ()>, keys: &mut Vec<i32>) {
        if let Some(node) = link {
            keys.push(node.key);
            pre_order(&node.left, keys);
            pre_order(&node.right, keys);
        }
    }

    fn keys_of(node: Box<Node<i32, ()>>) -> Vec<i32> {
        let mut keys = Vec::new();
        pre_order(&Some(node), &mut keys);
        keys
    }

    #[rstest]
    fn test_height_of_missing_link_is_zero() {
        let link: Link<i32, ()> = None;
        assert_eq!(height(&link), 0);
        assert_eq!(balance_factor(&link), 0);
    }

    #[rstest]
    fn test_leaf_has_height_one() {
        let node = Node::leaf(1, ());
        assert_eq!(node.height, 1);
        assert_eq!(node.balance_factor(), 0);
    }

    #[rstest]
    fn test_rotate_right_moves_t2() {
        // y=4 with x=2 (A=1, T2=3), C=5
        let x = boxed(2, Some(boxed(1, None, None)), Some(boxed(3, None, None)));
        let y = boxed(4, Some(x), Some(boxed(5, None, None)));

        let root = y.rotate_right();
        assert_eq!(root.key, 2);
        assert_eq!(root.height, 3);
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.key, 4);
        assert_eq!(right.left.as_ref().unwrap().key, 3);
        assert_eq!(right.height, 2);
        assert_eq!(keys_of(root), vec![2, 1, 4, 3, 5]);
    }

    #[rstest]
    fn test_rotate_left_moves_t2() {
        let y = boxed(4, Some(boxed(3, None, None)), Some(boxed(5, None, None)));
        let x = boxed(2, Some(boxed(1, None, None)), Some(y));

        let root = x.rotate_left();
        assert_eq!(root.key, 4);
        assert_eq!(root.left.as_ref().unwrap().right.as_ref().unwrap().key, 3);
        assert_eq!(keys_of(root), vec![4, 2, 1, 3, 5]);
    }

    #[rstest]
    fn test_rotate_without_child_is_identity() {
        let node = boxed(1, None, None);
        let node = node.rotate_right();
        assert_eq!(node.key, 1);
        let node = node.rotate_left();
        assert_eq!(node.key, 1);
        assert_eq!(node.height, 1);
    }

    #[rstest]
    fn test_rebalance_after_insert_left_right_case() {
        // 3 -> 1 -> 2 zig-zag
        let left = boxed(1, None, Some(boxed(2, None, None)));
        let root = boxed(3, Some(left), None);

        let root = root.rebalance_after_insert(Ordering::Greater);
        assert_eq!(keys_of(root), vec![2, 1, 3]);
    }

    #[rstest]
    fn test_rebalance_after_insert_right_left_case() {
        let right = boxed(3, Some(boxed(2, None, None)), None);
        let root = boxed(1, None, Some(right));

        let root = root.rebalance_after_insert(Ordering::Less);
        assert_eq!(keys_of(root), vec![2, 1, 3]);
    }

    #[rstest]
    fn test_rebalance_after_remove_prefers_single_rotation_on_tie() {
        // Left child perfectly balanced, right side emptied.
        let left = boxed(2, Some(boxed(1, None, None)), Some(boxed(3, None, None)));
        let root = boxed(4, Some(left), None);

        let root = root.rebalance_after_remove();
        assert_eq!(keys_of(root), vec![2, 1, 4, 3]);
    }

    #[rstest]
    fn test_rebalance_after_insert_single_rotation() {
        let left = boxed(2, Some(boxed(1, None, None)), None);
        let root = boxed(3, Some(left), None);

        let root = root.rebalance_after_insert(Ordering::Less);
        assert_eq!(keys_of(root), vec![2, 1, 3]);
    }

    #[rstest]
    fn test_detach_min_rebalances_remaining_subtree() {
        let root = boxed(
            2,
            Some(boxed(1, None, None)),
            Some(boxed(3, None, Some(boxed(4, None, None)))),
        );

        let (rest, min) = detach_min(root);
        assert_eq!(min.key, 1);
        assert!(min.left.is_none() && min.right.is_none());
        assert_eq!(keys_of(rest.unwrap()), vec![3, 2, 4]);
    }

    #[rstest]
    fn test_detach_min_of_root_without_left_child() {
        let root = boxed(1, None, Some(boxed(2, None, None)));

        let (rest, min) = detach_min(root);
        assert_eq!(min.key, 1);
        assert_eq!(keys_of(rest.unwrap()), vec![2]);
    }
}
