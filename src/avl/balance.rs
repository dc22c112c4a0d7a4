use core::fmt::{self, Formatter, Display};
use log::debug;
use crate::{
    binary_tree::{BinarySearchTree, Node},
    storage::Storage,
    util::unreachable_debugchecked,
};
use super::rotation::{rotate_left, rotate_right, rotate_left_right, rotate_right_left};

/// A rotation which restores the AVL invariant at a node whose subtrees differ in height by two.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Single rotation lifting the right child, for a node which is right-heavy along its right side.
    Left,
    /// Single rotation lifting the left child, for a node which is left-heavy along its left side.
    Right,
    /// Left rotation of the left child followed by a right rotation of the node, for a node which is left-heavy along the inner side.
    LeftRight,
    /// Right rotation of the right child followed by a left rotation of the node, for a node which is right-heavy along the inner side.
    RightLeft,
}
impl Rotation {
    /// Selects the rotation for a node with the given balance factor, given the balance factor of its child on the taller side.
    ///
    /// Returns `None` if the node is within the AVL bounds and no rotation is needed. A child which is itself balanced selects a single rotation rather than a double one.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::Rotation;
    /// assert_eq!(Rotation::select(2, 1), Some(Rotation::Right));
    /// assert_eq!(Rotation::select(2, 0), Some(Rotation::Right));
    /// assert_eq!(Rotation::select(2, -1), Some(Rotation::LeftRight));
    /// assert_eq!(Rotation::select(-2, 0), Some(Rotation::Left));
    /// assert_eq!(Rotation::select(-2, 1), Some(Rotation::RightLeft));
    /// assert_eq!(Rotation::select(1, 1), None);
    /// ```
    pub const fn select(balance_factor: isize, child_balance_factor: isize) -> Option<Self> {
        if balance_factor > 1 {
            if child_balance_factor >= 0 {
                Some(Self::Right)
            } else {
                Some(Self::LeftRight)
            }
        } else if balance_factor < -1 {
            if child_balance_factor <= 0 {
                Some(Self::Left)
            } else {
                Some(Self::RightLeft)
            }
        } else {
            None
        }
    }
    /// Applies the rotation to the subtree rooted at `node`, returning the new root of the subtree.
    pub(crate) fn apply<K, S>(self, tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
    where S: Storage<Element = Node<K>> {
        let new_root = match self {
            Self::Left => rotate_left(tree, node),
            Self::Right => rotate_right(tree, node),
            Self::LeftRight => rotate_left_right(tree, node),
            Self::RightLeft => rotate_right_left(tree, node),
        };
        debug!("{} rotation at node {}, node {} took its place", self, node, new_root);
        new_root
    }
    const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        }
    }
}
impl Display for Rotation {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Rebalances the subtree rooted at `node` if its balance factor is out of bounds, returning the new root of the subtree.
///
/// The cached heights of the children of `node` must be up to date.
pub(crate) fn balance_tree<K, S>(tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
where S: Storage<Element = Node<K>> {
    let balance_factor = tree.balance_factor_of(node);
    let taller_child = if balance_factor > 1 {
        tree.node(node).left
    } else if balance_factor < -1 {
        tree.node(node).right
    } else {
        return node;
    };
    let taller_child = taller_child.unwrap_or_else(|| unsafe {
        // SAFETY: a subtree at least two levels taller than its sibling cannot be empty
        unreachable_debugchecked("the taller subtree of an unbalanced node was empty")
    });
    match Rotation::select(balance_factor, tree.balance_factor_of(taller_child)) {
        Some(rotation) => rotation.apply(tree, node),
        None => node,
    }
}
