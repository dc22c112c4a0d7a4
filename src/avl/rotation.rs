//! Rotation primitives. Each one takes the root of a subtree and returns the new root of that subtree, moving exactly two links per single rotation and refreshing the cached heights of the two nodes which moved.

use crate::{
    binary_tree::{BinarySearchTree, Node},
    storage::Storage,
    util::unreachable_debugchecked,
};

/// Lifts the right child of `node` into its place.
pub(crate) fn rotate_left<K, S>(tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
where S: Storage<Element = Node<K>> {
    let pivot = tree.node(node).right.unwrap_or_else(|| unsafe {
        // SAFETY: the rebalancing policy only rotates left towards a taller right subtree
        unreachable_debugchecked("left rotation requires a right child")
    });
    let inner = tree.node(pivot).left;
    tree.node_mut(node).right = inner;
    tree.node_mut(pivot).left = Some(node);
    // The old root is now below the pivot, so its height goes first
    tree.update_height(node);
    tree.update_height(pivot);
    pivot
}

/// Lifts the left child of `node` into its place.
pub(crate) fn rotate_right<K, S>(tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
where S: Storage<Element = Node<K>> {
    let pivot = tree.node(node).left.unwrap_or_else(|| unsafe {
        // SAFETY: as above, mirrored
        unreachable_debugchecked("right rotation requires a left child")
    });
    let inner = tree.node(pivot).right;
    tree.node_mut(node).left = inner;
    tree.node_mut(pivot).right = Some(node);
    tree.update_height(node);
    tree.update_height(pivot);
    pivot
}

pub(crate) fn rotate_left_right<K, S>(tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
where S: Storage<Element = Node<K>> {
    let left = tree.node(node).left.unwrap_or_else(|| unsafe {
        // SAFETY: as above
        unreachable_debugchecked("left-right rotation requires a left child")
    });
    let new_left = rotate_left(tree, left);
    tree.node_mut(node).left = Some(new_left);
    rotate_right(tree, node)
}

pub(crate) fn rotate_right_left<K, S>(tree: &mut BinarySearchTree<K, S>, node: usize) -> usize
where S: Storage<Element = Node<K>> {
    let right = tree.node(node).right.unwrap_or_else(|| unsafe {
        // SAFETY: as above
        unreachable_debugchecked("right-left rotation requires a right child")
    });
    let new_right = rotate_right(tree, right);
    tree.node_mut(node).right = Some(new_right);
    rotate_left(tree, node)
}
