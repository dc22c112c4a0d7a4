//! AVL trees: binary search trees which rebalance themselves after every insertion and removal.
//!
//! For every node of an AVL tree, the heights of its two subtrees differ by at most one. Insertions and removals walk down to the affected node recursively and, on the way back up, refresh the cached height of every node on the path and apply a [`Rotation`] to any node whose *balance factor* (height of the left subtree minus height of the right subtree) reached `2` or `-2`. This keeps the height of the tree logarithmic in the number of keys, no matter in which order they are inserted.
//!
//! # Example
//! ```rust
//! use avl_arena::AvlTree;
//!
//! let mut tree: AvlTree<_> = ('a'..='z').collect();
//! assert_eq!(tree.len(), 26);
//! assert_eq!(tree.height(), 4);
//! assert!(tree.balance_factors().all(|(_, factor)| factor.abs() <= 1));
//!
//! assert_eq!(tree.remove(&'a'), Some('a'));
//! assert!(!tree.contains(&'a'));
//! assert_eq!(tree.min(), Some(&'b'));
//! ```
//!
//! [`Rotation`]: enum.Rotation.html " "

mod balance;
mod rotation;
pub use balance::Rotation;

#[cfg(test)]
mod tests;

use core::{
    cmp::Ordering,
    iter::FromIterator,
    mem,
};
use log::trace;
use crate::{
    binary_tree::{BinarySearchTree, BalanceFactors, Node, NodeRef},
    storage::{Storage, ListStorage, DefaultStorage, SparseStorage, SparseStorageSlot},
    traversal::{Traversable, TraversalOrder, Traverse},
    StorageFullError,
};
use balance::balance_tree;

/// A self-balancing binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct AvlTree<K, S = DefaultStorage<Node<K>>>
where S: Storage<Element = Node<K>>,
{
    tree: BinarySearchTree<K, S>,
}
impl<K, S> AvlTree<K, S>
where S: Storage<Element = Node<K>>,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::AvlTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = AvlTree::<String>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            tree: BinarySearchTree::new(),
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: BinarySearchTree::with_capacity(capacity),
        }
    }

    /// Adds the key to the tree and rebalances every node on the path to it, returning `true` if it was not present before and `false` if the tree is left unchanged.
    ///
    /// # Panics
    /// Panics if the storage has a fixed capacity and is full. Use [`try_insert`] to handle that case.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::AvlTree;
    /// let mut tree = AvlTree::<_>::new();
    /// assert!(tree.insert(3));
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// // The tree rotated right instead of growing a chain:
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(2));
    /// assert_eq!(tree.height(), 1);
    /// // Duplicates are ignored:
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 3);
    /// ```
    ///
    /// [`try_insert`]: #method.try_insert " "
    #[track_caller]
    pub fn insert(&mut self, key: K) -> bool
    where K: Ord {
        self.try_insert(key).unwrap_or_else(|error| panic!("{}", error))
    }
    /// Adds the key to the tree and rebalances every node on the path to it, returning `true` if it was not present before and `false` if the tree is left unchanged.
    ///
    /// # Errors
    /// Returns [`StorageFullError`] with the key if the storage has a fixed capacity and there is no room for another node. The tree is left unchanged.
    ///
    /// [`StorageFullError`]: ../struct.StorageFullError.html " "
    pub fn try_insert(&mut self, key: K) -> Result<bool, StorageFullError<K>>
    where K: Ord {
        let root = self.tree.root;
        let (new_root, inserted) = self.insert_at(root, key)?;
        self.tree.root = Some(new_root);
        if inserted {
            trace!(
                "inserted a node, {} nodes in total, height {}",
                self.len(),
                self.height()
            );
        }
        Ok(inserted)
    }
    /// Removes the key from the tree and rebalances every node on the path to it, returning the key which was stored in the tree, or `None` if it was not present.
    ///
    /// A node with two children takes over the key of its in-order predecessor, and the predecessor's node is removed instead. In that case, the nodes on the path down to the predecessor are rebalanced as well.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::AvlTree;
    /// let mut tree: AvlTree<_> = (1..=7).collect();
    /// assert_eq!(tree.remove(&4), Some(4));
    /// // 3, the in-order predecessor of 4, took its place at the root:
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(3));
    /// assert_eq!(tree.remove(&4), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where K: Ord {
        let root = self.tree.root;
        let (new_root, removed) = self.remove_at(root, key);
        self.tree.root = new_root;
        if removed.is_some() {
            trace!(
                "removed a node, {} nodes left, height {}",
                self.len(),
                self.height()
            );
        }
        removed
    }
    /// Returns `true` if the key is present in the tree, `false` otherwise.
    #[inline(always)]
    pub fn contains(&self, key: &K) -> bool
    where K: Ord {
        self.tree.contains(key)
    }
    /// Returns a reference to the key stored in the tree which is equal to the given one, or `None` if there is none.
    #[inline(always)]
    pub fn get(&self, key: &K) -> Option<&K>
    where K: Ord {
        self.tree.get(key)
    }
    /// Returns the smallest key in the tree, or `None` if it's empty.
    #[inline(always)]
    pub fn min(&self) -> Option<&K> {
        self.tree.min()
    }
    /// Returns the largest key in the tree, or `None` if it's empty.
    #[inline(always)]
    pub fn max(&self) -> Option<&K> {
        self.tree.max()
    }
    /// Returns the number of keys in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    /// Returns `true` if the tree contains no keys, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
    /// Returns the height of the tree: `-1` if it's empty, `0` if it only has a root node.
    #[inline(always)]
    pub fn height(&self) -> isize {
        self.tree.height()
    }
    /// Removes all keys from the tree.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.tree.clear()
    }
    /// Returns a reference to the root node of the tree, or `None` if it's empty.
    #[inline(always)]
    pub fn root(&self) -> Option<NodeRef<'_, K, S>> {
        self.tree.root()
    }
    /// Returns an iterator over the keys of the tree paired with the balance factors of their nodes, in ascending key order. Every factor is `-1`, `0` or `1`.
    #[inline(always)]
    pub fn balance_factors(&self) -> BalanceFactors<'_, K, S> {
        self.tree.balance_factors()
    }
    /// Returns the amount of nodes the storage can hold without requiring a memory allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
    /// Shrinks the capacity of the storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.tree.shrink_to_fit()
    }
    /// Returns the underlying binary search tree, for read-only operations which are shared by both kinds of trees.
    #[inline(always)]
    pub fn as_unbalanced(&self) -> &BinarySearchTree<K, S> {
        &self.tree
    }

    /// Inserts into the subtree behind `link`, returning the new root of the subtree and whether the key was added.
    fn insert_at(
        &mut self,
        link: Option<usize>,
        key: K,
    ) -> Result<(usize, bool), StorageFullError<K>>
    where K: Ord {
        let index = match link {
            Some(index) => index,
            None => {
                let index = self
                    .tree
                    .storage
                    .try_add(Node::leaf(key))
                    .map_err(|node| StorageFullError { key: node.key })?;
                return Ok((index, true));
            }
        };
        let node = self.tree.node(index);
        let went_left = match key.cmp(&node.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => return Ok((index, false)),
        };
        let child = if went_left { node.left } else { node.right };
        let (new_child, inserted) = self.insert_at(child, key)?;
        if !inserted {
            return Ok((index, false));
        }
        let node = self.tree.node_mut(index);
        if went_left {
            node.left = Some(new_child);
        } else {
            node.right = Some(new_child);
        }
        self.tree.update_height(index);
        Ok((balance_tree(&mut self.tree, index), true))
    }
    /// Removes from the subtree behind `link`, returning the new root of the subtree and the removed key.
    fn remove_at(&mut self, link: Option<usize>, key: &K) -> (Option<usize>, Option<K>)
    where K: Ord {
        let index = match link {
            Some(index) => index,
            None => return (None, None),
        };
        let node = self.tree.node(index);
        let (left, right) = (node.left, node.right);
        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (new_left, removed) = self.remove_at(left, key);
                if removed.is_some() {
                    self.tree.node_mut(index).left = new_left;
                }
                removed
            }
            Ordering::Greater => {
                let (new_right, removed) = self.remove_at(right, key);
                if removed.is_some() {
                    self.tree.node_mut(index).right = new_right;
                }
                removed
            }
            Ordering::Equal => return self.remove_node(index),
        };
        if removed.is_none() {
            return (Some(index), None);
        }
        self.tree.update_height(index);
        (Some(balance_tree(&mut self.tree, index)), removed)
    }
    /// Removes the key of the node at `index` from the tree, returning the new root of the subtree which the node was the root of, and the key.
    fn remove_node(&mut self, index: usize) -> (Option<usize>, Option<K>) {
        let node = self.tree.node(index);
        match (node.left, node.right) {
            (Some(left), Some(..)) => {
                let (new_left, predecessor_key) = self.remove_max(left);
                let node = self.tree.node_mut(index);
                node.left = new_left;
                let removed = mem::replace(&mut node.key, predecessor_key);
                self.tree.update_height(index);
                (Some(balance_tree(&mut self.tree, index)), Some(removed))
            }
            (child, None) | (None, child) => {
                let removed = self.tree.storage.remove(index).key;
                (child, Some(removed))
            }
        }
    }
    /// Removes the node with the largest key from the non-empty subtree rooted at `index`, returning the new root of the subtree and the key.
    fn remove_max(&mut self, index: usize) -> (Option<usize>, K) {
        let node = self.tree.node(index);
        match node.right {
            Some(right) => {
                let (new_right, key) = self.remove_max(right);
                self.tree.node_mut(index).right = new_right;
                self.tree.update_height(index);
                (Some(balance_tree(&mut self.tree, index)), key)
            }
            None => {
                let left = node.left;
                let key = self.tree.storage.remove(index).key;
                (left, key)
            }
        }
    }
}
impl<K, S> AvlTree<K, SparseStorage<Node<K>, S>>
where
    S: ListStorage<Element = SparseStorageSlot<Node<K>>>,
{
    /// Returns the number of holes in the storage, left behind by removed nodes and not yet reused by insertions.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.tree.num_holes()
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.tree.is_dense()
    }
}
impl<K, S> Default for AvlTree<K, S>
where S: Storage<Element = Node<K>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K, S> Traversable for AvlTree<K, S>
where S: Storage<Element = Node<K>>,
{
    type Key = K;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.tree.cursor_to_root()
    }
    #[inline(always)]
    fn key_of(&self, cursor: &Self::Cursor) -> &Self::Key {
        self.tree.key_of(cursor)
    }
    #[inline(always)]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.left_child_of(cursor)
    }
    #[inline(always)]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.right_child_of(cursor)
    }
}
impl<K, S> FromIterator<K> for AvlTree<K, S>
where
    K: Ord,
    S: Storage<Element = Node<K>>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
impl<K, S> Extend<K> for AvlTree<K, S>
where
    K: Ord,
    S: Storage<Element = Node<K>>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
impl<'a, K, S> IntoIterator for &'a AvlTree<K, S>
where S: Storage<Element = Node<K>>,
{
    type Item = &'a K;
    type IntoIter = Traverse<'a, AvlTree<K, S>>;

    /// Iterates over the keys in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.traverse(TraversalOrder::In)
    }
}
