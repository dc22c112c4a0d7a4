use core::{
    cmp::Ordering,
    iter::{FromIterator, FusedIterator},
    mem,
};
use alloc::vec::Vec;
use log::trace;
use crate::{
    storage::{Storage, ListStorage, DefaultStorage, SparseStorage, SparseStorageSlot},
    traversal::{Traversable, TraversalOrder, Traverse, InOrder},
    StorageFullError,
};
use super::{Node, NodeRef};

/// An unbalanced binary search tree.
///
/// Insertion, removal and lookup are iterative descents from the root, so their cost is proportional to the height of the tree, which is linear in the worst case (for example, when keys are inserted in ascending order). Use [`AvlTree`] if that matters.
///
/// See the [module-level documentation] for more.
///
/// [`AvlTree`]: ../avl/struct.AvlTree.html " "
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinarySearchTree<K, S = DefaultStorage<Node<K>>>
where S: Storage<Element = Node<K>>,
{
    pub(crate) storage: S,
    pub(crate) root: Option<usize>,
}
impl<K, S> BinarySearchTree<K, S>
where S: Storage<Element = Node<K>>,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::BinarySearchTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinarySearchTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Adds the key to the tree, returning `true` if it was not present before and `false` if the tree is left unchanged.
    ///
    /// # Panics
    /// Panics if the storage has a fixed capacity and is full. Use [`try_insert`] to handle that case.
    ///
    /// [`try_insert`]: #method.try_insert " "
    #[track_caller]
    pub fn insert(&mut self, key: K) -> bool
    where K: Ord {
        self.try_insert(key).unwrap_or_else(|error| panic!("{}", error))
    }
    /// Adds the key to the tree, returning `true` if it was not present before and `false` if the tree is left unchanged.
    ///
    /// # Errors
    /// Returns [`StorageFullError`] with the key if the storage has a fixed capacity and there is no room for another node.
    ///
    /// [`StorageFullError`]: ../struct.StorageFullError.html " "
    pub fn try_insert(&mut self, key: K) -> Result<bool, StorageFullError<K>>
    where K: Ord {
        let mut path = Vec::new();
        let mut link = self.root;
        let mut went_left = false;
        while let Some(index) = link {
            let node = self.node(index);
            went_left = match key.cmp(&node.key) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => return Ok(false),
            };
            path.push(index);
            link = if went_left { node.left } else { node.right };
        }
        let index = self
            .storage
            .try_add(Node::leaf(key))
            .map_err(|node| StorageFullError { key: node.key })?;
        match path.last() {
            Some(&parent) => {
                let parent = self.node_mut(parent);
                if went_left {
                    parent.left = Some(index);
                } else {
                    parent.right = Some(index);
                }
            }
            None => self.root = Some(index),
        }
        self.update_heights_along(&path);
        trace!(
            "inserted node {} at depth {}, {} nodes in total",
            index,
            path.len(),
            self.len()
        );
        Ok(true)
    }
    /// Removes the key from the tree, returning the key which was stored in the tree, or `None` if it was not present.
    ///
    /// A node with two children takes over the key of its in-order predecessor, and the predecessor's node is removed instead.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::BinarySearchTree;
    /// let mut tree: BinarySearchTree<_> = vec![5, 3, 8, 4].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Some(5));
    /// // The predecessor of 5 took its place:
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(4));
    /// assert_eq!(tree.remove(&5), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where K: Ord {
        let mut path = Vec::new();
        let target = self.find_with_path(key, &mut path)?;
        let target_node = self.node(target);
        let removed = match (target_node.left, target_node.right) {
            (Some(left), Some(..)) => {
                path.push(target);
                let mut predecessor = left;
                while let Some(right) = self.node(predecessor).right {
                    path.push(predecessor);
                    predecessor = right;
                }
                let replacement_parent = path.last().copied();
                let predecessor_left = self.node(predecessor).left;
                self.replace_child(replacement_parent, predecessor, predecessor_left);
                let predecessor_key = self.storage.remove(predecessor).key;
                mem::replace(&mut self.node_mut(target).key, predecessor_key)
            }
            (child, None) | (None, child) => {
                self.replace_child(path.last().copied(), target, child);
                self.storage.remove(target).key
            }
        };
        self.update_heights_along(&path);
        trace!("removed a node, {} nodes left", self.len());
        Some(removed)
    }
    /// Returns `true` if the key is present in the tree, `false` otherwise.
    pub fn contains(&self, key: &K) -> bool
    where K: Ord {
        self.find(key).is_some()
    }
    /// Returns a reference to the key stored in the tree which is equal to the given one, or `None` if there is none.
    pub fn get(&self, key: &K) -> Option<&K>
    where K: Ord {
        self.find(key).map(|index| &self.node(index).key)
    }
    /// Returns the smallest key in the tree, or `None` if it's empty.
    pub fn min(&self) -> Option<&K> {
        let mut index = self.root?;
        while let Some(left) = self.node(index).left {
            index = left;
        }
        Some(&self.node(index).key)
    }
    /// Returns the largest key in the tree, or `None` if it's empty.
    pub fn max(&self) -> Option<&K> {
        let mut index = self.root?;
        while let Some(right) = self.node(index).right {
            index = right;
        }
        Some(&self.node(index).key)
    }

    /// Returns the number of keys in the tree.
    ///
    /// This is tracked by the storage and returns immediately.
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree contains no keys, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the height of the tree: `-1` if it's empty, `0` if it only has a root node.
    pub fn height(&self) -> isize {
        self.height_of(self.root)
    }
    /// Removes all keys from the tree.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = None;
    }
    /// Returns a reference to the root node of the tree, or `None` if it's empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, S>> {
        self.root.map(|root| unsafe {
            // SAFETY: the root index always points to a node
            NodeRef::new_raw_unchecked(self, root)
        })
    }
    /// Returns an iterator over the keys of the tree paired with the balance factors of their nodes, in ascending key order.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = vec![2, 1, 3, 4].into_iter().collect();
    /// let factors: Vec<_> = tree.balance_factors().map(|(&key, factor)| (key, factor)).collect();
    /// assert_eq!(factors, [(1, 0), (2, -1), (3, -1), (4, 0)]);
    /// ```
    pub fn balance_factors(&self) -> BalanceFactors<'_, K, S> {
        BalanceFactors {
            tree: self,
            cursors: InOrder::new(self),
        }
    }
    /// Returns the amount of nodes the storage can hold without requiring a memory allocation.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Shrinks the capacity of the storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    #[inline]
    pub(crate) fn node(&self, index: usize) -> &Node<K> {
        debug_assert!(
            self.storage.contains_key(index),
            "debug key check failed: tried to reference index {} which is not present in the storage",
            index,
        );
        unsafe {
            // SAFETY: links between nodes only ever point to present nodes
            self.storage.get_unchecked(index)
        }
    }
    #[inline]
    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<K> {
        debug_assert!(
            self.storage.contains_key(index),
            "debug key check failed: tried to reference index {} which is not present in the storage",
            index,
        );
        unsafe {
            // SAFETY: as above
            self.storage.get_unchecked_mut(index)
        }
    }
    /// Cached height of the subtree behind the link, `-1` if there is no subtree.
    #[inline]
    pub(crate) fn height_of(&self, link: Option<usize>) -> isize {
        link.map_or(-1, |index| self.node(index).height)
    }
    #[inline]
    pub(crate) fn balance_factor_of(&self, index: usize) -> isize {
        let node = self.node(index);
        self.height_of(node.left) - self.height_of(node.right)
    }
    /// Recomputes the cached height of the node from the cached heights of its children.
    #[inline]
    pub(crate) fn update_height(&mut self, index: usize) {
        let node = self.node(index);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.node_mut(index).height = height;
    }
    fn update_heights_along(&mut self, path: &[usize]) {
        for &index in path.iter().rev() {
            self.update_height(index);
        }
    }
    /// Points the link of `parent` which pointed to `old` at `new` instead, or the root if there is no parent.
    fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
            None => self.root = new,
        }
    }
    pub(crate) fn find(&self, key: &K) -> Option<usize>
    where K: Ord {
        let mut link = self.root;
        while let Some(index) = link {
            let node = self.node(index);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }
    /// Like `find`, but also records the ancestors of the found node.
    fn find_with_path(&self, key: &K, path: &mut Vec<usize>) -> Option<usize>
    where K: Ord {
        let mut link = self.root;
        while let Some(index) = link {
            let node = self.node(index);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
            path.push(index);
        }
        None
    }
}
impl<K, S> BinarySearchTree<K, SparseStorage<Node<K>, S>>
where
    S: ListStorage<Element = SparseStorageSlot<Node<K>>>,
{
    /// Returns the number of holes in the storage, left behind by removed nodes and not yet reused by insertions. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::BinarySearchTree;
    /// let mut tree: BinarySearchTree<_> = (0..4).collect();
    /// tree.remove(&1);
    /// tree.remove(&2);
    /// assert_eq!(tree.num_holes(), 2);
    /// // Insertions fill the holes before growing the storage:
    /// tree.insert(10);
    /// assert_eq!(tree.num_holes(), 1);
    /// ```
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }
}
impl<K, S> Default for BinarySearchTree<K, S>
where S: Storage<Element = Node<K>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K, S> FromIterator<K> for BinarySearchTree<K, S>
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
impl<K, S> Extend<K> for BinarySearchTree<K, S>
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
impl<'a, K, S> IntoIterator for &'a BinarySearchTree<K, S>
where S: Storage<Element = Node<K>>,
{
    type Item = &'a K;
    type IntoIter = Traverse<'a, BinarySearchTree<K, S>>;

    /// Iterates over the keys in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.traverse(TraversalOrder::In)
    }
}

/// Iterator over keys and the balance factors of their nodes, in ascending key order.
///
/// Created by the [`balance_factors`] method on trees.
///
/// [`balance_factors`]: struct.BinarySearchTree.html#method.balance_factors " "
#[derive(Debug)]
pub struct BalanceFactors<'a, K, S = DefaultStorage<Node<K>>>
where S: Storage<Element = Node<K>>,
{
    tree: &'a BinarySearchTree<K, S>,
    cursors: InOrder<'a, BinarySearchTree<K, S>>,
}
impl<'a, K, S> Iterator for BalanceFactors<'a, K, S>
where S: Storage<Element = Node<K>>,
{
    type Item = (&'a K, isize);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.cursors
            .next()
            .map(|index| (&tree.node(index).key, tree.balance_factor_of(index)))
    }
}
impl<'a, K, S> FusedIterator for BalanceFactors<'a, K, S>
where S: Storage<Element = Node<K>> {}
