use core::fmt::{self, Formatter, Debug};
use arrayvec::ArrayVec;
use crate::storage::{Storage, DefaultStorage};
use super::{BinarySearchTree, Node};

/// A reference to a node in a binary search tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the storage, it can be used to walk the tree.
pub struct NodeRef<'a, K, S = DefaultStorage<Node<K>>>
where S: Storage<Element = Node<K>>,
{
    tree: &'a BinarySearchTree<K, S>,
    index: usize,
}
impl<'a, K, S> NodeRef<'a, K, S>
where S: Storage<Element = Node<K>>,
{
    /// Creates a new `NodeRef` pointing to the specified index in the storage, or `None` if it does not hold a node.
    #[inline]
    pub fn new_raw(tree: &'a BinarySearchTree<K, S>, index: usize) -> Option<Self> {
        if tree.storage.contains_key(index) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, index)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified index in the storage without checking whether it holds a node.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified index does not hold a node.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinarySearchTree<K, S>, index: usize) -> Self {
        Self { tree, index }
    }
    /// Returns the raw storage index of the node.
    #[inline(always)]
    pub fn raw_index(&self) -> usize {
        self.index
    }
    /// Consumes the reference and returns the raw storage index of the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_raw_index(self) -> usize {
        self.index
    }
    /// Returns the key stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }
    /// Returns a reference to the left child, or `None` if there is none.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node().left.map(|index| self.child(index))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node().right.map(|index| self.child(index))
    }
    /// Returns references to the children which are present, left first.
    ///
    /// A node with only a right child yields just that one, so the position in the returned list does not say which side a child is on. Use [`left_child`] and [`right_child`] if that matters.
    ///
    /// [`left_child`]: #method.left_child " "
    /// [`right_child`]: #method.right_child " "
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let node = self.node();
        let mut children = ArrayVec::new();
        for &link in &[node.left, node.right] {
            if let Some(index) = link {
                children.push(self.child(index));
            }
        }
        children
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Returns the height of the subtree rooted at the node: `0` for a leaf, one more than the height of the taller child for a branch.
    #[inline(always)]
    pub fn height(&self) -> isize {
        self.node().height
    }
    /// Returns the balance factor of the node: the height of its left subtree minus the height of its right subtree, counting a missing subtree as `-1`.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = vec![2, 1].into_iter().collect();
    /// let root = tree.root().expect("the tree is not empty");
    /// assert_eq!(root.balance_factor(), 1);
    /// ```
    #[inline(always)]
    pub fn balance_factor(&self) -> isize {
        self.tree.balance_factor_of(self.index)
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<K> {
        self.tree.node(self.index)
    }
    #[inline(always)]
    fn child(&self, index: usize) -> Self {
        unsafe {
            // SAFETY: links between nodes only ever point to present nodes
            Self::new_raw_unchecked(self.tree, index)
        }
    }
}
impl<'a, K, S> Clone for NodeRef<'a, K, S>
where S: Storage<Element = Node<K>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K, S> Copy for NodeRef<'a, K, S>
where S: Storage<Element = Node<K>> {}
impl<'a, K, S> Debug for NodeRef<'a, K, S>
where
    K: Debug,
    S: Storage<Element = Node<K>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("key", self.key())
            .finish()
    }
}
