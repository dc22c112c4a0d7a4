//! Unbalanced binary search trees, the substrate which the [AVL tree] is built on.
//!
//! Every node holds one key and links to at most two children: keys in the left subtree are smaller than the node's key, keys in the right subtree are larger. No rebalancing is ever performed, so the shape of the tree depends entirely on the order in which keys are inserted and removed.
//!
//! # Example
//! ```rust
//! use avl_arena::BinarySearchTree;
//!
//! // The turbofish there is needed to state that we are using the default storage method
//! // instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinarySearchTree::<_>::new();
//! for key in 1..=4 {
//!     tree.insert(key);
//! }
//! // Ascending insertion degenerates into a chain of right children:
//! assert_eq!(tree.height(), 3);
//!
//! // Let's look at the structure of the tree.
//! let root = tree.root().expect("the tree is not empty");
//! assert_eq!(*root.key(), 1);
//! assert!(root.left_child().is_none());
//! assert_eq!(root.balance_factor(), -3);
//! let right_child = root.right_child().expect("2 is to the right of 1");
//! assert_eq!(*right_child.key(), 2);
//! ```
//!
//! [AVL tree]: ../avl/index.html " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;

pub use base::{BinarySearchTree, BalanceFactors};
pub use node::Node;
pub use node_ref::NodeRef;


/// A binary search tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `BinarySearchTree` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type SparseVecBinarySearchTree<K> = BinarySearchTree<K, crate::storage::SparseVec<Node<K>>>;
