//! An AVL-balanced binary search tree stored in an index-addressed arena.
//!
//! ------------------------
//!
//! # Overview
//! The crate provides two ordered trees over any [`Ord`] key type:
//! - [`BinarySearchTree`], a plain, unbalanced binary search tree. Its iterative insertion, removal and search are the substrate the balanced tree is built on.
//! - [`AvlTree`], which wraps the former and restores the *AVL invariant* after every insertion and removal: for every node, the heights of its two subtrees differ by at most one. Lookups, insertions and removals are therefore `O(log n)`.
//!
//! Heights follow the convention where an empty subtree has a height of `-1` and a single leaf has a height of `0`. The *balance factor* of a node is the height of its left subtree minus the height of its right subtree.
//!
//! Nodes are not individually heap-allocated. Instead, the trees use a technique called ["arena-allocated trees"][arena tree blog post]: every node is stored in a backing [`Storage`], and links between nodes are indices into it. Removing a node leaves a *hole* in the storage which is reused by the next insertion.
//!
//! # Example
//! ```rust
//! use avl_arena::{AvlTree, TraversalOrder, Traversable};
//!
//! // The turbofish is needed to state that we are using the default storage.
//! let mut tree = AvlTree::<_>::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! // Ascending insertion would have produced a linked list in a plain binary search tree, but
//! // rotations kept this one perfectly balanced:
//! assert_eq!(tree.height(), 2);
//! let preorder: Vec<_> = tree.traverse(TraversalOrder::Pre).copied().collect();
//! assert_eq!(preorder, [4, 2, 1, 3, 6, 5, 7]);
//!
//! assert_eq!(tree.remove(&4), Some(4));
//! assert!(!tree.contains(&4));
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type is [`Storage`]. It is implemented by [`SparseStorage`], a wrapper around a list-like collection (anything implementing [`ListStorage`]) which keeps a free-list of holes left behind by removed nodes. Out of the box, `ListStorage` is implemented for:
//! - [`Vec`], which is what the default storage, [`DefaultStorage`], uses;
//! - [`ArrayVec`], a fixed-capacity storage which never allocates. Trees using it report [`StorageFullError`] from `try_insert` instead of growing.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. An allocator is required either way.
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Logging
//! Mutations and rotations are reported through the [`log`] facade: insertions and removals at the `trace` level, rotations at the `debug` level. Only node indices and counts are logged, so keys are not required to implement `Debug`.
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`log`]: https://docs.rs/log/*/log/ " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, SparseStorage, DefaultStorage};

pub mod binary_tree;
pub use binary_tree::{BinarySearchTree, BalanceFactors, Node, NodeRef};

pub mod avl;
pub use avl::{AvlTree, Rotation};

pub mod traversal;
pub use traversal::{Traversable, TraversalOrder, ParseTraversalOrderError};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinarySearchTree,
        NodeRef as BinarySearchTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::avl::AvlTree;
    #[doc(no_inline)]
    pub use crate::traversal::{Traversable, TraversalOrder};
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The error type returned by `try_insert` when a fixed-capacity storage has no room left for another node.
///
/// The tree is left untouched by the failed insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageFullError<K> {
    /// The key which was passed to the function and could not be stored, provided here so that it doesn't get dropped if it could instead be reused after freeing up space.
    pub key: K,
}
impl<K> StorageFullError<K> {
    /// Extracts the key which could not be inserted.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_key(self) -> K {
        self.key
    }
}
impl<K> Display for StorageFullError<K> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the storage has no room for another node")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<K: fmt::Debug> std::error::Error for StorageFullError<K> {}
