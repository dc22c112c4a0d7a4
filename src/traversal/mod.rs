//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`]: *a trait for types which describe binary tree structures* addressed through cursors
//! - [`TraversalOrder`]: the four depth-first and breadth-first orders in which nodes can be visited, parseable from text
//! - [`Traverse`]: an iterator over the keys of a traversable in a chosen order
//! - [`PreOrder`], [`InOrder`], [`PostOrder`] and [`LevelOrder`]: iterators over the *cursors* of a traversable, for when more than the key of each node is needed
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversalOrder`]: enum.TraversalOrder.html " "
//! [`Traverse`]: struct.Traverse.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`LevelOrder`]: struct.LevelOrder.html " "

mod orders;
pub use orders::{PreOrder, InOrder, PostOrder, LevelOrder};

#[cfg(test)]
mod tests;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
    str::FromStr,
};

/// Binary tree structures which can be walked using cursors.
///
/// Traversals only ever read from the tree, and hold a shared borrow of it for as long as they exist, which means that the tree cannot change in the middle of one.
pub trait Traversable {
    /// The type of the keys stored in the nodes.
    type Key;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Cursors are only meaningful for the tree which produced them, and only until the next mutation of that tree.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node, or `None` if the tree is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns the key of the node at the specified cursor.
    ///
    /// # Panics
    /// Required to panic if the cursor does not point to a node.
    fn key_of(&self, cursor: &Self::Cursor) -> &Self::Key;
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if it has no left child.
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if it has no right child.
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    /// Returns an iterator over the keys of the tree in the specified order.
    ///
    /// Every call starts a fresh traversal from the root.
    ///
    /// # Example
    /// ```rust
    /// use avl_arena::{AvlTree, Traversable, TraversalOrder};
    ///
    /// let tree: AvlTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let keys = |order| tree.traverse(order).copied().collect::<Vec<_>>();
    /// assert_eq!(keys(TraversalOrder::Pre), [2, 1, 3]);
    /// assert_eq!(keys(TraversalOrder::In), [1, 2, 3]);
    /// assert_eq!(keys(TraversalOrder::Post), [1, 3, 2]);
    /// assert_eq!(keys(TraversalOrder::Level), [2, 1, 3]);
    /// ```
    #[inline(always)]
    fn traverse(&self, order: TraversalOrder) -> Traverse<'_, Self>
    where Self: Sized {
        Traverse::new(self, order)
    }
}
impl<T: Traversable> Traversable for &T {
    type Key = T::Key;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn key_of(&self, cursor: &Self::Cursor) -> &Self::Key {
        (**self).key_of(cursor)
    }
    #[inline(always)]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).left_child_of(cursor)
    }
    #[inline(always)]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).right_child_of(cursor)
    }
}

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit a node, then its left subtree, then its right subtree.
    Pre,
    /// Visit the left subtree, then the node, then the right subtree. For search trees, this yields keys in ascending order.
    In,
    /// Visit the left subtree, then the right subtree, then the node.
    Post,
    /// Visit the nodes level by level, starting from the root, left to right within each level.
    Level,
}
impl TraversalOrder {
    /// All traversal orders, in the order they are declared.
    pub const ALL: [Self; 4] = [Self::Pre, Self::In, Self::Post, Self::Level];

    const fn name(self) -> &'static str {
        match self {
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
            Self::Level => "level-order",
        }
    }
}
impl Display for TraversalOrder {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
impl FromStr for TraversalOrder {
    type Err = ParseTraversalOrderError;

    /// Parses `"pre"`, `"in"`, `"post"` or `"level"`, with or without an `-order` suffix.
    ///
    /// # Example
    /// ```rust
    /// # use avl_arena::TraversalOrder;
    /// assert_eq!("level".parse(), Ok(TraversalOrder::Level));
    /// assert_eq!("post-order".parse(), Ok(TraversalOrder::Post));
    /// assert!("sideways".parse::<TraversalOrder>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" | "pre-order" => Ok(Self::Pre),
            "in" | "in-order" => Ok(Self::In),
            "post" | "post-order" => Ok(Self::Post),
            "level" | "level-order" => Ok(Self::Level),
            _ => Err(ParseTraversalOrderError),
        }
    }
}

/// The error type returned when parsing a [`TraversalOrder`] from text which does not name one.
///
/// [`TraversalOrder`]: enum.TraversalOrder.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseTraversalOrderError;
impl Display for ParseTraversalOrderError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("expected one of \"pre\", \"in\", \"post\" or \"level\"")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ParseTraversalOrderError {}

/// An iterator over the keys of a traversable in a chosen order.
///
/// Created by [`Traversable::traverse`].
///
/// [`Traversable::traverse`]: trait.Traversable.html#method.traverse " "
#[derive(Debug)]
pub struct Traverse<'a, T: Traversable> {
    traversable: &'a T,
    cursors: Cursors<'a, T>,
}
#[derive(Debug)]
enum Cursors<'a, T: Traversable> {
    Pre(PreOrder<'a, T>),
    In(InOrder<'a, T>),
    Post(PostOrder<'a, T>),
    Level(LevelOrder<'a, T>),
}
impl<'a, T: Traversable> Traverse<'a, T> {
    /// Starts a traversal of the tree in the specified order.
    pub fn new(traversable: &'a T, order: TraversalOrder) -> Self {
        let cursors = match order {
            TraversalOrder::Pre => Cursors::Pre(PreOrder::new(traversable)),
            TraversalOrder::In => Cursors::In(InOrder::new(traversable)),
            TraversalOrder::Post => Cursors::Post(PostOrder::new(traversable)),
            TraversalOrder::Level => Cursors::Level(LevelOrder::new(traversable)),
        };
        Self {
            traversable,
            cursors,
        }
    }
    /// Returns the order in which the keys are visited.
    pub fn order(&self) -> TraversalOrder {
        match self.cursors {
            Cursors::Pre(..) => TraversalOrder::Pre,
            Cursors::In(..) => TraversalOrder::In,
            Cursors::Post(..) => TraversalOrder::Post,
            Cursors::Level(..) => TraversalOrder::Level,
        }
    }
}
impl<'a, T: Traversable> Iterator for Traverse<'a, T> {
    type Item = &'a T::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = match &mut self.cursors {
            Cursors::Pre(cursors) => cursors.next(),
            Cursors::In(cursors) => cursors.next(),
            Cursors::Post(cursors) => cursors.next(),
            Cursors::Level(cursors) => cursors.next(),
        }?;
        let traversable = self.traversable;
        Some(traversable.key_of(&cursor))
    }
}
impl<'a, T: Traversable> FusedIterator for Traverse<'a, T> {}
