use core::iter::FusedIterator;
use alloc::{vec::Vec, collections::VecDeque};
use super::Traversable;

/// An iterator over the cursors of a traversable in pre-order: a node, then its left subtree, then its right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, T: Traversable> {
    traversable: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable> PreOrder<'a, T> {
    /// Starts a pre-order traversal from the root of the traversable.
    pub fn new(traversable: &'a T) -> Self {
        Self {
            traversable,
            stack: traversable.cursor_to_root().into_iter().collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for PreOrder<'a, T> {
    type Item = T::Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        // Right goes first so that the left subtree is popped first
        if let Some(right) = self.traversable.right_child_of(&cursor) {
            self.stack.push(right);
        }
        if let Some(left) = self.traversable.left_child_of(&cursor) {
            self.stack.push(left);
        }
        Some(cursor)
    }
}
impl<'a, T: Traversable> FusedIterator for PreOrder<'a, T> {}

/// An iterator over the cursors of a traversable in in-order: the left subtree, then a node, then its right subtree.
///
/// For search trees, this visits the keys in ascending order.
#[derive(Debug)]
pub struct InOrder<'a, T: Traversable> {
    traversable: &'a T,
    stack: Vec<T::Cursor>,
    /// Root of the subtree whose leftmost path still needs to be pushed.
    current: Option<T::Cursor>,
}
impl<'a, T: Traversable> InOrder<'a, T> {
    /// Starts an in-order traversal from the root of the traversable.
    pub fn new(traversable: &'a T) -> Self {
        Self {
            traversable,
            stack: Vec::new(),
            current: traversable.cursor_to_root(),
        }
    }
}
impl<'a, T: Traversable> Iterator for InOrder<'a, T> {
    type Item = T::Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.current.take() {
            self.current = self.traversable.left_child_of(&cursor);
            self.stack.push(cursor);
        }
        let cursor = self.stack.pop()?;
        self.current = self.traversable.right_child_of(&cursor);
        Some(cursor)
    }
}
impl<'a, T: Traversable> FusedIterator for InOrder<'a, T> {}

/// An iterator over the cursors of a traversable in post-order: the left subtree, then the right subtree, then a node.
#[derive(Debug)]
pub struct PostOrder<'a, T: Traversable> {
    traversable: &'a T,
    /// Cursors paired with whether their children have already been pushed.
    stack: Vec<(T::Cursor, bool)>,
}
impl<'a, T: Traversable> PostOrder<'a, T> {
    /// Starts a post-order traversal from the root of the traversable.
    pub fn new(traversable: &'a T) -> Self {
        Self {
            traversable,
            stack: traversable
                .cursor_to_root()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for PostOrder<'a, T> {
    type Item = T::Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (cursor, expanded) = self.stack.pop()?;
            if expanded {
                return Some(cursor);
            }
            let left = self.traversable.left_child_of(&cursor);
            let right = self.traversable.right_child_of(&cursor);
            self.stack.push((cursor, true));
            if let Some(right) = right {
                self.stack.push((right, false));
            }
            if let Some(left) = left {
                self.stack.push((left, false));
            }
        }
    }
}
impl<'a, T: Traversable> FusedIterator for PostOrder<'a, T> {}

/// An iterator over the cursors of a traversable in level-order: the root, then its children, then their children and so on, left to right within each level.
#[derive(Debug)]
pub struct LevelOrder<'a, T: Traversable> {
    traversable: &'a T,
    queue: VecDeque<T::Cursor>,
}
impl<'a, T: Traversable> LevelOrder<'a, T> {
    /// Starts a level-order traversal from the root of the traversable.
    pub fn new(traversable: &'a T) -> Self {
        Self {
            traversable,
            queue: traversable.cursor_to_root().into_iter().collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for LevelOrder<'a, T> {
    type Item = T::Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.queue.pop_front()?;
        if let Some(left) = self.traversable.left_child_of(&cursor) {
            self.queue.push_back(left);
        }
        if let Some(right) = self.traversable.right_child_of(&cursor) {
            self.queue.push_back(right);
        }
        Some(cursor)
    }
}
impl<'a, T: Traversable> FusedIterator for LevelOrder<'a, T> {}
