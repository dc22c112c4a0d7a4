use crate::{
    storage::Storage,
    traversal::Traversable,
};
use super::*;

impl<K, S> Traversable for BinarySearchTree<K, S>
where S: Storage<Element = Node<K>>,
{
    type Key = K;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root
    }
    #[track_caller]
    fn key_of(&self, cursor: &Self::Cursor) -> &Self::Key {
        NodeRef::new_raw(self, *cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {}", cursor))
            .key()
    }
    #[track_caller]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        NodeRef::new_raw(self, *cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {}", cursor))
            .left_child()
            .map(NodeRef::into_raw_index)
    }
    #[track_caller]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        NodeRef::new_raw(self, *cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {}", cursor))
            .right_child()
            .map(NodeRef::into_raw_index)
    }
}
