/// A node of a binary search tree.
///
/// Created by the trees internally and only publicly exposed so that the generic arguments of tree storages could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    /// Height of the subtree rooted at this node, `0` for leaves.
    pub(crate) height: isize,
}
impl<K> Node<K> {
    #[inline(always)]
    pub(crate) const fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }
    #[inline(always)]
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
