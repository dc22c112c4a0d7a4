//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the main trait for the backing storages for trees
//! - [`ListStorage`], a trait for list-like collections which `SparseStorage` can be built on top of
//! - [`SparseStorage`], a wrapper around `ListStorage`s which turns removed elements into reusable holes instead of shifting the elements after them
//! - [`DefaultStorage`], a type definition for the backing storage used by trees unless a different one is specified
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

#[cfg(test)]
mod tests;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// Elements are addressed by `usize` indices, which are handed out by [`add`] and stay valid until the element is removed. Trees store those indices as links between nodes.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - Adding or removing an element must never change the index of any other element;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] if `contains_key` on the same index returns `true` should *not* cause undefined behavior (otherwise, it may or may not, that is implementation specific);
/// - If an element is added at an index, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
///
/// Tree structures rely on those invariants for safety.
///
/// [`add`]: #tymethod.add " "
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection at an unspecified index, returning that index.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full. Use [`try_add`] to handle that case.
    ///
    /// [`try_add`]: #tymethod.try_add " "
    fn add(&mut self, element: Self::Element) -> usize;
    /// Adds an element to the collection at an unspecified index, returning that index, or gives the element back if the storage has a fixed capacity and is full.
    ///
    /// # Errors
    /// Returns the element itself if there is no room for it.
    fn try_add(&mut self, element: Self::Element) -> Result<usize, Self::Element>;
    /// Removes and returns the element at `index` within the storage.
    ///
    /// # Panics
    /// Required to panic if the specified index does not hold an element.
    fn remove(&mut self, index: usize) -> Self::Element;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the storage, without checking for presence of the index inside the collection.
    ///
    /// # Safety
    /// If the element at the specified index is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the storage, without checking for presence of the index inside the collection.
    ///
    /// # Safety
    /// If the element at the specified index is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;
    /// Returns `true` if the specified index holds an element, `false` otherwise.
    ///
    /// If this method returned `true`, calling `get_unchecked`/`get_unchecked_mut` on the same index is guaranteed to be safe.
    fn contains_key(&self, index: usize) -> bool;
    /// Removes all elements from the storage.
    fn clear(&mut self);

    /// Returns a reference to the specified element in the collection, or `None` if the index does not hold an element.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.contains_key(index) {
            Some(unsafe {
                // SAFETY: we just checked for presence
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index does not hold an element.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.contains_key(index) {
            Some(unsafe {
                // SAFETY: we just checked for presence
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this should be equal to that capacity; the default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is always a [`SparseVec`], i.e. a `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseVec`]: type.SparseVec.html " "
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type DefaultStorage<T> = SparseVec<T>;
