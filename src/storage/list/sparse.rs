use core::{
    mem,
    num::NonZeroUsize,
};
use super::ListStorage;
use crate::{
    storage::Storage,
    util::unreachable_debugchecked,
};

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;

/// A wrapper around a list-like storage type which turns removed elements into holes instead of shifting the elements after them.
///
/// Sparse storage with element type `E` wraps a normal list storage which stores `Slot<E>`, which is either an element or a "hole". Holes are chained into a free-list: the hole punched last is the first one to be filled by the next [`add`], so nodes which keep indices of other nodes never have those indices invalidated by a removal.
///
/// [`add`]: trait.Storage.html#tymethod.add " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Number of holes, first hole
    hole_list: Option<(NonZeroUsize, usize)>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_inner(self) -> S {
        self.storage
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0.get())
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }

    /// Fills the first hole of the hole list with the element, returning its index, or gives the element back if there are no holes.
    fn fill_hole(&mut self, element: E) -> Result<usize, E> {
        let (hole_count, used_hole_index) = match self.hole_list {
            Some(hole_info) => hole_info,
            None => return Err(element),
        };
        let hole = unsafe {
            // SAFETY: hole info always points within bounds
            self.storage.get_unchecked_mut(used_hole_index)
        };
        let next_hole = hole.hole_link();
        *hole = Slot::new_element(element);
        self.hole_list = match NonZeroUsize::new(hole_count.get() - 1) {
            Some(new_hole_count) => {
                let next_hole = next_hole.unwrap_or_else(|| unsafe {
                    // SAFETY: according to hole count, the hole list cannot end here
                    unreachable_debugchecked("hole list ended before the hole count ran out")
                });
                Some((new_hole_count, next_hole))
            },
            None => None,
        };
        Ok(used_hole_index)
    }
}
impl<E, S> Default for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    #[inline(always)]
    fn default() -> Self {
        <Self as Storage>::new()
    }
}
static HOLE_PANIC_MSG: &str = "\
the element at the specified index was a hole in the sparse storage";
static OUT_OF_BOUNDS_PANIC_MSG: &str = "\
the specified index was out of bounds of the sparse storage";

unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        self.fill_hole(element).unwrap_or_else(|element| {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        })
    }
    #[inline]
    fn try_add(&mut self, element: Self::Element) -> Result<usize, Self::Element> {
        match self.fill_hole(element) {
            Ok(index) => Ok(index),
            Err(element) if self.storage.is_full() => Err(element),
            Err(element) => {
                self.storage.push(Slot::new_element(element));
                Ok(self.storage.len() - 1)
            },
        }
    }
    #[track_caller]
    fn remove(&mut self, index: usize) -> Self::Element {
        let next_hole = self.hole_list.map(|x| x.1);
        let slot = self.storage.get_mut(index).expect(OUT_OF_BOUNDS_PANIC_MSG);
        let element = slot.punch_hole(next_hole).expect(HOLE_PANIC_MSG);
        let hole_count = self.num_holes() + 1;
        self.hole_list = Some((
            NonZeroUsize::new(hole_count).unwrap_or_else(|| unsafe {
                // SAFETY: we just added one to the count
                unreachable_debugchecked("hole count overflowed")
            }),
            index, // The hole we just punched is the first one to be reused
        ));
        element
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {storage: S::with_capacity(capacity), hole_list: None}
    }
    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element {
        self.storage.get_unchecked(index).element().unwrap_or_else(|| {
            // SAFETY: see safety contract
            unreachable_debugchecked(HOLE_PANIC_MSG)
        })
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element {
        self.storage.get_unchecked_mut(index).element_mut().unwrap_or_else(|| {
            // SAFETY: as above
            unreachable_debugchecked(HOLE_PANIC_MSG)
        })
    }
    #[inline]
    fn contains_key(&self, index: usize) -> bool {
        self.storage.get(index).map_or(false, Slot::is_element)
    }
    #[inline]
    fn clear(&mut self) {
        self.storage.clear();
        self.hole_list = None;
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.storage.get(index).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.storage.get_mut(index).and_then(Slot::element_mut)
    }
    #[inline(always)]
    fn new() -> Self {
        Self {storage: S::new(), hole_list: None}
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A slot inside a sparse storage.
///
/// This is an opaque structure, only used for the purpose of a `SparseStorage` being validly declarable, because leaking private types through generic argument defaults is impossible, and it'd be impossible to declare the type of the backing storage if it was explicitly different.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T> (SlotInner<T>);
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self (SlotInner::Element(val))
    }
    #[inline(always)]
    fn is_element(&self) -> bool {
        matches!(self.0, SlotInner::Element(..))
    }
    #[inline]
    fn element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline]
    fn hole_link(&self) -> Option<usize> {
        match self.0 {
            SlotInner::Hole(x) => x,
            SlotInner::Element(..) => None,
        }
    }
    /// Turns the slot into a hole linking to `next`, returning the element or `None` if it already was a hole.
    fn punch_hole(&mut self, next: Option<usize>) -> Option<T> {
        if self.is_element() {
            match mem::replace(&mut self.0, SlotInner::Hole(next)) {
                SlotInner::Element(val) => Some(val),
                SlotInner::Hole(..) => None,
            }
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SlotInner<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
