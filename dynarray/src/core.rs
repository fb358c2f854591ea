use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::{fmt, mem, ptr};

use crate::error::DynArrayError;
use crate::growth::{Doubling, GrowthPolicy};
use crate::observer::{Event, Observer};

/// An owning, growable, contiguous array
///
/// The slot block always holds exactly `capacity()` values; the first
/// `len()` of them are the array's elements. An empty block owns no
/// allocation.
pub struct DynamicArray<T, G = Doubling> {
    slots: Box<[T]>,
    len: usize,
    observer: Option<Rc<dyn Observer>>,
    _growth: PhantomData<G>,
}

/// Obtains room for `capacity` values without aborting on failure.
fn try_vec<T>(capacity: usize) -> Result<Vec<T>, DynArrayError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DynArrayError::AllocationError {
            requested: capacity,
        })?;
    Ok(slots)
}

impl<T, G> DynamicArray<T, G> {
    /// Creates an empty array. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            len: 0,
            observer: None,
            _growth: PhantomData,
        }
    }

    /// Creates an empty array reporting its operations to `observer`.
    ///
    /// Arrays copied from this one, and arrays produced by `try_add` on it,
    /// report to the same observer.
    #[must_use]
    pub fn with_observer(observer: Rc<dyn Observer>) -> Self {
        let mut array = Self::new();
        array.observer = Some(observer);
        array
    }

    /// Replaces the observer.
    ///
    /// The buffer held at this point is not reported as allocated, so
    /// attach observers to empty arrays when counting allocations.
    pub fn set_observer(&mut self, observer: Option<Rc<dyn Observer>>) {
        self.observer = observer;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, used or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    fn out_of_range(&self, index: usize) -> DynArrayError {
        DynArrayError::OutOfRange {
            index,
            length: self.len,
        }
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.notify(Event::Accessed { index });
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        self.notify(Event::Accessed { index });
        let error = self.out_of_range(index);
        self.as_mut_slice().get_mut(index).ok_or(error)
    }

    /// Gets the first element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if the array is empty.
    pub fn front(&self) -> Result<&T, DynArrayError> {
        self.get(0)
    }

    /// Gets the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if the array is empty.
    pub fn back(&self) -> Result<&T, DynArrayError> {
        match self.len.checked_sub(1) {
            Some(last) => self.get(last),
            None => Err(self.out_of_range(0)),
        }
    }

    /// Removes the last element from the array.
    ///
    /// The vacated slot keeps its value until a later `push_back`
    /// overwrites it or the buffer is released.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "Cannot pop from empty array");
        self.len -= 1;
    }

    /// Tries to remove the last element from the array.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn try_pop_back(&mut self) -> Result<(), DynArrayError> {
        if self.len == 0 {
            return Err(DynArrayError::EmptyArray);
        }
        self.len -= 1;
        Ok(())
    }

    /// Releases the buffer. Capacity and length become zero.
    pub fn clear(&mut self) {
        self.adopt(Box::default());
        self.len = 0;
    }

    /// Installs `slots` as the buffer and releases the previous one.
    fn adopt(&mut self, slots: Box<[T]>) {
        let old = mem::replace(&mut self.slots, slots);
        if !old.is_empty() {
            self.notify(Event::Released {
                capacity: old.len(),
            });
        }
    }

    fn notify_allocated(&self, capacity: usize) {
        if capacity > 0 {
            self.notify(Event::Allocated { capacity });
        }
    }

    pub(crate) fn notify(&self, event: Event) {
        if let Some(observer) = &self.observer {
            observer.notify(&event);
        }
    }

    pub(crate) fn observer(&self) -> Option<Rc<dyn Observer>> {
        self.observer.clone()
    }
}

impl<T: Default, G: GrowthPolicy> DynamicArray<T, G> {
    /// Allocates exactly `capacity` default-valued slots.
    fn allocate(&self, capacity: usize) -> Result<Box<[T]>, DynArrayError> {
        let mut slots = try_vec(capacity)?;
        slots.resize_with(capacity, T::default);
        self.notify_allocated(capacity);
        Ok(slots.into_boxed_slice())
    }

    /// Creates an array of `size` default values, with no spare capacity.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the slots cannot be allocated.
    pub fn with_size(size: usize) -> Result<Self, DynArrayError> {
        let mut array = Self::new();
        array.slots = array.allocate(size)?;
        array.len = size;
        Ok(array)
    }

    /// Makes the buffer `requested` slots large, but only if the array is full.
    ///
    /// When `len() < capacity()` nothing happens, whatever `requested` is.
    /// Otherwise a new buffer of exactly `requested` slots replaces the old
    /// one and the first `min(capacity(), requested)` elements move over.
    /// A `requested` below `len()` truncates the array to `requested`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the new buffer cannot be
    /// allocated. The array is unchanged in that case.
    pub fn reserve(&mut self, requested: usize) -> Result<(), DynArrayError> {
        if self.len < self.capacity() {
            self.notify(Event::Reserved {
                requested,
                reallocated: false,
            });
            return Ok(());
        }

        let mut slots = self.allocate(requested)?;
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            mem::swap(new, old);
        }
        self.adopt(slots);
        self.len = self.len.min(requested);
        self.notify(Event::Reserved {
            requested,
            reallocated: true,
        });
        Ok(())
    }

    /// Appends `value`, growing the buffer through `G` when the array is full.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the array is full and the
    /// buffer cannot grow. The array is unchanged in that case.
    #[allow(clippy::expect_used)]
    pub fn push_back(&mut self, value: T) -> Result<(), DynArrayError> {
        let capacity = self.capacity();
        if self.len >= capacity {
            let requested = G::next_capacity(capacity)
                .filter(|&next| next > capacity)
                .ok_or(DynArrayError::AllocationError {
                    requested: usize::MAX,
                })?;
            self.reserve(requested)?;
        }

        *self
            .slots
            .get_mut(self.len)
            .expect("Capacity checked above") = value;
        self.len += 1;
        Ok(())
    }
}

impl<T: Default + Clone, G: GrowthPolicy> DynamicArray<T, G> {
    /// Creates an array of `size` copies of `value`, with no spare capacity.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the slots cannot be allocated.
    pub fn filled(size: usize, value: &T) -> Result<Self, DynArrayError> {
        let mut array = Self::with_size(size)?;
        for slot in array.as_mut_slice() {
            slot.clone_from(value);
        }
        Ok(array)
    }

    /// Creates an array holding copies of `values`.
    ///
    /// Capacity is `values.len()`; the elements are appended one by one.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the slots cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self, DynArrayError> {
        let mut array = Self::new();
        array.slots = array.allocate(values.len())?;
        for value in values {
            array.push_back(value.clone())?;
        }
        Ok(array)
    }
}

impl<T: Clone, G> DynamicArray<T, G> {
    /// Copies `source` into a new buffer of exactly `source.len()` slots.
    fn copy_slots(&self, source: &[T]) -> Result<Box<[T]>, DynArrayError> {
        let mut slots = try_vec(source.len())?;
        slots.extend_from_slice(source);
        self.notify_allocated(source.len());
        Ok(slots.into_boxed_slice())
    }

    /// Fallible `clone`: the copy's capacity equals this array's length.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynArrayError> {
        let mut copy = Self::new();
        copy.observer = self.observer();
        copy.slots = copy.copy_slots(self.as_slice())?;
        copy.len = self.len;
        copy.notify(Event::Cloned { len: copy.len });
        Ok(copy)
    }

    /// Replaces the contents with a size-tight copy of `source`.
    ///
    /// The new buffer is allocated before the old one is released. Assigning
    /// an array to itself leaves it unchanged. The observer is not copied.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the copy cannot be
    /// allocated. The array is unchanged in that case.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), DynArrayError> {
        if ptr::eq(&*self, source) {
            return Ok(());
        }

        let slots = self.copy_slots(source.as_slice())?;
        self.adopt(slots);
        self.len = source.len;
        self.notify(Event::Assigned { len: self.len });
        Ok(())
    }
}

impl<T, G> Default for DynamicArray<T, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> Drop for DynamicArray<T, G> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, G> Clone for DynamicArray<T, G> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.observer = self.observer();
        copy.slots = Box::from(self.as_slice());
        copy.len = self.len;
        copy.notify_allocated(copy.len);
        copy.notify(Event::Cloned { len: copy.len });
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        if self.assign_from(source).is_err() {
            *self = source.clone();
        }
    }
}

impl<T, G> Index<usize> for DynamicArray<T, G> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(_) => panic!("Index {index} out of bounds for array of length {}", self.len),
        }
    }
}

impl<T, G> IndexMut<usize> for DynamicArray<T, G> {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("Index {index} out of bounds for array of length {len}"),
        }
    }
}

impl<T: Default + Clone, G: GrowthPolicy> TryFrom<&[T]> for DynamicArray<T, G> {
    type Error = DynArrayError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: PartialEq, G> PartialEq for DynamicArray<T, G> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, G> Eq for DynamicArray<T, G> {}

impl<T: fmt::Debug, G> fmt::Debug for DynamicArray<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
