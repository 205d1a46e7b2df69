use std::alloc::{alloc, dealloc, realloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::GrowVecError;
use crate::iter::Iter;

/// Capacity used by [`GrowVec::new`], in element slots.
const INITIAL_CAPACITY: usize = 10;

/// A growable contiguous array over a raw heap allocation.
///
/// The first `len` slots of the allocation hold initialized elements; the
/// remaining `cap - len` slots are uninitialized. Every operation that
/// changes `len` maintains that split.
pub struct GrowVec<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> GrowVec<T> {
    /// Creates an empty `GrowVec` with the default initial capacity (10).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::ZeroSizeElement` if `T` is zero-sized, or
    /// `GrowVecError::AllocationFailed` if the backing allocation cannot
    /// be obtained. Nothing is leaked on failure.
    pub fn new() -> Result<Self, GrowVecError> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty `GrowVec` with the specified initial capacity.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::ZeroCapacity` if `capacity` is 0,
    /// `GrowVecError::ZeroSizeElement` if `T` is zero-sized,
    /// `GrowVecError::CapacityOverflow` if the allocation layout would
    /// overflow, or `GrowVecError::AllocationFailed` if the allocator
    /// cannot provide the block.
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        if mem::size_of::<T>() == 0 {
            return Err(GrowVecError::ZeroSizeElement);
        }
        if capacity == 0 {
            return Err(GrowVecError::ZeroCapacity);
        }
        let layout = Self::layout_for(capacity)?;

        // SAFETY: the layout has a nonzero size because capacity >= 1 and
        // T is not zero-sized.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(GrowVecError::AllocationFailed {
            bytes: layout.size(),
        })?;

        Ok(Self {
            ptr,
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        })
    }

    fn layout_for(capacity: usize) -> Result<Layout, GrowVecError> {
        Layout::array::<T>(capacity).map_err(|_| GrowVecError::CapacityOverflow {
            requested: capacity,
        })
    }

    /// Grows the allocation to `floor(cap * 1.5)` slots.
    ///
    /// The `max` term keeps a capacity of 1 growing; for every capacity >= 2
    /// the integer form `cap + cap / 2` equals `floor(cap * 1.5)` exactly.
    fn grow(&mut self) -> Result<(), GrowVecError> {
        let new_cap = self.cap.saturating_add((self.cap / 2).max(1));
        let new_layout = Self::layout_for(new_cap)?;
        let old_layout = Self::layout_for(self.cap)?;

        // SAFETY: ptr was allocated by this vector with old_layout, and
        // new_layout has a nonzero size. A failed realloc returns null and
        // leaves the original block untouched, so the vector stays in its
        // prior valid state.
        let raw = unsafe { realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) };
        self.ptr = NonNull::new(raw.cast::<T>()).ok_or(GrowVecError::AllocationFailed {
            bytes: new_layout.size(),
        })?;
        self.cap = new_cap;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Gets a reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the slot holds an initialized element.
        Some(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the slot holds an initialized element,
        // and &mut self guarantees exclusive access.
        Some(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// Overwrites the element at the specified index, dropping the previous
    /// value. The length does not change.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), GrowVecError> {
        if index >= self.len {
            return Err(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        // SAFETY: index < len, so the slot holds an initialized element;
        // assignment through the place drops the previous value.
        unsafe { *self.ptr.as_ptr().add(index) = value };
        Ok(())
    }

    /// Appends an element, growing the allocation first if the vector is
    /// full.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailed` or
    /// `GrowVecError::CapacityOverflow` if growth fails; the vector is left
    /// untouched in that case.
    pub fn push(&mut self, value: T) -> Result<(), GrowVecError> {
        if self.len == self.cap {
            self.grow()?;
        }
        // SAFETY: len < cap after the growth check, so the slot at len is
        // in bounds and uninitialized.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Inserts an element at the specified index, shifting everything at or
    /// after it one slot toward the tail. `index == len` behaves like
    /// [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index > len`, or a
    /// growth error as for `push` (the vector is untouched on failure).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), GrowVecError> {
        if index > self.len {
            return Err(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        if self.len == self.cap {
            self.grow()?;
        }
        // SAFETY: index <= len < cap. ptr::copy handles the overlapping
        // source and destination ranges like memmove, opening one slot at
        // index, which ptr::write then initializes.
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            ptr::write(base.add(index), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty. The element is moved out of
    /// its slot; no storage is overwritten.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the decremented length held an initialized
        // element; reading it moves ownership to the caller and the slot is
        // treated as uninitialized from here on.
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Removes and returns the element at the specified index, shifting
    /// everything after it one slot toward the head.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, GrowVecError> {
        if index >= self.len {
            return Err(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        // SAFETY: index < len. The element is moved out with ptr::read
        // before the overlapping head-ward shift reuses its slot.
        let value = unsafe {
            let base = self.ptr.as_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element. The capacity is retained.
    pub fn clear(&mut self) {
        let len = self.len;
        // The length goes to zero before the drops run, so a panicking Drop
        // impl cannot lead to a double drop.
        self.len = 0;
        // SAFETY: the first len slots held initialized elements and each is
        // dropped exactly once.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len)) };
    }

    /// Views the initialized elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first len slots are initialized and properly aligned,
        // and the borrow keeps the allocation alive.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Views the initialized elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with exclusivity from &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
        // The layout computation succeeded when the block was allocated, so
        // it cannot fail here.
        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY: ptr was allocated by this vector with exactly this
            // layout, and no element remains initialized after clear.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// SAFETY: GrowVec owns its elements like a Box<[T]> does; moving or sharing
// the vector across threads is exactly as safe as for the element type.
unsafe impl<T: Send> Send for GrowVec<T> {}
// SAFETY: shared access only hands out &T.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
