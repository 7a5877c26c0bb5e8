//! Exactly-sized contiguous storage for `Copy` elements.
//!
//! [`RawBuffer`] is the storage layer underneath [`DynamicArray`](crate::DynamicArray). It
//! knows its capacity but not how many slots are live; the owner tracks that and must only
//! read slots it has written.
//!
//! Unlike `Vec::reserve`, [`RawBuffer::reallocate`] produces a buffer of *exactly* the
//! requested capacity, which is what makes the doubling and shrink-to-fit policy observable.

use core::mem::MaybeUninit;
use core::slice;

pub struct RawBuffer<T: Copy> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T: Copy> RawBuffer<T> {
    /// Allocates `capacity` uninitialized slots.
    pub fn allocate(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    /// Releases the storage. The buffer stays usable with capacity 0.
    pub fn deallocate(&mut self) {
        self.slots = Box::new_uninit_slice(0);
    }

    /// Resizes to exactly `new_capacity` slots, preserving the first
    /// `min(capacity, new_capacity)` slots. Slots past the old capacity are uninitialized.
    pub fn reallocate(&mut self, new_capacity: usize) {
        if new_capacity == self.slots.len() {
            return;
        }
        let keep = self.slots.len().min(new_capacity);
        let mut fresh: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_capacity);
        fresh[..keep].copy_from_slice(&self.slots[..keep]);
        self.slots = fresh;
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// # Safety
    /// Slot `index` must have been written since the last reallocation that could have
    /// discarded it.
    #[inline(always)]
    pub unsafe fn read(&self, index: usize) -> T {
        unsafe { self.slots[index].assume_init() }
    }

    /// Moves slots `from..end` one position right, into `from + 1..=end`.
    /// Requires `end < capacity`. Slot `from` keeps its old value.
    #[inline]
    pub fn shift_right(&mut self, from: usize, end: usize) {
        if from < end {
            self.slots.copy_within(from..end, from + 1);
        }
    }

    /// Moves slots `from + 1..end` one position left, overwriting slot `from`.
    #[inline]
    pub fn shift_left(&mut self, from: usize, end: usize) {
        if from + 1 < end {
            self.slots.copy_within(from + 1..end, from);
        }
    }

    /// Views the first `len` slots as initialized elements.
    ///
    /// # Safety
    /// Slots `0..len` must all be initialized and `len <= capacity`.
    #[inline(always)]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.slots.len());
        unsafe { slice::from_raw_parts(self.slots.as_ptr() as *const T, len) }
    }

    /// # Safety
    /// Same contract as [`RawBuffer::as_slice`].
    #[inline(always)]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.slots.len());
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, len) }
    }
}

impl<T: Copy> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        // Copies every slot, live or not, so the clone has the same capacity.
        Self {
            slots: self.slots.clone(),
        }
    }
}
