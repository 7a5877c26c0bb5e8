//! Growable contiguous array with sorted and fixed-capacity modes.
//!
//! Provides [`DynamicArray`]: one exactly-sized buffer plus a logical length. The same
//! value can serve as a stack (`append`/`pop`), a queue (`append`/`pop_front`) or an
//! ordered priority structure (`insert_sorted`/`location_of`).
//!
//! # Modes
//!
//! | Mode | Set | Effect |
//! |------|-----|--------|
//! | sorted | at construction, by [`DynamicArray::sort`], by sorted inserts | enables `insert_sorted`, `insert_sorted_unique`, `location_of` |
//! | fixed | at construction only | capacity never changes; `append`, `prepend`, `tighten`, `reallocate` are rejected |
//!
//! Any order-agnostic insert (`insert_at`, `append`, `prepend`) clears the sorted flag.
//! Removal preserves relative order and leaves the flag alone.
//!
//! # Capacity policy
//!
//! ```text
//! insert on full growable array: capacity = capacity * growth_factor   (default 2)
//! after remove on growable array: if len < capacity / shrink_divisor   (default 4)
//!                                      capacity = len
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;
use core::slice;

use tracing::{debug, trace, warn};

use crate::error::{ArrayError, Result};
use crate::options::{ArrayOptions, CapacityPolicy};
use crate::primitives::{RawBuffer, binary_search, interval_search, sort_range};
use crate::vecs::any_vec::AnyVec;

/// A contiguous array of `Copy` elements with an explicit capacity policy.
///
/// # Safety Invariants
/// * `len <= buffer.capacity()`.
/// * Slots `0..len` of `buffer` are initialized.
/// * If `sorted`, `buffer[0..len]` is non-decreasing.
/// * If `fixed`, `buffer.capacity()` only changes through [`DynamicArray::release`].
#[derive(Clone)]
pub struct DynamicArray<T: Copy> {
    buffer: RawBuffer<T>,
    len: usize,
    sorted: bool,
    fixed: bool,
    created_sorted: bool,
    policy: CapacityPolicy,
}

impl<T: Copy> DynamicArray<T> {
    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// Fails with `InvalidCapacity` when `capacity == 0`, or `InvalidPolicy` when the
    /// options carry an unusable growth policy.
    ///
    /// ```rust
    /// use dynamic_array::{ArrayOptions, DynamicArray};
    ///
    /// let arr: DynamicArray<i64> = DynamicArray::with_capacity(10, ArrayOptions::new()).unwrap();
    /// assert_eq!(arr.capacity(), 10);
    /// assert!(arr.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize, options: ArrayOptions) -> Result<Self> {
        if capacity == 0 {
            return Err(ArrayError::InvalidCapacity { capacity });
        }
        options.policy.validate()?;
        Ok(Self::from_parts(RawBuffer::allocate(capacity), 0, options))
    }

    fn from_parts(buffer: RawBuffer<T>, len: usize, options: ArrayOptions) -> Self {
        trace!(
            capacity = buffer.capacity(),
            len,
            sorted = options.sorted,
            fixed = options.fixed,
            "dynamic array created"
        );
        Self {
            buffer,
            len,
            sorted: options.sorted,
            fixed: options.fixed,
            created_sorted: options.sorted,
            policy: options.policy,
        }
    }

    // --- Inspection ---

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline(always)]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    #[inline(always)]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { self.buffer.as_slice(self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    // --- Order-agnostic insertion ---

    /// Appends `value` after the last element. Growable arrays only.
    pub fn append(&mut self, value: T) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::FixedCapacity { operation: "append" });
        }
        self.insert_at(self.len, value).map(|_| ())
    }

    /// Inserts `value` before the first element. Growable arrays only.
    pub fn prepend(&mut self, value: T) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::FixedCapacity {
                operation: "prepend",
            });
        }
        self.insert_at(0, value).map(|_| ())
    }

    /// Inserts `value` at `position`, shifting later elements right, and clears the
    /// sorted flag.
    ///
    /// `position` must lie in `0..=len`. A growable array grows by its policy's factor
    /// when full. A fixed array additionally requires `position < capacity`; when it is
    /// already full the last element falls off the end and is returned as `Some(dropped)`.
    ///
    /// ```rust
    /// use dynamic_array::{ArrayOptions, DynamicArray};
    ///
    /// let mut arr = DynamicArray::from_values(&[1i64, 2, 3], None, ArrayOptions::new().fixed()).unwrap();
    /// assert_eq!(arr.insert_at(0, 0).unwrap(), Some(3));
    /// assert_eq!(arr.as_slice(), &[0, 1, 2]);
    /// ```
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<Option<T>> {
        if position > self.len {
            return Err(ArrayError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }

        let capacity = self.capacity();
        let mut dropped = None;
        if self.fixed {
            if position >= capacity {
                return Err(ArrayError::BeyondFixedCapacity { position, capacity });
            }
            if self.len < capacity {
                self.buffer.shift_right(position, self.len);
                self.len += 1;
            } else {
                let tail = unsafe { self.buffer.read(capacity - 1) };
                warn!(capacity, position, "fixed array full, discarding last element");
                self.buffer.shift_right(position, capacity - 1);
                dropped = Some(tail);
            }
        } else {
            if capacity < self.len + 1 {
                self.grow(self.len + 1);
            }
            self.buffer.shift_right(position, self.len);
            self.len += 1;
        }

        self.buffer.write(position, value);
        self.sorted = false;
        Ok(dropped)
    }

    #[inline(never)]
    fn grow(&mut self, required: usize) {
        let from = self.capacity();
        let to = self.policy.grown(from, required);
        debug!(from, to, len = self.len, "growing dynamic array");
        self.buffer.reallocate(to);
    }

    // --- Removal ---

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// A growable array whose length drops below `capacity / shrink_divisor` is shrunk
    /// to fit. The sorted flag is preserved.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let value = unsafe { self.buffer.read(index) };
        self.buffer.shift_left(index, self.len);
        self.len -= 1;

        if !self.fixed && self.policy.should_shrink(self.len, self.capacity()) {
            debug!(
                from = self.capacity(),
                to = self.len,
                "shrinking dynamic array"
            );
            self.buffer.reallocate(self.len);
        }
        Ok(value)
    }

    /// Removes the last element (stack pop).
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.remove(self.len - 1).ok()
    }

    /// Removes the first element (queue dequeue).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.remove(0).ok()
    }

    /// Forgets every element. Capacity is kept. An array created sorted re-enters sorted
    /// mode, since an empty range is trivially ordered.
    pub fn clear(&mut self) {
        self.len = 0;
        self.sorted = self.created_sorted;
    }

    // --- Capacity management ---

    /// Resizes the buffer to exactly `new_capacity` slots.
    ///
    /// Elements past `new_capacity` are discarded and the length is clamped to match.
    /// Rejected on fixed arrays.
    pub fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::FixedCapacity {
                operation: "reallocate",
            });
        }
        debug!(from = self.capacity(), to = new_capacity, "reallocating dynamic array");
        self.buffer.reallocate(new_capacity);
        self.len = self.len.min(new_capacity);
        Ok(())
    }

    /// Shrinks the capacity to the current length.
    pub fn tighten(&mut self) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::FixedCapacity {
                operation: "tighten",
            });
        }
        self.reallocate(self.len)
    }

    /// Frees the buffer. The array is left empty, unsorted and with zero capacity.
    pub fn release(&mut self) {
        debug!(from = self.capacity(), "releasing dynamic array");
        self.buffer.deallocate();
        self.len = 0;
        self.sorted = false;
    }

    // --- Interop ---

    pub fn into_vec(self) -> std::vec::Vec<T> {
        self.as_slice().to_vec()
    }

    pub fn eq_any<V: AnyVec<T> + ?Sized>(&self, other: &V) -> bool
    where
        T: PartialEq,
    {
        self.as_slice() == other.as_slice()
    }

    /// Appends every element of `other` in order. Growable arrays only.
    pub fn extend_from_any<V: AnyVec<T> + ?Sized>(&mut self, other: &V) -> Result<()> {
        if self.fixed {
            return Err(ArrayError::FixedCapacity {
                operation: "extend",
            });
        }
        for &value in other.iter() {
            self.append(value)?;
        }
        Ok(())
    }
}

impl<T: Copy + Ord> DynamicArray<T> {
    /// Creates an array holding a copy of `values`.
    ///
    /// `capacity` defaults to `values.len()` and must not be smaller. An explicit capacity
    /// of 0, or a fixed array that would end up with 0 slots, fails with `InvalidCapacity`.
    /// In sorted mode the copied range is sorted ascending before the array is returned.
    ///
    /// ```rust
    /// use dynamic_array::{ArrayOptions, DynamicArray};
    ///
    /// let arr = DynamicArray::from_values(&[5i64, 1, 9, 2], None, ArrayOptions::new().sorted()).unwrap();
    /// assert_eq!(arr.as_slice(), &[1, 2, 5, 9]);
    /// ```
    pub fn from_values<V: AnyVec<T> + ?Sized>(
        values: &V,
        capacity: Option<usize>,
        options: ArrayOptions,
    ) -> Result<Self> {
        let values = values.as_slice();
        if capacity == Some(0) {
            return Err(ArrayError::InvalidCapacity { capacity: 0 });
        }
        let capacity = capacity.unwrap_or(values.len());
        if options.fixed && capacity == 0 {
            return Err(ArrayError::InvalidCapacity { capacity });
        }
        if capacity < values.len() {
            return Err(ArrayError::CapacityTooSmall {
                capacity,
                required: values.len(),
            });
        }
        options.policy.validate()?;

        let mut buffer = RawBuffer::allocate(capacity);
        for (i, &value) in values.iter().enumerate() {
            buffer.write(i, value);
        }
        if options.sorted {
            sort_range(unsafe { buffer.as_mut_slice(values.len()) }, 0, values.len());
        }
        Ok(Self::from_parts(buffer, values.len(), options))
    }

    fn require_sorted(&self, operation: &'static str) -> Result<()> {
        if self.sorted {
            Ok(())
        } else {
            Err(ArrayError::NotSorted { operation })
        }
    }

    /// Inserts `value` at the position that keeps the array ascending and returns that
    /// position. Equal elements stay in front of the new one.
    pub fn insert_sorted(&mut self, value: T) -> Result<usize> {
        self.require_sorted("sorted insert")?;
        let found = interval_search(self.as_slice(), &value, 0, self.len);
        self.insert_at(found.insert_at, value)?;
        self.sorted = true;
        Ok(found.insert_at)
    }

    /// Like [`insert_sorted`](Self::insert_sorted) but a no-op returning `Ok(None)` when
    /// an equal element is already present.
    pub fn insert_sorted_unique(&mut self, value: T) -> Result<Option<usize>> {
        self.require_sorted("sorted insert")?;
        let found = interval_search(self.as_slice(), &value, 0, self.len);
        if found.found.is_some() {
            return Ok(None);
        }
        self.insert_at(found.insert_at, value)?;
        self.sorted = true;
        Ok(Some(found.insert_at))
    }

    /// Returns the index of an element equal to `value`, or `None` if absent.
    pub fn location_of(&self, value: &T) -> Result<Option<usize>> {
        self.require_sorted("location_of")?;
        Ok(binary_search(self.as_slice(), value, 0, self.len))
    }

    pub fn contains(&self, value: &T) -> Result<bool> {
        Ok(self.location_of(value)?.is_some())
    }

    /// Removes one element equal to `value`. Returns whether anything was removed.
    pub fn remove_value(&mut self, value: &T) -> Result<bool> {
        match self.location_of(value)? {
            Some(index) => {
                self.remove(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sorts the live elements ascending and enters sorted mode.
    pub fn sort(&mut self) {
        let len = self.len;
        sort_range(unsafe { self.buffer.as_mut_slice(len) }, 0, len);
        self.sorted = true;
    }
}

impl<T: Copy> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: Copy> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::from_parts(RawBuffer::allocate(1), 0, ArrayOptions::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: Copy + PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq> Eq for DynamicArray<T> {}

impl<T: Copy + Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy> core::ops::Index<usize> for DynamicArray<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<T: Copy> FromIterator<T> for DynamicArray<T> {
    /// Collects into a growable, unsorted array.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut arr = Self::from_parts(
            RawBuffer::allocate(lower.max(1)),
            0,
            ArrayOptions::default(),
        );
        for value in iter {
            if arr.capacity() == arr.len {
                arr.grow(arr.len + 1);
            }
            arr.buffer.write(arr.len, value);
            arr.len += 1;
        }
        arr
    }
}

impl<'a, T: Copy> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: insert_at matches Vec::insert and clears the sorted flag
        #[test]
        fn insert_at_matches_model(
            values in prop::collection::vec(any::<i64>(), 0..32),
            seed in any::<usize>(),
            v in any::<i64>(),
        ) {
            let mut arr = DynamicArray::from_values(&values, None, ArrayOptions::new().sorted()).unwrap();
            let mut model = arr.as_slice().to_vec();
            let pos = seed % (model.len() + 1);

            arr.insert_at(pos, v).unwrap();
            model.insert(pos, v);

            prop_assert_eq!(arr.as_slice(), model.as_slice());
            prop_assert_eq!(arr[pos], v);
            prop_assert!(!arr.is_sorted());
        }

        /// Property: remove takes exactly the indexed element and keeps the rest in order
        #[test]
        fn remove_matches_model(
            values in prop::collection::vec(any::<i64>(), 1..32),
            seed in any::<usize>(),
        ) {
            let mut arr = DynamicArray::from_values(&values, None, ArrayOptions::new()).unwrap();
            let mut model = values.clone();
            let idx = seed % model.len();

            prop_assert_eq!(arr.remove(idx).unwrap(), model.remove(idx));
            prop_assert_eq!(arr.as_slice(), model.as_slice());
        }

        /// Property: a full growable array doubles on insert
        #[test]
        fn full_growable_doubles(values in prop::collection::vec(any::<i64>(), 1..32), v in any::<i64>()) {
            let mut arr = DynamicArray::from_values(&values, None, ArrayOptions::new()).unwrap();
            let before = arr.capacity();
            prop_assert_eq!(before, arr.len());
            arr.append(v).unwrap();
            prop_assert_eq!(arr.capacity(), 2 * before);
        }

        /// Property: after remove, quarter utilization means capacity == len
        #[test]
        fn remove_shrinks_at_quarter(
            values in prop::collection::vec(any::<i64>(), 1..16),
            extra in 0usize..64,
            seed in any::<usize>(),
        ) {
            let capacity = values.len() + extra;
            let mut arr = DynamicArray::from_values(&values, Some(capacity), ArrayOptions::new()).unwrap();
            arr.remove(seed % values.len()).unwrap();
            if arr.len() < capacity / 4 {
                prop_assert_eq!(arr.capacity(), arr.len());
            } else {
                prop_assert_eq!(arr.capacity(), capacity);
            }
        }

        /// Property: sorted inserts keep the array non-decreasing; unique inserts are idempotent
        #[test]
        fn sorted_inserts_stay_sorted(ops in prop::collection::vec((any::<bool>(), -50i64..50), 0..64)) {
            let mut arr: DynamicArray<i64> = DynamicArray::with_capacity(1, ArrayOptions::new().sorted()).unwrap();
            for (unique, v) in ops {
                if unique {
                    let had = arr.contains(&v).unwrap();
                    let before = arr.len();
                    let pos = arr.insert_sorted_unique(v).unwrap();
                    prop_assert_eq!(pos.is_none(), had);
                    prop_assert_eq!(arr.len(), if had { before } else { before + 1 });
                } else {
                    arr.insert_sorted(v).unwrap();
                }
                prop_assert!(arr.is_sorted());
                prop_assert!(arr.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
        }

        /// Property: location_of finds present values and misses absent ones without mutating
        #[test]
        fn location_of_agrees_with_contains(
            values in prop::collection::vec(-20i64..20, 0..32),
            probe in -25i64..25,
        ) {
            let arr = DynamicArray::from_values(&values, None, ArrayOptions::new().sorted()).unwrap();
            let snapshot = arr.clone();
            match arr.location_of(&probe).unwrap() {
                Some(k) => prop_assert_eq!(arr[k], probe),
                None => prop_assert!(!values.contains(&probe)),
            }
            prop_assert_eq!(&arr, &snapshot);
            prop_assert_eq!(arr.capacity(), snapshot.capacity());
        }

        /// Property: fixed arrays never change capacity
        #[test]
        fn fixed_capacity_is_invariant(
            capacity in 1usize..16,
            ops in prop::collection::vec((any::<bool>(), any::<usize>(), any::<i64>()), 0..64),
        ) {
            let mut arr: DynamicArray<i64> = DynamicArray::with_capacity(capacity, ArrayOptions::new().fixed()).unwrap();
            let mut model: Vec<i64> = Vec::new();
            for (insert, seed, v) in ops {
                if insert {
                    let pos = seed % (model.len() + 1);
                    let result = arr.insert_at(pos, v);
                    if pos >= capacity {
                        prop_assert_eq!(
                            result,
                            Err(ArrayError::BeyondFixedCapacity { position: pos, capacity })
                        );
                    } else {
                        model.insert(pos, v);
                        let dropped = if model.len() > capacity { model.pop() } else { None };
                        prop_assert_eq!(result, Ok(dropped));
                    }
                } else if !model.is_empty() {
                    let idx = seed % model.len();
                    prop_assert_eq!(arr.remove(idx).unwrap(), model.remove(idx));
                }
                prop_assert_eq!(arr.as_slice(), model.as_slice());
                prop_assert_eq!(arr.capacity(), capacity);
                prop_assert!(arr.len() <= capacity);
            }
            prop_assert!(arr.append(0).is_err());
            prop_assert!(arr.prepend(0).is_err());
            prop_assert!(arr.tighten().is_err());
        }
    }
}
