use std::collections::BinaryHeap;
use std::fmt::{Debug, Formatter, Result};

use crate::options::ArrayOptions;
use crate::vecs::dynamic_array::DynamicArray;

/// A trait for abstraction over different priority queue types.
pub trait AnyHeap<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
    fn clear(&mut self);
}

impl<T: Ord> AnyHeap<T> for BinaryHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A max-priority queue kept as a sorted [`DynamicArray`].
///
/// # Behavior
/// * **Order:** Elements are stored ascending, so the greatest is always the last slot and
///   the least is the first. Both ends can be peeked or popped.
/// * **Ties:** Equal priorities leave in the reverse order they arrived from the max end
///   and in arrival order from the min end.
/// * **Complexity:** `push` is O(log n) search plus O(n) shift. `pop` is O(1) apart from an
///   occasional shrink. `pop_min` is O(n).
///
/// # Invariants
/// * The backing array is growable and always in sorted mode.
#[derive(Clone)]
pub struct ArrayHeap<T: Copy + Ord> {
    data: DynamicArray<T>,
}

impl<T: Copy + Ord> ArrayHeap<T> {
    /// Creates an empty heap with room for one element.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty heap with room for `capacity` elements (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        match DynamicArray::with_capacity(capacity.max(1), ArrayOptions::new().sorted()) {
            Ok(data) => Self { data },
            Err(_) => unreachable!("Logic Error: non-zero capacity with default policy"),
        }
    }

    // --- Inspection ---

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns a reference to the greatest item.
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns a reference to the least item.
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Items in ascending order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    // --- Modification ---

    pub fn push(&mut self, item: T) {
        if self.data.insert_sorted(item).is_err() {
            unreachable!("Logic Error: heap storage left sorted mode");
        }
    }

    /// Removes the greatest item.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes the least item.
    pub fn pop_min(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        // Heaps built by collecting start unsorted; an empty range re-enters sorted mode.
        self.data.sort();
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        while let Some(item) = other.pop() {
            self.push(item);
        }
    }

    /// Retains only the elements specified by the predicate. Order is preserved, so no
    /// rebuild is needed.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut i = 0;
        while i < self.data.len() {
            if f(&self.data[i]) {
                i += 1;
            } else if self.data.remove(i).is_err() {
                unreachable!("Logic Error: index checked against len");
            }
        }
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        if self.data.tighten().is_err() {
            unreachable!("Logic Error: heap storage is never fixed");
        }
    }

    // --- Consumption ---

    /// Consumes the heap and returns a vector sorted from greatest to lowest.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data.into_vec();
        vec.reverse();
        vec
    }
}

impl<T: Copy + Ord> AnyHeap<T> for ArrayHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T: Copy + Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord + Debug> Debug for ArrayHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Copy + Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut data: DynamicArray<T> = iter.into_iter().collect();
        data.sort();
        Self { data }
    }
}

impl<T: Copy + Ord> Extend<T> for ArrayHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
