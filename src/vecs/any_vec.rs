use core::slice;

use crate::vecs::dynamic_array::DynamicArray;

/// A trait generalizing any contiguous sequence that can be viewed as a slice.
///
/// Lets [`DynamicArray::from_values`], [`DynamicArray::eq_any`] and
/// [`DynamicArray::extend_from_any`] accept a `Vec`, an array, a slice or another
/// `DynamicArray` without converting first.
pub trait AnyVec<T> {
    fn as_slice(&self) -> &[T];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> AnyVec<T> for std::vec::Vec<T> {
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AnyVec<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AnyVec<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy> AnyVec<T> for DynamicArray<T> {
    fn as_slice(&self) -> &[T] {
        DynamicArray::as_slice(self)
    }
}
