//! Lookups over an ascending sub-range `lo..hi` of a slice.
//!
//! All returned indices are absolute (relative to the whole slice, not to `lo`). Ranges
//! are clamped to the slice, so an oversized `hi` never panics.

use core::cmp::Ordering;

/// Result of [`interval_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalMatch {
    /// Index of an element equal to the probe, if any.
    pub found: Option<usize>,
    /// Index of the greatest element `<= probe`; `None` when every element is greater.
    pub low_bound: Option<usize>,
    /// Position at which the probe keeps the range ascending. Equal elements stay in
    /// front of it, so repeated inserts of the same value are first-in first-out.
    pub insert_at: usize,
}

/// Narrows `lo..hi` to lie within `0..len`, keeping `lo <= hi`.
#[inline]
pub(crate) fn clamp_range(len: usize, lo: usize, hi: usize) -> (usize, usize) {
    let hi = hi.min(len);
    (lo.min(hi), hi)
}

/// Returns the index of some element equal to `value` in `buf[lo..hi]`, or `None`.
pub fn binary_search<T: Ord>(buf: &[T], value: &T, lo: usize, hi: usize) -> Option<usize> {
    let (lo, hi) = clamp_range(buf.len(), lo, hi);
    if lo >= hi {
        return None;
    }
    buf[lo..hi].binary_search(value).ok().map(|i| lo + i)
}

/// Locates both the bracket around `value` and the insertion point in `buf[lo..hi]`.
///
/// ```text
/// buf      = [10, 20, 20, 30]
/// probe 20 -> found = Some(2), low_bound = Some(2), insert_at = 3
/// probe 25 -> found = None,    low_bound = Some(2), insert_at = 3
/// probe  5 -> found = None,    low_bound = None,    insert_at = 0
/// ```
pub fn interval_search<T: Ord>(buf: &[T], value: &T, lo: usize, hi: usize) -> IntervalMatch {
    let (lo, hi) = clamp_range(buf.len(), lo, hi);
    let insert_at = lo + buf[lo..hi].partition_point(|x| x.cmp(value) != Ordering::Greater);
    let low_bound = if insert_at > lo {
        Some(insert_at - 1)
    } else {
        None
    };
    let found = low_bound.filter(|&i| buf[i] == *value);
    IntervalMatch {
        found,
        low_bound,
        insert_at,
    }
}
