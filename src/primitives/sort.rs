//! In-place ascending sort of a sub-range.

use crate::primitives::search::clamp_range;

/// Sorts `buf[lo..hi]` ascending. Elements outside the range are untouched. The range is
/// clamped to the slice.
#[inline]
pub fn sort_range<T: Ord>(buf: &mut [T], lo: usize, hi: usize) {
    let (lo, hi) = clamp_range(buf.len(), lo, hi);
    if lo < hi {
        buf[lo..hi].sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_range_partial() {
        let mut buf = [9i64, 5, 1, 9, 2, 0];
        sort_range(&mut buf, 1, 5);
        assert_eq!(buf, [9, 1, 2, 5, 9, 0]);
    }

    #[test]
    fn test_sort_range_clamps_oversized_range() {
        let mut buf = [4i64, 2, 3];
        sort_range(&mut buf, 1, 99);
        assert_eq!(buf, [4, 2, 3]);
        sort_range(&mut buf, 0, 99);
        assert_eq!(buf, [2, 3, 4]);
        sort_range(&mut buf, 50, 99);
        assert_eq!(buf, [2, 3, 4]);
    }

    #[test]
    fn test_sort_range_empty_is_noop() {
        let mut buf = [3i64, 1];
        sort_range(&mut buf, 1, 1);
        sort_range(&mut buf, 2, 1);
        assert_eq!(buf, [3, 1]);
    }
}
