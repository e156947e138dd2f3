// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;

/// Checks whether the given values are sorted in non-decreasing order.
///
/// Empty and single-element slices are trivially sorted. Equal adjacent
/// values are allowed.
///
/// # Examples
///
/// ```rust
/// # use sounding_core::algorithm::is_sorted_ascending;
///
/// assert!(is_sorted_ascending(&[1, 3, 3, 7]));
/// assert!(!is_sorted_ascending(&[3, 1, 7]));
/// ```
#[inline(always)]
pub fn is_sorted_ascending<T>(values: &[T]) -> bool
where
    T: PrimInt,
{
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Lower bound search for the first element that is `>= key`.
///
/// Returns `values.len()` if every element is smaller than `key`. When
/// `key` is present, the returned index is its first occurrence.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted
/// in ascending order.
///
/// # Invariants
///
/// - `values` must be sorted in ascending order.
#[inline(always)]
pub fn lower_bound<T>(values: &[T], key: T) -> usize
where
    T: PrimInt,
{
    debug_assert!(
        is_sorted_ascending(values),
        "called `lower_bound` with values that are not sorted in ascending order"
    );

    let mut lo: usize = 0;
    let mut hi: usize = values.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < values.len(),
            "`lower_bound` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= values.len(),
        // therefore mid < values.len()
        if unsafe { *values.get_unchecked(mid) } < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_is_sorted_ascending_empty() {
        let v: Vec<IntegerType> = vec![];
        assert!(is_sorted_ascending(&v));
    }

    #[test]
    fn test_is_sorted_ascending_single() {
        assert!(is_sorted_ascending(&[42]));
    }

    #[test]
    fn test_is_sorted_ascending_true_with_duplicates() {
        assert!(is_sorted_ascending(&[1, 1, 2, 3, 3, 3, 9]));
    }

    #[test]
    fn test_is_sorted_ascending_false_unsorted() {
        assert!(!is_sorted_ascending(&[1, 3, 2]));
    }

    #[test]
    fn test_is_sorted_ascending_false_descending() {
        assert!(!is_sorted_ascending(&[9, 7, 5, 3, 1]));
    }

    #[test]
    fn test_lower_bound_basic() {
        let v: Vec<IntegerType> = vec![1, 3, 5, 7, 9];
        assert_eq!(lower_bound(&v, 0), 0);
        assert_eq!(lower_bound(&v, 1), 0);
        assert_eq!(lower_bound(&v, 2), 1); // first element >= 2 is 3 at index 1
        assert_eq!(lower_bound(&v, 5), 2);
        assert_eq!(lower_bound(&v, 8), 4); // first element >= 8 is 9 at index 4
        assert_eq!(lower_bound(&v, 9), 4);
        assert_eq!(lower_bound(&v, 10), 5);
    }

    #[test]
    fn test_lower_bound_empty() {
        let v: Vec<IntegerType> = vec![];
        assert_eq!(lower_bound(&v, 5), 0);
    }

    #[test]
    fn test_lower_bound_duplicates_first_occurrence() {
        let v: Vec<IntegerType> = vec![1, 2, 2, 2, 4];
        assert_eq!(lower_bound(&v, 2), 1);
        assert_eq!(lower_bound(&v, 3), 4);
    }
}
