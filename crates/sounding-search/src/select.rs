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

//! Linear selection scans: smallest-element lookup and the in-place
//! selection sort built on top of it. Unlike the bisection in `bisect`,
//! these make no ordering assumption about their input.

use num_traits::PrimInt;

/// Returns the index of the smallest element, or `None` for an empty
/// slice.
///
/// Scans left to right; on ties the first occurrence wins.
///
/// # Examples
///
/// ```rust
/// # use sounding_search::select::smallest_index;
///
/// assert_eq!(smallest_index(&[4, 8, 0, 5]), Some(2));
/// assert_eq!(smallest_index::<i32>(&[]), None);
/// ```
#[inline]
pub fn smallest_index<T>(values: &[T]) -> Option<usize>
where
    T: PrimInt,
{
    let (&first, rest) = values.split_first()?;
    let mut smallest = first;
    let mut smallest_idx = 0;

    for (offset, &candidate) in rest.iter().enumerate() {
        if candidate < smallest {
            smallest = candidate;
            smallest_idx = offset + 1;
        }
    }

    Some(smallest_idx)
}

/// Sorts the slice in place into ascending order by selection.
///
/// Each pass swaps the smallest element of the unsorted suffix into
/// position; the swap is skipped when that element is already in place.
/// Runs in O(n²) comparisons and O(1) additional space. Not stable.
///
/// # Examples
///
/// ```rust
/// # use sounding_search::select::selection_sort;
///
/// let mut values = [4, 8, 0, 5];
/// selection_sort(&mut values);
/// assert_eq!(values, [0, 4, 5, 8]);
/// ```
pub fn selection_sort<T>(values: &mut [T])
where
    T: PrimInt,
{
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        if let Some(offset) = smallest_index(&values[i..]) {
            let min_idx = i + offset;
            if min_idx != i {
                values.swap(i, min_idx);
            }
        }
    }
}
