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

//! # Equality Bisection
//!
//! Iterative binary search over a sorted slice of primitive integers.
//! The search maintains an inclusive `[low, high]` window, probes its
//! midpoint, and halves the window on every comparison until the target
//! is hit or the window collapses. Absence is a first-class outcome
//! (`None`), never a sentinel index.

use num_traits::PrimInt;
use sounding_core::algorithm::is_sorted_ascending;

/// Searches a sorted slice for `target` by iterative bisection.
///
/// Returns `Some(index)` of an element equal to `target`, or `None` if
/// no element matches (always `None` for an empty slice). When `target`
/// occurs more than once, the returned index is whichever occurrence the
/// bisection path probes first; callers must not rely on it being the
/// lowest or highest match.
///
/// Runs in O(log n) comparisons and O(1) additional space. The midpoint
/// is computed as `low + (high - low) / 2`, which cannot overflow even
/// for windows near `usize::MAX`.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted
/// in ascending order.
///
/// # Invariants
///
/// - `values` must be sorted in non-decreasing order. This is a caller
///   obligation and is not checked in release builds; if it is violated
///   the search stays memory-safe but may report absence even though the
///   target is present.
///
/// # Examples
///
/// ```rust
/// # use sounding_search::bisect::binary_search;
///
/// let depths = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&depths, 3), Some(1));
/// assert_eq!(binary_search(&depths, -1), None);
/// ```
#[inline]
pub fn binary_search<T>(values: &[T], target: T) -> Option<usize>
where
    T: PrimInt,
{
    debug_assert!(
        is_sorted_ascending(values),
        "called `binary_search` with values that are not sorted in ascending order"
    );

    let mut low: usize = 0;
    // An empty slice has no valid `high` bound.
    let mut high = values.len().checked_sub(1)?;

    while low <= high {
        let mid = low + (high - low) / 2;
        debug_assert!(
            mid < values.len(),
            "`binary_search` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because low <= high < values.len(),
        // therefore mid < values.len()
        let guess = unsafe { *values.get_unchecked(mid) };

        if guess == target {
            return Some(mid);
        }
        if guess > target {
            // `mid == 0` here means the target is below the whole window.
            high = mid.checked_sub(1)?;
        } else {
            low = mid + 1;
        }
    }

    None
}
