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

//! # Sounding Search
//!
//! Search primitives over sorted sequences of integers. The centerpiece
//! is an iterative equality bisection that reports a matching index or a
//! distinct absent marker; alongside it live the linear selection scans
//! of the same family.
//!
//! ## Modules
//!
//! - `bisect`: Iterative binary search over a sorted slice, returning
//!   `Option<usize>` so that absence never collides with a valid index.
//! - `select`: Smallest-element scan and in-place selection sort for
//!   unsorted inputs.
//!
//! ## Usage
//!
//! ```rust
//! use sounding_search::bisect::binary_search;
//!
//! let depths = [1, 3, 5, 7, 9];
//! assert_eq!(binary_search(&depths, 3), Some(1));
//! assert_eq!(binary_search(&depths, -1), None);
//! ```

pub mod bisect;
pub mod select;
