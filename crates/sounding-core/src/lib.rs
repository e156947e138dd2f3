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

//! # Sounding Core
//!
//! Foundational ordering primitives for the Sounding search crates. This
//! crate consolidates the small, reusable building blocks the
//! higher-level search crate leans on: sortedness predicates used to
//! state preconditions, and insertion-point queries over sorted slices.
//!
//! ## Modules
//!
//! - `algorithm`: Sortedness predicates (`is_sorted_ascending`) and a
//!   half-open lower bound search (`lower_bound`) over sorted slices,
//!   generic over primitive integers.
//!
//! ## Purpose
//!
//! Search code is only as trustworthy as the order assumptions it rests
//! on. Keeping the order predicates and bound queries in one crate lets
//! debug builds check those assumptions uniformly while release builds
//! pay nothing for them.
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
