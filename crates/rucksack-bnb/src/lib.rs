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

//! # Rucksack BnB
//!
//! **Best-first branch-and-bound engine for the 0-1 Knapsack Problem.**
//!
//! The engine explores the binary prefix-decision tree of a density-sorted
//! instance, ordered by a fractional relaxation bound, and reports the
//! arrangements realizing the `n` best distinct objective values. With the
//! default `n = 1` it returns every arrangement tied for the optimum.
//!
//! ## Submodules
//!
//! - `bound`: The fractional relaxation upper bound.
//! - `frontier`: The arena-backed best-first priority frontier.
//! - `tiers`: Tracking of the `n` best distinct objective values.
//! - `bnb`: The `BnbSolver` engine and its solve options.
//! - `result`: Outcome and termination-reason types.
//! - `stats`: Per-run search statistics.

pub mod bnb;
pub mod bound;
pub mod frontier;
pub mod result;
pub mod stats;
pub mod tiers;
