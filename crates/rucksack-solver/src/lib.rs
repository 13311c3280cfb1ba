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

//! # Rucksack Solver
//!
//! **The solver facade of the Rucksack knapsack toolkit.**
//!
//! This crate bundles the alternative solving strategies behind one uniform
//! entry point and adds the analysis tools that operate on their results.
//!
//! ## Submodules
//!
//! - `solver`: The `SolveMethod` enum and the `solve` dispatch function.
//! - `brute_force`: Exhaustive subset enumeration with feasibility, terminal,
//!   and optimality classification.
//! - `greedy`: The density-order greedy heuristic.
//! - `external`: An adapter for plugging in out-of-process exact engines.
//! - `metrics`: Solution-quality metrics such as the Sahni-k value.

pub mod brute_force;
pub mod external;
pub mod greedy;
pub mod metrics;
pub mod solver;
