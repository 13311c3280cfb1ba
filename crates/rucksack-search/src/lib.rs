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

//! # Rucksack Search
//!
//! **Shared search infrastructure for the Rucksack solving engines.**
//!
//! This crate hosts the pieces that every engine needs but none owns: the
//! numeric trait bound the engines are generic over, and the monitor
//! machinery used to observe and control a running search.
//!
//! ## Submodules
//!
//! - `num`: The `SolverNumeric` trait alias bundling the float, conversion,
//!   and formatting bounds required by the engines.
//! - `monitor`: Lifecycle observers (`SearchMonitor<T>`) with a termination
//!   channel (`SearchCommand`), plus ready-made monitors.

pub mod monitor;
pub mod num;
