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

//! # Rucksack Model
//!
//! **The Core Domain Model for the Rucksack Knapsack Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **0-1 Knapsack Problem (KP)**. It serves as the data interchange layer
//! between the problem definition (user input) and the solving engines
//! (`rucksack_bnb`, `rucksack_solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`ItemId`, `ItemIndex`) to
//!   keep stable item identities and density-order positions apart.
//! * **`item`**: The immutable `Item` value object (value, weight, identity).
//! * **`instance`**: The validated, density-sorted `Instance` consumed by
//!   every solver, plus the `Complexity` of its subset lattice.
//! * **`arrangement`**: The output format — a candidate subset of items with
//!   derived aggregate properties.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Item identity and item position are distinct types.
//!     You cannot accidentally look an item up by its identity.
//! 2.  **Fail-Fast**: `Instance::new` validates inputs eagerly so the solvers
//!     never encounter negative weights, NaNs, or an unsorted item sequence.
//! 3.  **Immutability**: Instances and arrangements never change after
//!     construction; solvers share them freely without coordination.

pub mod arrangement;
pub mod index;
pub mod instance;
pub mod item;
