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

//! # Greedy Heuristic
//!
//! The density-order greedy heuristic: walk the items best-density-first and
//! include whatever still fits. Runs in a single pass since `Instance`
//! already maintains the density order. Fast and often good, but carries no
//! optimality guarantee.

use fixedbitset::FixedBitSet;
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::num::SolverNumeric;

/// Builds a feasible arrangement by greedy inclusion in density order.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
/// use rucksack_solver::greedy::greedy;
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let arrangement = greedy(&instance);
///
/// // Takes (7, 3) and (10, 5); the remaining 7 cannot hold (15, 10).
/// // The optimum is 25, so greedy is suboptimal here.
/// assert_eq!(arrangement.total_value(), 17.0);
/// ```
pub fn greedy<T>(instance: &Instance<T>) -> Arrangement<T>
where
    T: SolverNumeric,
{
    debug_assert!(
        instance.is_density_sorted(),
        "instance items must be sorted by non-increasing density"
    );

    let mut state = FixedBitSet::with_capacity(instance.num_items());
    let mut weight = T::zero();
    for (position, item) in instance.items().iter().enumerate() {
        if weight + item.weight() <= instance.capacity() {
            state.set(position, true);
            weight = weight + item.weight();
        }
    }

    Arrangement::from_state(instance, state)
}
