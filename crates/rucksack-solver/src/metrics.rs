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

//! # Solution Metrics
//!
//! Quality metrics over arrangements. Currently this is the Sahni-k value:
//! the size of the smallest subset of an arrangement's items that, when
//! fixed up front and completed greedily in density order, reproduces the
//! arrangement exactly. An arrangement with `k = 0` is what plain greedy
//! finds; larger `k` measures how far the arrangement is from greedy
//! reachability.

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::num::SolverNumeric;

/// Fixes the seed positions, then greedily includes whatever else fits in
/// density order.
fn greedy_completion<T>(instance: &Instance<T>, seed: &[usize]) -> FixedBitSet
where
    T: SolverNumeric,
{
    let mut state = FixedBitSet::with_capacity(instance.num_items());
    let mut weight = T::zero();
    for &position in seed {
        state.set(position, true);
        weight = weight + instance.items()[position].weight();
    }

    for (position, item) in instance.items().iter().enumerate() {
        if state.contains(position) {
            continue;
        }
        if weight + item.weight() <= instance.capacity() {
            state.set(position, true);
            weight = weight + item.weight();
        }
    }
    state
}

/// Computes the Sahni-k value of an arrangement.
///
/// Seeds of increasing size are drawn from the arrangement's own items, so
/// the search space is `2^m` over the `m` included items rather than the
/// whole instance.
///
/// The metric is only defined for arrangements that greedy completion can
/// reproduce at all. When it cannot (the completion can still extend the
/// arrangement with an item that fits), `num_included` is returned as the
/// saturated upper bound. Note the empty arrangement on an instance with
/// room left yields `0` through this fallback, the same value a genuinely
/// greedy-reachable arrangement gets.
///
/// # Panics
///
/// Panics if `arrangement` was not built over `instance` (differing item
/// counts).
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
/// use rucksack_solver::{greedy::greedy, metrics::sahni_k};
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let arrangement = greedy(&instance);
/// assert_eq!(sahni_k(&arrangement, &instance), 0);
/// ```
pub fn sahni_k<T>(arrangement: &Arrangement<T>, instance: &Instance<T>) -> usize
where
    T: SolverNumeric,
{
    assert!(
        arrangement.state().len() == instance.num_items(),
        "called `sahni_k` with an arrangement over {} items for an instance with {} items",
        arrangement.state().len(),
        instance.num_items()
    );

    let positions: Vec<usize> = arrangement.state().ones().collect();
    for k in 0..=positions.len() {
        for seed in positions.iter().copied().combinations(k) {
            if &greedy_completion(instance, &seed) == arrangement.state() {
                return k;
            }
        }
    }
    arrangement.num_included()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brute_force::brute_force, greedy::greedy};

    fn instance() -> Instance<f64> {
        Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap()
    }

    #[test]
    fn test_greedy_arrangement_has_k_zero() {
        let instance = instance();
        let arrangement = greedy(&instance);
        assert_eq!(sahni_k(&arrangement, &instance), 0);
    }

    #[test]
    fn test_optimum_needs_both_items_fixed() {
        let instance = instance();
        let optimal = brute_force(&instance).into_optimal().remove(0);

        // The optimum excludes the densest item, so no single fixed item
        // survives the greedy completion; both must be fixed.
        assert_eq!(optimal.total_value(), 25.0);
        assert_eq!(sahni_k(&optimal, &instance), 2);
    }

    #[test]
    fn test_empty_arrangement_on_zero_capacity() {
        let instance = Instance::from_entries(&[(5.0f64, 3.0)], 0.0).unwrap();
        let arrangement = Arrangement::empty(&instance);
        assert_eq!(sahni_k(&arrangement, &instance), 0);
    }

    #[test]
    fn test_unreachable_empty_arrangement_falls_back_to_zero() {
        // The empty arrangement cannot be greedily reproduced when items
        // still fit, and it has no items to fix, so the fallback yields 0.
        let instance = instance();
        let arrangement = Arrangement::empty(&instance);
        assert_eq!(sahni_k(&arrangement, &instance), 0);
    }

    #[test]
    fn test_unreachable_arrangement_falls_back_to_num_included() {
        // Excluding the zero-weight item can never survive greedy
        // completion (it always fits), so no seed reproduces this
        // arrangement and the fallback returns the included count.
        let instance = Instance::from_entries(&[(1.0f64, 0.0), (10.0, 5.0)], 5.0).unwrap();
        let mut state = FixedBitSet::with_capacity(2);
        state.set(1, true);
        let arrangement = Arrangement::from_state(&instance, state);
        assert_eq!(sahni_k(&arrangement, &instance), 1);
    }

    #[test]
    fn test_k_never_exceeds_num_included() {
        let instance = instance();
        for arrangement in brute_force(&instance).feasible() {
            assert!(sahni_k(arrangement, &instance) <= arrangement.num_included());
        }
    }
}
