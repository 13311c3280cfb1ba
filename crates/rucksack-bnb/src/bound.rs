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

//! # Fractional Relaxation Bound
//!
//! The upper bound that drives both the best-first ordering and the pruning
//! of the branch-and-bound engine. Relaxing the 0-1 constraint to allow one
//! fractional item yields the classic linear-relaxation bound: take the
//! undecided items greedily in density order and split the first item that
//! no longer fits.
//!
//! The bound is admissible only because `Instance` guarantees its items are
//! sorted by non-increasing density. On an unsorted sequence the greedy
//! prefix is not the relaxation optimum and the "bound" could undercut true
//! completions, causing incorrect pruning.

use rucksack_model::item::Item;
use rucksack_search::num::SolverNumeric;

/// Computes an upper bound on the total value of any completion of a node.
///
/// The node has decided items `0..level` in density order, accumulating
/// `weight` and `value` over the included ones. Items `level..` are undecided
/// and are packed fractionally into the remaining capacity.
///
/// Returns negative infinity if `weight` already exceeds `capacity`, so
/// infeasible nodes sink below every feasible one.
///
/// # Examples
///
/// ```rust
/// use rucksack_bnb::bound::upper_bound;
/// use rucksack_model::instance::Instance;
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let root = upper_bound(instance.items(), instance.capacity(), 0, 0.0, 0.0);
/// // Take (7, 3) and (10, 5) whole, then 7/10 of (15, 10): 7 + 10 + 10.5.
/// assert_eq!(root, 27.5);
/// ```
pub fn upper_bound<T>(items: &[Item<T>], capacity: T, level: usize, weight: T, value: T) -> T
where
    T: SolverNumeric,
{
    if weight > capacity {
        return T::neg_infinity();
    }

    let mut bound = value;
    let mut remaining = capacity - weight;
    for item in &items[level..] {
        if item.weight() <= remaining {
            remaining = remaining - item.weight();
            bound = bound + item.value();
        } else {
            // item.weight() > remaining >= 0, so the division is well-defined.
            bound = bound + item.value() * (remaining / item.weight());
            break;
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rucksack_model::instance::Instance;

    fn instance() -> Instance<f64> {
        Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap()
    }

    #[test]
    fn test_root_bound_splits_first_overflowing_item() {
        let instance = instance();
        let bound = upper_bound(instance.items(), instance.capacity(), 0, 0.0, 0.0);
        assert_eq!(bound, 27.5);
    }

    #[test]
    fn test_bound_at_leaf_level_is_the_node_value() {
        let instance = instance();
        let bound = upper_bound(instance.items(), instance.capacity(), 3, 8.0, 17.0);
        assert_eq!(bound, 17.0);
    }

    #[test]
    fn test_overweight_node_gets_negative_infinity() {
        let instance = instance();
        let bound = upper_bound(instance.items(), instance.capacity(), 1, 16.0, 7.0);
        assert!(bound.is_infinite() && bound < 0.0);
    }

    #[test]
    fn test_bound_when_everything_fits_is_the_total_value() {
        let instance = Instance::from_entries(&[(10.0f64, 5.0), (7.0, 3.0)], 100.0).unwrap();
        let bound = upper_bound(instance.items(), instance.capacity(), 0, 0.0, 0.0);
        assert_eq!(bound, 17.0);
    }

    #[test]
    fn test_bound_with_zero_remaining_capacity() {
        let instance = instance();
        // All capacity used at level 1; no undecided item fits even fractionally
        // at weight > 0, so the bound adds a zero-sized fraction.
        let bound = upper_bound(instance.items(), instance.capacity(), 1, 15.0, 7.0);
        assert_eq!(bound, 7.0);
    }

    #[test]
    fn test_zero_weight_items_are_taken_whole() {
        let instance = Instance::from_entries(&[(5.0f64, 0.0), (10.0, 5.0)], 3.0).unwrap();
        let bound = upper_bound(instance.items(), instance.capacity(), 0, 0.0, 0.0);
        assert_eq!(bound, 5.0 + 10.0 * (3.0 / 5.0));
    }

    #[test]
    fn test_bound_dominates_every_feasible_completion() {
        let instance = instance();
        // Best feasible completion from the root is 25 (values 10 and 15).
        let bound = upper_bound(instance.items(), instance.capacity(), 0, 0.0, 0.0);
        assert!(bound >= 25.0);
    }
}
