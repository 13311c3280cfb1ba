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

//! # Brute-Force Classification
//!
//! Exhaustive enumeration of the full subset lattice. Useful for studying
//! the structure of small instances (how many subsets are feasible, how many
//! are terminal) and as a ground-truth oracle when testing the other
//! engines. The cost is 2^n arrangements, so this is strictly a small-n
//! tool; `Instance::complexity` quantifies how quickly that explodes.

use fixedbitset::FixedBitSet;
use ordered_float::OrderedFloat;
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::num::SolverNumeric;

/// The full classification of an instance's subset lattice.
///
/// Every arrangement appears in `all`; the remaining vectors are the nested
/// classification layers. Terminal arrangements are feasible arrangements
/// that no excluded item could extend without overflowing the capacity.
/// Optimal arrangements are the feasible ones realizing the maximum value;
/// the empty arrangement is always feasible, so `optimal` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceOutcome<T>
where
    T: SolverNumeric,
{
    all: Vec<Arrangement<T>>,
    feasible: Vec<Arrangement<T>>,
    terminal: Vec<Arrangement<T>>,
    optimal: Vec<Arrangement<T>>,
    optimal_value: T,
}

impl<T> BruteForceOutcome<T>
where
    T: SolverNumeric,
{
    /// Returns every arrangement of the subset lattice.
    #[inline]
    pub fn all(&self) -> &[Arrangement<T>] {
        &self.all
    }

    /// Returns the arrangements whose total weight fits the capacity.
    #[inline]
    pub fn feasible(&self) -> &[Arrangement<T>] {
        &self.feasible
    }

    /// Returns the feasible arrangements no excluded item could extend.
    #[inline]
    pub fn terminal(&self) -> &[Arrangement<T>] {
        &self.terminal
    }

    /// Returns the feasible arrangements realizing the maximum total value.
    #[inline]
    pub fn optimal(&self) -> &[Arrangement<T>] {
        &self.optimal
    }

    /// Consumes the outcome and returns the optimal arrangements.
    #[inline]
    pub fn into_optimal(self) -> Vec<Arrangement<T>> {
        self.optimal
    }

    /// Returns the maximum total value over all feasible arrangements.
    #[inline]
    pub fn optimal_value(&self) -> T {
        self.optimal_value
    }
}

/// Enumerates and classifies every subset of the instance's items.
///
/// Subsets are enumerated in ascending bitmask order over density-sorted
/// positions, so the output is deterministic.
///
/// # Panics
///
/// Panics if the instance has 64 items or more; the lattice would not be
/// enumerable in any realistic amount of time anyway.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
/// use rucksack_solver::brute_force::brute_force;
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let outcome = brute_force(&instance);
///
/// assert_eq!(outcome.all().len(), 8);
/// assert_eq!(outcome.feasible().len(), 7);
/// assert_eq!(outcome.terminal().len(), 3);
/// assert_eq!(outcome.optimal_value(), 25.0);
/// ```
pub fn brute_force<T>(instance: &Instance<T>) -> BruteForceOutcome<T>
where
    T: SolverNumeric,
{
    let num_items = instance.num_items();
    assert!(
        num_items < 64,
        "called `brute_force` on an instance with {} items, the limit is 63",
        num_items
    );

    let capacity = instance.capacity();
    let mut all = Vec::with_capacity(1usize << num_items);
    let mut feasible = Vec::new();
    let mut terminal = Vec::new();

    for mask in 0u64..(1u64 << num_items) {
        let mut state = FixedBitSet::with_capacity(num_items);
        for position in 0..num_items {
            if mask & (1u64 << position) != 0 {
                state.set(position, true);
            }
        }

        let arrangement = Arrangement::from_state(instance, state);
        if arrangement.is_feasible(instance) {
            let remaining = capacity - arrangement.total_weight();
            let extendable = instance
                .items()
                .iter()
                .enumerate()
                .any(|(position, item)| {
                    !arrangement.state().contains(position) && item.weight() <= remaining
                });
            if !extendable {
                terminal.push(arrangement.clone());
            }
            feasible.push(arrangement.clone());
        }
        all.push(arrangement);
    }

    // The empty arrangement is always feasible, so the maximum exists.
    let optimal_value = feasible
        .iter()
        .map(|a| OrderedFloat(a.total_value()))
        .max()
        .map(|v| v.0)
        .unwrap_or_else(T::zero);
    let optimal: Vec<Arrangement<T>> = feasible
        .iter()
        .filter(|a| OrderedFloat(a.total_value()) == OrderedFloat(optimal_value))
        .cloned()
        .collect();

    BruteForceOutcome {
        all,
        feasible,
        terminal,
        optimal,
        optimal_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance<f64> {
        Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap()
    }

    #[test]
    fn test_classification_counts() {
        let outcome = brute_force(&instance());
        assert_eq!(outcome.all().len(), 8);
        assert_eq!(outcome.feasible().len(), 7);
        assert_eq!(outcome.terminal().len(), 3);
        assert_eq!(outcome.optimal().len(), 1);
    }

    #[test]
    fn test_optimal_arrangement() {
        let outcome = brute_force(&instance());
        assert_eq!(outcome.optimal_value(), 25.0);

        let optimal = &outcome.optimal()[0];
        assert_eq!(optimal.total_value(), 25.0);
        assert_eq!(optimal.total_weight(), 15.0);
        let mut ids: Vec<usize> = optimal.included().iter().map(|i| i.id().get()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_terminal_arrangements_cannot_be_extended() {
        let instance = instance();
        let outcome = brute_force(&instance);
        for arrangement in outcome.terminal() {
            let remaining = instance.capacity() - arrangement.total_weight();
            for (position, item) in instance.items().iter().enumerate() {
                if !arrangement.state().contains(position) {
                    assert!(item.weight() > remaining);
                }
            }
        }
    }

    #[test]
    fn test_all_tied_optima_are_found() {
        let instance = Instance::from_entries(&[(10.0f64, 5.0), (10.0, 5.0)], 5.0).unwrap();
        let outcome = brute_force(&instance);
        assert_eq!(outcome.optimal().len(), 2);
        assert_eq!(outcome.optimal_value(), 10.0);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::<f64>::from_entries(&[], 10.0).unwrap();
        let outcome = brute_force(&instance);
        assert_eq!(outcome.all().len(), 1);
        assert_eq!(outcome.feasible().len(), 1);
        // With nothing excluded the empty arrangement is trivially terminal.
        assert_eq!(outcome.terminal().len(), 1);
        assert_eq!(outcome.optimal_value(), 0.0);
    }

    #[test]
    fn test_zero_capacity() {
        let instance = Instance::from_entries(&[(5.0f64, 3.0)], 0.0).unwrap();
        let outcome = brute_force(&instance);
        assert_eq!(outcome.feasible().len(), 1);
        assert!(outcome.optimal()[0].is_empty());
        assert_eq!(outcome.optimal_value(), 0.0);
    }

    #[test]
    fn test_zero_weight_excluded_item_blocks_terminality() {
        // The zero-weight item always fits, so no arrangement excluding it
        // can be terminal.
        let instance = Instance::from_entries(&[(1.0f64, 0.0), (10.0, 5.0)], 5.0).unwrap();
        let outcome = brute_force(&instance);
        for arrangement in outcome.terminal() {
            assert!(arrangement.includes(rucksack_model::index::ItemIndex::new(0)));
        }
    }
}
