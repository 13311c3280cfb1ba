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

//! The `Arrangement` output type.
//!
//! An arrangement is a candidate answer: a subset of an instance's items,
//! stored as a bitset over density-order positions, together with the derived
//! totals. Totals are computed once at construction in ascending position
//! order, so the same subset always yields bitwise-identical sums no matter
//! which solver produced it.

use crate::{index::ItemIndex, instance::Instance, item::Item};
use fixedbitset::FixedBitSet;
use num_traits::float::FloatCore;

/// A candidate subset of an instance's items with derived aggregates.
///
/// Equality and hashing consider only the inclusion state: two arrangements
/// over the same instance are equal exactly when they include the same
/// positions. The cached totals are derived data and never participate.
///
/// # Examples
///
/// ```rust
/// use fixedbitset::FixedBitSet;
/// use rucksack_model::{arrangement::Arrangement, instance::Instance};
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let mut state = FixedBitSet::with_capacity(3);
/// state.set(0, true); // density order: item with value 7 is first
/// state.set(1, true);
///
/// let arrangement = Arrangement::from_state(&instance, state);
/// assert_eq!(arrangement.total_value(), 17.0);
/// assert_eq!(arrangement.total_weight(), 8.0);
/// assert!(arrangement.is_feasible(&instance));
/// ```
#[derive(Clone, Debug)]
pub struct Arrangement<T>
where
    T: FloatCore,
{
    state: FixedBitSet,
    included: Vec<Item<T>>,
    total_value: T,
    total_weight: T,
}

impl<T> Arrangement<T>
where
    T: FloatCore,
{
    /// Creates an arrangement from an inclusion state over `instance`.
    ///
    /// Bit `i` of `state` refers to position `i` in the density-sorted item
    /// sequence of `instance`. Totals are accumulated in ascending position
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `state.len()` differs from `instance.num_items()`.
    pub fn from_state(instance: &Instance<T>, state: FixedBitSet) -> Self {
        assert!(
            state.len() == instance.num_items(),
            "called `Arrangement::from_state` with a state of length {} for an instance with {} items",
            state.len(),
            instance.num_items()
        );

        let mut included = Vec::with_capacity(state.count_ones(..));
        let mut total_value = T::zero();
        let mut total_weight = T::zero();
        for position in state.ones() {
            let item = instance.items()[position];
            included.push(item);
            total_value = total_value + item.value();
            total_weight = total_weight + item.weight();
        }

        Self {
            state,
            included,
            total_value,
            total_weight,
        }
    }

    /// Creates the empty arrangement for `instance`.
    pub fn empty(instance: &Instance<T>) -> Self {
        Self::from_state(instance, FixedBitSet::with_capacity(instance.num_items()))
    }

    /// Returns the inclusion state over density-order positions.
    #[inline]
    pub fn state(&self) -> &FixedBitSet {
        &self.state
    }

    /// Returns the included items in ascending density-order position.
    #[inline]
    pub fn included(&self) -> &[Item<T>] {
        &self.included
    }

    /// Returns the number of included items.
    #[inline]
    pub fn num_included(&self) -> usize {
        self.included.len()
    }

    /// Returns `true` if no item is included.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    /// Returns `true` if the item at `index` is included.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..state().len()`.
    #[inline]
    pub fn includes(&self, index: ItemIndex) -> bool {
        let index = index.get();
        debug_assert!(
            index < self.state.len(),
            "called `Arrangement::includes` with item index out of bounds: the len is {} but the index is {}",
            self.state.len(),
            index
        );

        self.state.contains(index)
    }

    /// Returns the sum of the included item values.
    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }

    /// Returns the sum of the included item weights.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// Returns the aggregate value/weight density of the arrangement.
    ///
    /// Unlike `Item::density`, a zero total weight yields zero here: an empty
    /// arrangement is the least dense, not the most.
    #[inline]
    pub fn density(&self) -> T {
        if self.total_weight == T::zero() {
            T::zero()
        } else {
            self.total_value / self.total_weight
        }
    }

    /// Returns `true` if the total weight fits within the instance capacity.
    #[inline]
    pub fn is_feasible(&self, instance: &Instance<T>) -> bool {
        self.total_weight <= instance.capacity()
    }
}

impl<T> PartialEq for Arrangement<T>
where
    T: FloatCore,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T> Eq for Arrangement<T> where T: FloatCore {}

impl<T> std::hash::Hash for Arrangement<T>
where
    T: FloatCore,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.state.len().hash(state);
        for position in self.state.ones() {
            position.hash(state);
        }
    }
}

impl<T> std::fmt::Display for Arrangement<T>
where
    T: FloatCore + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arrangement(num_included: {}, total_value: {}, total_weight: {})",
            self.num_included(),
            self.total_value,
            self.total_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance<f64> {
        Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap()
    }

    fn state_of(len: usize, positions: &[usize]) -> FixedBitSet {
        let mut state = FixedBitSet::with_capacity(len);
        for &position in positions {
            state.set(position, true);
        }
        state
    }

    #[test]
    fn test_from_state_totals() {
        let instance = instance();
        // Density order is (7, 3), (10, 5), (15, 10).
        let arrangement = Arrangement::from_state(&instance, state_of(3, &[0, 1]));
        assert_eq!(arrangement.total_value(), 17.0);
        assert_eq!(arrangement.total_weight(), 8.0);
        assert_eq!(arrangement.num_included(), 2);
        assert!(arrangement.is_feasible(&instance));
    }

    #[test]
    fn test_includes() {
        let instance = instance();
        let arrangement = Arrangement::from_state(&instance, state_of(3, &[2]));
        assert!(!arrangement.includes(ItemIndex::new(0)));
        assert!(!arrangement.includes(ItemIndex::new(1)));
        assert!(arrangement.includes(ItemIndex::new(2)));
    }

    #[test]
    fn test_empty() {
        let instance = instance();
        let arrangement = Arrangement::empty(&instance);
        assert!(arrangement.is_empty());
        assert_eq!(arrangement.total_value(), 0.0);
        assert_eq!(arrangement.total_weight(), 0.0);
        assert_eq!(arrangement.density(), 0.0);
    }

    #[test]
    fn test_density() {
        let instance = instance();
        let arrangement = Arrangement::from_state(&instance, state_of(3, &[1]));
        assert_eq!(arrangement.density(), 2.0);
    }

    #[test]
    fn test_zero_weight_density_is_zero() {
        let instance = Instance::from_entries(&[(5.0f64, 0.0)], 10.0).unwrap();
        let arrangement = Arrangement::from_state(&instance, state_of(1, &[0]));
        assert_eq!(arrangement.total_weight(), 0.0);
        assert_eq!(arrangement.density(), 0.0);
    }

    #[test]
    fn test_infeasible_overweight() {
        let instance = instance();
        let arrangement = Arrangement::from_state(&instance, state_of(3, &[0, 1, 2]));
        assert_eq!(arrangement.total_weight(), 18.0);
        assert!(!arrangement.is_feasible(&instance));
    }

    #[test]
    fn test_equality_ignores_totals() {
        let instance = instance();
        let a = Arrangement::from_state(&instance, state_of(3, &[0, 2]));
        let b = Arrangement::from_state(&instance, state_of(3, &[0, 2]));
        let c = Arrangement::from_state(&instance, state_of(3, &[1]));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_follows_state() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |arrangement: &Arrangement<f64>| {
            let mut hasher = DefaultHasher::new();
            arrangement.hash(&mut hasher);
            hasher.finish()
        };

        let instance = instance();
        let a = Arrangement::from_state(&instance, state_of(3, &[0, 2]));
        let b = Arrangement::from_state(&instance, state_of(3, &[0, 2]));
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    #[should_panic(expected = "called `Arrangement::from_state`")]
    fn test_from_state_length_mismatch_panics() {
        let instance = instance();
        let _ = Arrangement::from_state(&instance, FixedBitSet::with_capacity(2));
    }

    #[test]
    fn test_display() {
        let instance = instance();
        let arrangement = Arrangement::from_state(&instance, state_of(3, &[0, 1]));
        assert_eq!(
            format!("{}", arrangement),
            "Arrangement(num_included: 2, total_value: 17, total_weight: 8)"
        );
    }
}
