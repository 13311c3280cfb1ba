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

//! The validated, density-sorted problem instance.
//!
//! `Instance::new` is the single choke point where inputs are checked:
//! negative or non-finite values, weights, and capacities are rejected here
//! so that no solver ever sees them. The constructor also establishes the
//! one ordering invariant the branch-and-bound engine depends on — items
//! sorted by non-increasing value/weight density. Re-sorting inside a solver
//! would break the correspondence between node indices and arrangement
//! positions, so it deliberately does not happen there.

use crate::{
    index::{ItemId, ItemIndex},
    item::Item,
};
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;

/// The error type for instance validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// An item value was NaN or infinite. `position` is the index into the
    /// input sequence passed to `Instance::new`.
    NonFiniteValue { position: usize },
    /// An item weight was NaN or infinite.
    NonFiniteWeight { position: usize },
    /// An item value was negative.
    NegativeValue { position: usize },
    /// An item weight was negative.
    NegativeWeight { position: usize },
    /// The capacity was NaN or infinite.
    NonFiniteCapacity,
    /// The capacity was negative.
    NegativeCapacity,
    /// Two items shared the same `ItemId`.
    DuplicateItemId { id: ItemId },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteValue { position } => {
                write!(f, "Item at position {} has a non-finite value", position)
            }
            Self::NonFiniteWeight { position } => {
                write!(f, "Item at position {} has a non-finite weight", position)
            }
            Self::NegativeValue { position } => {
                write!(f, "Item at position {} has a negative value", position)
            }
            Self::NegativeWeight { position } => {
                write!(f, "Item at position {} has a negative weight", position)
            }
            Self::NonFiniteCapacity => write!(f, "Capacity must be finite"),
            Self::NegativeCapacity => write!(f, "Capacity must be non-negative"),
            Self::DuplicateItemId { id } => {
                write!(f, "Duplicate item identity: {}", id)
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// Represents the theoretical search space size of a knapsack instance.
///
/// The subset lattice of $N$ items has $2^N$ nodes. Since this exceeds
/// standard integer limits well before the sizes phase-transition studies
/// care about, this struct stores the value in **Logarithmic Space**
/// ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total search space size.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a given number of items.
    pub fn new(num_items: usize) -> Self {
        Complexity {
            log_val: num_items as f64 * 2.0f64.log10(),
        }
    }

    /// Returns the percentage of the search space that was actually explored.
    /// Spaces beyond 10^15 nodes report `0.0`; the estimate has no
    /// resolution at that scale.
    pub fn coverage(&self, nodes_explored: u64) -> f64 {
        if self.log_val > 15.0 {
            return 0.0;
        }

        (nodes_explored as f64 / 10.0_f64.powf(self.log_val)) * 100.0
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// The immutable data model describing a 0-1 knapsack instance.
///
/// Construction validates every input and stable-sorts the items by
/// non-increasing density. Items with equal density keep their input order,
/// so construction is deterministic.
///
/// # Invariant
///
/// `items()` is always sorted by non-increasing `Item::density`. The
/// branch-and-bound bound computation is only admissible under this
/// ordering; solvers assert it in debug builds but never re-sort.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// assert_eq!(instance.num_items(), 3);
/// assert_eq!(instance.capacity(), 15.0);
/// // Highest density first: 7/3 > 10/5 > 15/10.
/// assert_eq!(instance.items()[0].value(), 7.0);
/// assert!(instance.is_density_sorted());
/// ```
#[derive(Clone, Debug)]
pub struct Instance<T>
where
    T: FloatCore,
{
    items: Vec<Item<T>>, // sorted by non-increasing density
    capacity: T,
}

impl<T> Instance<T>
where
    T: FloatCore,
{
    /// Creates a validated instance from the given items and capacity.
    ///
    /// # Errors
    ///
    /// Returns an `InstanceError` if any value or weight is negative or
    /// non-finite, if the capacity is negative or non-finite, or if two
    /// items share an identity.
    pub fn new(mut items: Vec<Item<T>>, capacity: T) -> Result<Self, InstanceError> {
        if !capacity.is_finite() {
            return Err(InstanceError::NonFiniteCapacity);
        }
        if capacity < T::zero() {
            return Err(InstanceError::NegativeCapacity);
        }

        for (position, item) in items.iter().enumerate() {
            if !item.value().is_finite() {
                return Err(InstanceError::NonFiniteValue { position });
            }
            if !item.weight().is_finite() {
                return Err(InstanceError::NonFiniteWeight { position });
            }
            if item.value() < T::zero() {
                return Err(InstanceError::NegativeValue { position });
            }
            if item.weight() < T::zero() {
                return Err(InstanceError::NegativeWeight { position });
            }
        }

        let mut ids: Vec<usize> = items.iter().map(|item| item.id().get()).collect();
        ids.sort_unstable();
        if let Some(window) = ids.windows(2).find(|window| window[0] == window[1]) {
            return Err(InstanceError::DuplicateItemId {
                id: ItemId::new(window[0]),
            });
        }

        // Stable sort: equal densities keep input order.
        items.sort_by(|a, b| OrderedFloat(b.density()).cmp(&OrderedFloat(a.density())));

        Ok(Self { items, capacity })
    }

    /// Creates a validated instance from `(value, weight)` entries, assigning
    /// identities by input position.
    ///
    /// # Errors
    ///
    /// Same as `Instance::new`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rucksack_model::instance::Instance;
    ///
    /// let instance = Instance::from_entries(&[(60.0, 10.0), (100.0, 20.0)], 50.0).unwrap();
    /// assert_eq!(instance.num_items(), 2);
    /// ```
    pub fn from_entries(entries: &[(T, T)], capacity: T) -> Result<Self, InstanceError> {
        let items = entries
            .iter()
            .enumerate()
            .map(|(position, &(value, weight))| Item::new(ItemId::new(position), value, weight))
            .collect();
        Self::new(items, capacity)
    }

    /// Returns the number of items in the instance.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the instance has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity of the instance.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the items in non-increasing density order.
    #[inline]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns the item at the specified position in the density order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..num_items()`.
    #[inline]
    pub fn item(&self, index: ItemIndex) -> Item<T> {
        let index = index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Instance::item` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.items[index]
    }

    /// Returns the sum of all item weights.
    #[inline]
    pub fn total_weight(&self) -> T {
        self.items
            .iter()
            .fold(T::zero(), |acc, item| acc + item.weight())
    }

    /// Returns the sum of all item values.
    #[inline]
    pub fn total_value(&self) -> T {
        self.items
            .iter()
            .fold(T::zero(), |acc, item| acc + item.value())
    }

    /// Returns `true` if the items are sorted by non-increasing density.
    ///
    /// Always `true` for instances built through `Instance::new`; exposed so
    /// solvers can assert the precondition in debug builds.
    #[inline]
    pub fn is_density_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|window| OrderedFloat(window[0].density()) >= OrderedFloat(window[1].density()))
    }

    /// Returns the complexity of the instance's subset lattice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rucksack_model::instance::Instance;
    ///
    /// let instance = Instance::from_entries(&[(1.0, 1.0); 10], 5.0).unwrap();
    /// assert_eq!(instance.complexity().exponent(), 3); // 2^10 = 1024
    /// ```
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_items())
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: FloatCore + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(num_items: {}, capacity: {})",
            self.num_items(),
            self.capacity
        )
    }
}
