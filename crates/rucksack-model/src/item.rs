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

//! The immutable `Item` value object.
//!
//! An item pairs a non-negative value with a non-negative weight and carries
//! a stable `ItemId`. Equality and hashing use the identity alone, so two
//! items with coincidentally equal value and weight stay distinguishable —
//! a requirement for reporting all tied optimal arrangements.

use crate::index::ItemId;
use num_traits::float::FloatCore;

/// A single knapsack item: a value, a weight, and a stable identity.
///
/// Items are created once at problem-definition time and never mutated.
/// Validation of value and weight happens in `Instance::new`, not here.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::{index::ItemId, item::Item};
///
/// let item = Item::new(ItemId::new(0), 10.0, 5.0);
/// assert_eq!(item.value(), 10.0);
/// assert_eq!(item.weight(), 5.0);
/// assert_eq!(item.density(), 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Item<T> {
    id: ItemId,
    value: T,
    weight: T,
}

impl<T> Item<T>
where
    T: FloatCore,
{
    /// Creates a new `Item` with the given identity, value, and weight.
    #[inline]
    pub const fn new(id: ItemId, value: T, weight: T) -> Self {
        Self { id, value, weight }
    }

    /// Returns the stable identity of this item.
    #[inline]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the value of this item.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns the weight of this item.
    #[inline]
    pub const fn weight(&self) -> T {
        self.weight
    }

    /// Returns the value/weight density of this item.
    ///
    /// A zero-weight item has infinite density and sorts before every
    /// positive-weight item in the density order.
    #[inline]
    pub fn density(&self) -> T {
        if self.weight == T::zero() {
            T::infinity()
        } else {
            self.value / self.weight
        }
    }
}

impl<T> PartialEq for Item<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Item<T> {}

impl<T> std::hash::Hash for Item<T> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: FloatCore + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Item(id: {}, value: {}, weight: {})",
            self.id.get(),
            self.value,
            self.weight
        )
    }
}
