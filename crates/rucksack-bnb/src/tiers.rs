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

//! # Value Tier Tracking
//!
//! The branch-and-bound engine reports the arrangements realizing the `n`
//! best **distinct** objective values, not the `n` best arrangements. Ties
//! share a tier: with `n = 1` every optimal arrangement is reported. This
//! module tracks the current tier set and derives the pruning cutoff from it.

use ordered_float::OrderedFloat;
use rucksack_search::num::SolverNumeric;

/// Tracks the `n` best distinct objective values seen so far.
///
/// The cutoff is the worst value still inside the tier set; a node whose
/// bound falls strictly below it cannot contribute to any reported tier.
/// While fewer than `n` distinct values have been seen the cutoff is
/// negative infinity and nothing is pruned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTracker<T>
where
    T: SolverNumeric,
{
    // Sorted in descending order, at most `num_tiers` entries.
    values: Vec<OrderedFloat<T>>,
    num_tiers: usize,
}

impl<T> TierTracker<T>
where
    T: SolverNumeric,
{
    /// Creates a tracker for the `num_tiers` best distinct values.
    ///
    /// # Panics
    ///
    /// Panics if `num_tiers` is zero.
    pub fn new(num_tiers: usize) -> Self {
        assert!(
            num_tiers >= 1,
            "called `TierTracker::new` with zero tiers, at least one is required"
        );

        Self {
            values: Vec::with_capacity(num_tiers),
            num_tiers,
        }
    }

    /// Records an objective value, keeping the tier set at the `n` best
    /// distinct values.
    pub fn record(&mut self, value: T) {
        let value = OrderedFloat(value);
        match self.values.binary_search_by(|tier| value.cmp(tier)) {
            // Already a tier.
            Ok(_) => {}
            Err(position) => {
                if position < self.num_tiers {
                    self.values.insert(position, value);
                    self.values.truncate(self.num_tiers);
                }
            }
        }
    }

    /// Returns `true` if `n` distinct values have been recorded.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.num_tiers
    }

    /// Returns the pruning cutoff: the worst tier value, or negative
    /// infinity while the tier set is not yet full.
    #[inline]
    pub fn cutoff(&self) -> T {
        if self.is_full() {
            self.values[self.num_tiers - 1].0
        } else {
            T::neg_infinity()
        }
    }

    /// Returns `true` if `value` is one of the tracked tiers.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let value = OrderedFloat(value);
        self.values.binary_search_by(|tier| value.cmp(tier)).is_ok()
    }

    /// Returns the tracked tier values in descending order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().map(|tier| tier.0)
    }
}
