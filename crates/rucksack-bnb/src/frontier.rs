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

//! # Best-First Frontier
//!
//! The priority frontier of the branch-and-bound engine. Nodes live in a
//! slot arena; a binary heap orders lightweight handles by relaxation bound
//! so the heap's sift operations move small entries instead of whole nodes
//! with their bitsets.
//!
//! ## Ordering
//!
//! The frontier pops the node with the highest bound first. Nodes with equal
//! bounds pop in insertion order, which keeps the search deterministic: two
//! runs over the same instance expand nodes in the same sequence.

use fixedbitset::FixedBitSet;
use ordered_float::OrderedFloat;
use rucksack_search::num::SolverNumeric;
use std::collections::BinaryHeap;

/// A node of the prefix-decision tree.
///
/// Items `0..level` in density order are decided; `state` records which of
/// them are included. `weight` and `value` aggregate the included prefix and
/// `bound` is the fractional relaxation bound over the undecided suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<T> {
    pub level: usize,
    pub weight: T,
    pub value: T,
    pub bound: T,
    pub state: FixedBitSet,
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry<T>
where
    T: SolverNumeric,
{
    bound: OrderedFloat<T>,
    seq: u64,
    slot: usize,
}

// Manual impls: a derive would demand `T: Eq`, which no float satisfies.
// `OrderedFloat<T>` is already `Eq` for `FloatCore` types.
impl<T> PartialEq for HeapEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.seq == other.seq && self.slot == other.slot
    }
}

impl<T> Eq for HeapEntry<T> where T: SolverNumeric {}

impl<T> Ord for HeapEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Max-heap on bound; on ties the smaller sequence number wins,
        // giving FIFO order among equal bounds.
        self.bound
            .cmp(&other.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for HeapEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// An arena-backed max-priority frontier over `SearchNode`s.
///
/// `reset` clears contents but keeps the allocated capacity, so a solver can
/// reuse one frontier across many solves without reallocating.
#[derive(Debug, Clone)]
pub struct Frontier<T>
where
    T: SolverNumeric,
{
    arena: Vec<Option<SearchNode<T>>>,
    free: Vec<usize>,
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T>
where
    T: SolverNumeric,
{
    /// Creates an empty frontier.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with storage for `capacity` nodes.
    ///
    /// # Note
    ///
    /// The frontier grows on demand either way; preallocating only moves the
    /// allocation cost to construction time.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            free: Vec::new(),
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts a node into the frontier.
    pub fn push(&mut self, node: SearchNode<T>) {
        let bound = OrderedFloat(node.bound);
        let slot = match self.free.pop() {
            Some(slot) => {
                self.arena[slot] = Some(node);
                slot
            }
            None => {
                self.arena.push(Some(node));
                self.arena.len() - 1
            }
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry { bound, seq, slot });
    }

    /// Removes and returns the node with the highest bound.
    ///
    /// Among nodes with equal bounds the one inserted first is returned.
    pub fn pop(&mut self) -> Option<SearchNode<T>> {
        let entry = self.heap.pop()?;
        let node = self.arena[entry.slot].take();
        debug_assert!(
            node.is_some(),
            "heap entry referenced an empty arena slot {}",
            entry.slot
        );
        self.free.push(entry.slot);
        node
    }

    /// Returns the highest bound currently in the frontier.
    #[inline]
    pub fn peek_bound(&self) -> Option<T> {
        self.heap.peek().map(|entry| entry.bound.0)
    }

    /// Returns the number of nodes in the frontier.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the frontier holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Clears the frontier, keeping allocated capacity.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.heap.clear();
        self.next_seq = 0;
    }
}
