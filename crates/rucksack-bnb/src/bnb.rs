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

//! Best-first branch-and-bound solver for the 0-1 Knapsack Problem.
//!
//! This module implements a stateful search engine that explores the binary
//! prefix-decision tree of a density-sorted instance. Nodes are expanded in
//! order of their fractional relaxation bound; children are an include branch
//! (when the item fits) and an exclude branch. The engine tracks the `n` best
//! distinct objective values and prunes any child whose bound falls strictly
//! below the worst tracked tier, so tied arrangements always survive.
//!
//! The `BnbSolver` owns a reusable frontier, and a search session object
//! encapsulates per-run state, statistics, and timing. Because the frontier
//! is bound-ordered, the search can stop as soon as a popped node's bound
//! drops below the full tier cutoff: every node still queued is at most as
//! good. Determinism comes from FIFO tie-breaking among equal bounds.

use crate::{
    bound::upper_bound,
    frontier::{Frontier, SearchNode},
    result::BnbSolverOutcome,
    stats::BnbSolverStatistics,
    tiers::TierTracker,
};
use fixedbitset::FixedBitSet;
use ordered_float::OrderedFloat;
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
};
use smallvec::SmallVec;

/// Options controlling a branch-and-bound solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BnbSolveOptions {
    /// The number of best distinct objective values to report. Arrangements
    /// tied on value share a tier, so `num_tiers = 1` reports every optimal
    /// arrangement. Must be at least one.
    pub num_tiers: usize,
}

impl Default for BnbSolveOptions {
    #[inline]
    fn default() -> Self {
        Self { num_tiers: 1 }
    }
}

/// A best-first branch-and-bound solver for 0-1 knapsack instances.
///
/// The solver is reusable: `solve` clears per-run state while keeping the
/// frontier's allocated capacity, so repeated solves avoid memory churn.
///
/// # Examples
///
/// ```rust
/// use rucksack_bnb::bnb::{BnbSolveOptions, BnbSolver};
/// use rucksack_model::instance::Instance;
/// use rucksack_search::monitor::search_monitor::NoOpMonitor;
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let mut solver = BnbSolver::new();
/// let outcome = solver.solve(&instance, BnbSolveOptions::default(), NoOpMonitor::new());
///
/// assert!(outcome.is_optimal());
/// assert_eq!(outcome.best_value(), Some(25.0));
/// ```
#[derive(Debug, Clone)]
pub struct BnbSolver<T>
where
    T: SolverNumeric,
{
    frontier: Frontier<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
        }
    }

    /// Creates a new solver instance with preallocated frontier storage.
    ///
    /// # Note
    ///
    /// The frontier grows on demand either way; preallocating only moves the
    /// cost of the memory allocations to the construction time of the solver.
    #[inline]
    pub fn preallocated(frontier_capacity: usize) -> Self {
        Self {
            frontier: Frontier::with_capacity(frontier_capacity),
        }
    }

    /// Solves the given instance, reporting the arrangements that realize
    /// the `options.num_tiers` best distinct objective values.
    ///
    /// The returned arrangements are sorted by non-increasing total value;
    /// within a tier they appear in discovery order. An empty instance yields
    /// the empty arrangement as its single optimum.
    ///
    /// # Panics
    ///
    /// Panics if `options.num_tiers` is zero.
    pub fn solve<S>(
        &mut self,
        instance: &Instance<T>,
        options: BnbSolveOptions,
        monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        S: SearchMonitor<T>,
    {
        self.frontier.reset();
        let session = SearchSession {
            instance,
            frontier: &mut self.frontier,
            monitor,
            tiers: TierTracker::new(options.num_tiers),
            leaves: Vec::new(),
            stats: BnbSolverStatistics::default(),
        };
        session.run()
    }
}

/// Per-run state of a single branch-and-bound search.
struct SearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T>,
{
    instance: &'a Instance<T>,
    frontier: &'a mut Frontier<T>,
    monitor: S,
    tiers: TierTracker<T>,
    leaves: Vec<Arrangement<T>>,
    stats: BnbSolverStatistics,
}

impl<T, S> SearchSession<'_, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T>,
{
    fn run(mut self) -> BnbSolverOutcome<T> {
        let start = std::time::Instant::now();
        self.monitor.on_enter_search(self.instance);

        debug_assert!(
            self.instance.is_density_sorted(),
            "instance items must be sorted by non-increasing density"
        );

        if self.instance.is_empty() {
            let empty = Arrangement::empty(self.instance);
            self.monitor.on_solution_found(&empty);
            self.stats.on_solution_found();
            self.monitor.on_exit_search();
            self.stats.set_total_time(start.elapsed());
            return BnbSolverOutcome::optimal(vec![empty], self.stats);
        }

        let items = self.instance.items();
        let capacity = self.instance.capacity();
        let num_items = self.instance.num_items();

        self.frontier.push(SearchNode {
            level: 0,
            weight: T::zero(),
            value: T::zero(),
            bound: upper_bound(items, capacity, 0, T::zero(), T::zero()),
            state: FixedBitSet::with_capacity(num_items),
        });
        self.stats.on_frontier_len(self.frontier.len());

        while let Some(node) = self.frontier.pop() {
            self.monitor.on_step();
            self.stats.on_node_explored();

            if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
                return self.finish_aborted(reason, start);
            }

            // The frontier is bound-ordered: once the best queued bound
            // falls below a full tier cutoff, no remaining node can improve
            // any reported tier.
            if self.tiers.is_full() && node.bound < self.tiers.cutoff() {
                break;
            }

            if node.level == num_items {
                self.record_leaf(node);
                continue;
            }

            let item = items[node.level];
            let mut children: SmallVec<[SearchNode<T>; 2]> = SmallVec::new();

            let include_weight = node.weight + item.weight();
            if include_weight <= capacity {
                let include_value = node.value + item.value();
                let mut state = node.state.clone();
                state.set(node.level, true);
                children.push(SearchNode {
                    level: node.level + 1,
                    weight: include_weight,
                    value: include_value,
                    bound: upper_bound(
                        items,
                        capacity,
                        node.level + 1,
                        include_weight,
                        include_value,
                    ),
                    state,
                });
            } else {
                self.stats.on_pruning_infeasible();
            }

            children.push(SearchNode {
                level: node.level + 1,
                weight: node.weight,
                value: node.value,
                bound: upper_bound(items, capacity, node.level + 1, node.weight, node.value),
                state: node.state,
            });

            for child in children {
                if !self.tiers.is_full() || child.bound >= self.tiers.cutoff() {
                    self.frontier.push(child);
                } else {
                    self.stats.on_pruning_bound();
                }
            }
            self.stats.on_frontier_len(self.frontier.len());
        }

        self.finish_proven(start)
    }

    fn record_leaf(&mut self, node: SearchNode<T>) {
        self.stats.on_leaf_reached();
        self.tiers.record(node.value);

        let arrangement = Arrangement::from_state(self.instance, node.state);
        self.monitor.on_solution_found(&arrangement);
        self.stats.on_solution_found();
        self.leaves.push(arrangement);
    }

    /// Keeps only leaves whose value is still a reported tier and sorts them
    /// best-first. The sort is stable, so ties stay in discovery order.
    fn collect_arrangements(&mut self) -> Vec<Arrangement<T>> {
        let tiers = &self.tiers;
        let mut arrangements: Vec<Arrangement<T>> = self
            .leaves
            .drain(..)
            .filter(|leaf| tiers.contains(leaf.total_value()))
            .collect();
        arrangements.sort_by_key(|a| std::cmp::Reverse(OrderedFloat(a.total_value())));
        arrangements
    }

    fn finish_proven(mut self, start: std::time::Instant) -> BnbSolverOutcome<T> {
        self.monitor.on_exit_search();
        let arrangements = self.collect_arrangements();
        self.stats.set_total_time(start.elapsed());
        BnbSolverOutcome::optimal(arrangements, self.stats)
    }

    fn finish_aborted(mut self, reason: String, start: std::time::Instant) -> BnbSolverOutcome<T> {
        self.monitor.on_exit_search();
        let arrangements = self.collect_arrangements();
        self.stats.set_total_time(start.elapsed());
        BnbSolverOutcome::aborted(arrangements, reason, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rucksack_search::monitor::{search_monitor::NoOpMonitor, time_limit::TimeLimitMonitor};
    use std::time::Duration;

    fn solve(
        entries: &[(f64, f64)],
        capacity: f64,
        num_tiers: usize,
    ) -> BnbSolverOutcome<f64> {
        let instance = Instance::from_entries(entries, capacity).unwrap();
        let mut solver = BnbSolver::new();
        solver.solve(&instance, BnbSolveOptions { num_tiers }, NoOpMonitor::new())
    }

    fn included_ids(arrangement: &Arrangement<f64>) -> Vec<usize> {
        let mut ids: Vec<usize> = arrangement
            .included()
            .iter()
            .map(|item| item.id().get())
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_finds_the_unique_optimum() {
        let outcome = solve(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 1);
        assert_eq!(outcome.best_value(), Some(25.0));
        assert_eq!(included_ids(&outcome.arrangements()[0]), vec![0, 1]);
    }

    #[test]
    fn test_all_tied_optima_are_reported() {
        // Two identical items but only room for one: both single-item
        // arrangements are optimal and both must be reported.
        let outcome = solve(&[(10.0, 5.0), (10.0, 5.0)], 5.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 2);
        for arrangement in outcome.arrangements() {
            assert_eq!(arrangement.total_value(), 10.0);
            assert_eq!(arrangement.num_included(), 1);
        }
        assert_ne!(outcome.arrangements()[0], outcome.arrangements()[1]);
    }

    #[test]
    fn test_zero_weight_item_creates_a_tie() {
        // Including the worthless zero-weight item never changes the value,
        // so the optimum is realized by two distinct arrangements.
        let outcome = solve(&[(0.0, 0.0), (10.0, 5.0)], 5.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 2);
        for arrangement in outcome.arrangements() {
            assert_eq!(arrangement.total_value(), 10.0);
        }
    }

    #[test]
    fn test_second_tier_is_reported() {
        // Subset values: 0, 4, 10, 14. The two best tiers are 14 and 10.
        let outcome = solve(&[(10.0, 5.0), (4.0, 2.0)], 7.0, 2);

        assert!(outcome.is_optimal());
        let values: Vec<f64> = outcome
            .arrangements()
            .iter()
            .map(|a| a.total_value())
            .collect();
        assert_eq!(values, vec![14.0, 10.0]);
    }

    #[test]
    fn test_more_tiers_than_distinct_values() {
        // Only four distinct subset values exist; asking for ten tiers
        // reports all four.
        let outcome = solve(&[(10.0, 5.0), (4.0, 2.0)], 7.0, 10);

        assert!(outcome.is_optimal());
        let values: Vec<f64> = outcome
            .arrangements()
            .iter()
            .map(|a| a.total_value())
            .collect();
        assert_eq!(values, vec![14.0, 10.0, 4.0, 0.0]);
    }

    #[test]
    fn test_empty_instance_yields_the_empty_arrangement() {
        let outcome = solve(&[], 10.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 1);
        assert!(outcome.arrangements()[0].is_empty());
        assert_eq!(outcome.best_value(), Some(0.0));
    }

    #[test]
    fn test_zero_capacity_yields_the_empty_arrangement() {
        let outcome = solve(&[(5.0, 3.0), (2.0, 1.0)], 0.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 1);
        assert!(outcome.arrangements()[0].is_empty());
    }

    #[test]
    fn test_all_items_too_heavy_yields_the_empty_arrangement() {
        let outcome = solve(&[(5.0, 30.0), (2.0, 40.0)], 10.0, 1);

        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 1);
        assert!(outcome.arrangements()[0].is_empty());
    }

    #[test]
    fn test_everything_fits() {
        let outcome = solve(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 100.0, 1);

        assert_eq!(outcome.best_value(), Some(32.0));
        assert_eq!(outcome.arrangements().len(), 1);
        assert_eq!(outcome.arrangements()[0].num_included(), 3);
    }

    #[test]
    fn test_solver_reuse_is_deterministic() {
        let instance =
            Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
        let mut solver = BnbSolver::new();

        let first = solver.solve(&instance, BnbSolveOptions::default(), NoOpMonitor::new());
        let second = solver.solve(&instance, BnbSolveOptions::default(), NoOpMonitor::new());
        assert_eq!(first.arrangements(), second.arrangements());
        assert_eq!(
            first.statistics().nodes_explored,
            second.statistics().nodes_explored
        );
    }

    #[test]
    fn test_preallocated_solver_matches_default() {
        let instance =
            Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();

        let plain =
            BnbSolver::new().solve(&instance, BnbSolveOptions::default(), NoOpMonitor::new());
        let preallocated = BnbSolver::preallocated(64).solve(
            &instance,
            BnbSolveOptions::default(),
            NoOpMonitor::new(),
        );
        assert_eq!(plain.arrangements(), preallocated.arrangements());
    }

    #[test]
    fn test_zero_time_budget_aborts() {
        let instance =
            Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
        let mut solver = BnbSolver::new();

        // Mask 0 checks the clock at every step, so the very first node
        // already observes the exhausted budget.
        let monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0);
        let outcome = solver.solve(&instance, BnbSolveOptions::default(), monitor);
        assert!(!outcome.is_optimal());
    }

    #[test]
    fn test_statistics_are_populated() {
        let outcome = solve(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0, 1);
        let stats = outcome.statistics();

        assert!(stats.nodes_explored > 0);
        assert!(stats.leaves_reached > 0);
        assert!(stats.solutions_found >= stats.leaves_reached);
        assert!(stats.max_frontier_len > 0);
    }

    #[test]
    #[should_panic(expected = "zero tiers")]
    fn test_zero_tiers_panics() {
        let _ = solve(&[(1.0, 1.0)], 1.0, 0);
    }
}
