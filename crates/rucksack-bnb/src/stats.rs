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

use std::time::Duration;

/// Statistics collected during a run of the branch-and-bound engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BnbSolverStatistics {
    /// Total nodes popped from the frontier.
    pub nodes_explored: u64,
    /// Nodes popped with every item decided.
    pub leaves_reached: u64,
    /// Children discarded because their bound fell below the tier cutoff.
    pub prunings_bound: u64,
    /// Include-children discarded because the item overflowed the capacity.
    pub prunings_infeasible: u64,
    /// Leaf arrangements recorded during the search.
    pub solutions_found: u64,
    /// The largest frontier size observed.
    pub max_frontier_len: usize,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_reached(&mut self) {
        self.leaves_reached = self.leaves_reached.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_len(&mut self, len: usize) {
        self.max_frontier_len = self.max_frontier_len.max(len);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rucksack-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Leaves reached:       {}", self.leaves_reached)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (infeasible):{}", self.prunings_infeasible)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max frontier size:    {}", self.max_frontier_len)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats = BnbSolverStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.leaves_reached, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.prunings_infeasible, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.max_frontier_len, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_increment_methods() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_leaf_reached();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_solution_found();

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.leaves_reached, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_frontier_len_tracks_maximum() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_frontier_len(3);
        stats.on_frontier_len(7);
        stats.on_frontier_len(5);
        assert_eq!(stats.max_frontier_len, 7);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }
}
