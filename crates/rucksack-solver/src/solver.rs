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

//! # Method Dispatch
//!
//! One entry point over the in-process solving strategies. Callers that need
//! engine-specific detail (statistics, termination reasons, the full lattice
//! classification) use the engines directly; `solve` is the convenience
//! surface that always answers with a plain list of arrangements.

use crate::{brute_force::brute_force, greedy::greedy};
use rucksack_bnb::bnb::{BnbSolveOptions, BnbSolver};
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::{monitor::search_monitor::NoOpMonitor, num::SolverNumeric};

/// The in-process solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// Best-first branch-and-bound reporting the `num_tiers` best distinct
    /// objective values. Exact.
    BranchAndBound { num_tiers: usize },
    /// Exhaustive enumeration. Exact, but limited to small instances.
    BruteForce,
    /// Density-order greedy. Fast, no optimality guarantee.
    Greedy,
}

impl Default for SolveMethod {
    #[inline]
    fn default() -> Self {
        Self::BranchAndBound { num_tiers: 1 }
    }
}

impl std::fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BranchAndBound { num_tiers } => {
                write!(f, "BranchAndBound(num_tiers: {})", num_tiers)
            }
            Self::BruteForce => write!(f, "BruteForce"),
            Self::Greedy => write!(f, "Greedy"),
        }
    }
}

/// Solves the instance with the chosen method.
///
/// Exact methods return every arrangement tied for the reported tiers, best
/// value first; `Greedy` returns exactly one arrangement.
///
/// # Panics
///
/// Panics if `BranchAndBound` is asked for zero tiers, or if `BruteForce`
/// is applied to an instance with 64 items or more.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
/// use rucksack_solver::solver::{solve, SolveMethod};
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();
/// let arrangements = solve(&instance, SolveMethod::default());
/// assert_eq!(arrangements[0].total_value(), 25.0);
/// ```
pub fn solve<T>(instance: &Instance<T>, method: SolveMethod) -> Vec<Arrangement<T>>
where
    T: SolverNumeric,
{
    match method {
        SolveMethod::BranchAndBound { num_tiers } => BnbSolver::new()
            .solve(instance, BnbSolveOptions { num_tiers }, NoOpMonitor::new())
            .into_arrangements(),
        SolveMethod::BruteForce => brute_force(instance).into_optimal(),
        SolveMethod::Greedy => vec![greedy(instance)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Integer-valued floats keep sums exact, so cross-engine value
    /// comparisons can use equality.
    fn random_instance(rng: &mut ChaCha8Rng, num_items: usize) -> Instance<f64> {
        let entries: Vec<(f64, f64)> = (0..num_items)
            .map(|_| {
                (
                    rng.random_range(1..=50) as f64,
                    rng.random_range(1..=50) as f64,
                )
            })
            .collect();
        let capacity = rng.random_range(10..=200) as f64;
        Instance::from_entries(&entries, capacity).unwrap()
    }

    #[test]
    fn test_dispatch_matches_engines() {
        let instance =
            Instance::from_entries(&[(10.0f64, 5.0), (15.0, 10.0), (7.0, 3.0)], 15.0).unwrap();

        let bnb = solve(&instance, SolveMethod::default());
        let brute = solve(&instance, SolveMethod::BruteForce);
        let greedy = solve(&instance, SolveMethod::Greedy);

        assert_eq!(bnb[0].total_value(), 25.0);
        assert_eq!(brute[0].total_value(), 25.0);
        assert_eq!(greedy.len(), 1);
        assert_eq!(greedy[0].total_value(), 17.0);
    }

    #[test]
    fn test_exact_methods_agree_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(1337);
        for _ in 0..20 {
            let instance = random_instance(&mut rng, 10);

            let bnb = solve(&instance, SolveMethod::BranchAndBound { num_tiers: 1 });
            let brute = solve(&instance, SolveMethod::BruteForce);

            assert!(!bnb.is_empty());
            assert_eq!(bnb[0].total_value(), brute[0].total_value());

            // Both engines must report exactly the tied optima.
            let states = |arrangements: &[Arrangement<f64>]| {
                let mut states: Vec<Vec<usize>> = arrangements
                    .iter()
                    .map(|a| a.state().ones().collect())
                    .collect();
                states.sort();
                states
            };
            assert_eq!(states(&bnb), states(&brute));
        }
    }

    #[test]
    fn test_tier_sets_match_exhaustive_enumeration() {
        // Zero values and zero weights are deliberately in range; they
        // produce ties and infinite-density items.
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..40 {
            let entries: Vec<(f64, f64)> = (0..8)
                .map(|_| {
                    (
                        rng.random_range(0..=20) as f64,
                        rng.random_range(0..=20) as f64,
                    )
                })
                .collect();
            let capacity = rng.random_range(0..=80) as f64;
            let instance = Instance::from_entries(&entries, capacity).unwrap();
            let lattice = brute_force(&instance);

            for num_tiers in 1..=3 {
                let bnb = solve(&instance, SolveMethod::BranchAndBound { num_tiers });

                // The n best distinct feasible values.
                let mut tier_values: Vec<OrderedFloat<f64>> = lattice
                    .feasible()
                    .iter()
                    .map(|a| OrderedFloat(a.total_value()))
                    .collect();
                tier_values.sort_unstable_by(|a, b| b.cmp(a));
                tier_values.dedup();
                tier_values.truncate(num_tiers);

                // Every feasible arrangement in those tiers, ties included.
                let mut expected: Vec<Vec<usize>> = lattice
                    .feasible()
                    .iter()
                    .filter(|a| tier_values.contains(&OrderedFloat(a.total_value())))
                    .map(|a| a.state().ones().collect())
                    .collect();
                expected.sort();

                let mut reported: Vec<Vec<usize>> = bnb
                    .iter()
                    .map(|a| a.state().ones().collect())
                    .collect();
                reported.sort();

                assert_eq!(reported, expected, "num_tiers = {num_tiers}");
            }
        }
    }

    #[test]
    fn test_greedy_never_beats_the_optimum() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            let instance = random_instance(&mut rng, 12);

            let optimal = solve(&instance, SolveMethod::default());
            let greedy = solve(&instance, SolveMethod::Greedy);

            assert!(greedy[0].is_feasible(&instance));
            assert!(
                OrderedFloat(greedy[0].total_value())
                    <= OrderedFloat(optimal[0].total_value())
            );
        }
    }

    #[test]
    fn test_reported_arrangements_are_feasible() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            let instance = random_instance(&mut rng, 10);
            for arrangement in solve(&instance, SolveMethod::BranchAndBound { num_tiers: 3 }) {
                assert!(arrangement.is_feasible(&instance));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", SolveMethod::BranchAndBound { num_tiers: 2 }),
            "BranchAndBound(num_tiers: 2)"
        );
        assert_eq!(format!("{}", SolveMethod::BruteForce), "BruteForce");
        assert_eq!(format!("{}", SolveMethod::Greedy), "Greedy");
    }
}
