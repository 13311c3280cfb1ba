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

use crate::stats::BnbSolverStatistics;
use rucksack_model::arrangement::Arrangement;
use rucksack_search::num::SolverNumeric;

/// Why the branch-and-bound search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BnbTerminationReason {
    /// The frontier was exhausted or the bound ordering proved that no
    /// remaining node can improve the reported tiers.
    OptimalityProven,
    /// A monitor requested termination; the reported arrangements are the
    /// best found so far and carry no optimality guarantee.
    Aborted(String),
}

impl std::fmt::Display for BnbTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OptimalityProven => write!(f, "OptimalityProven"),
            Self::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The outcome of a branch-and-bound solve.
///
/// Arrangements are sorted by non-increasing total value. Within a tier,
/// arrangements appear in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbSolverOutcome<T>
where
    T: SolverNumeric,
{
    arrangements: Vec<Arrangement<T>>,
    termination_reason: BnbTerminationReason,
    statistics: BnbSolverStatistics,
}

impl<T> BnbSolverOutcome<T>
where
    T: SolverNumeric,
{
    /// Creates an outcome for a search that proved its tiers optimal.
    #[inline]
    pub fn optimal(arrangements: Vec<Arrangement<T>>, statistics: BnbSolverStatistics) -> Self {
        Self {
            arrangements,
            termination_reason: BnbTerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// Creates an outcome for a search stopped early by a monitor.
    #[inline]
    pub fn aborted(
        arrangements: Vec<Arrangement<T>>,
        reason: String,
        statistics: BnbSolverStatistics,
    ) -> Self {
        Self {
            arrangements,
            termination_reason: BnbTerminationReason::Aborted(reason),
            statistics,
        }
    }

    /// Returns the reported arrangements, best value first.
    #[inline]
    pub fn arrangements(&self) -> &[Arrangement<T>] {
        &self.arrangements
    }

    /// Consumes the outcome and returns the arrangements.
    #[inline]
    pub fn into_arrangements(self) -> Vec<Arrangement<T>> {
        self.arrangements
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &BnbTerminationReason {
        &self.termination_reason
    }

    /// Returns `true` if the reported tiers were proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.termination_reason == BnbTerminationReason::OptimalityProven
    }

    /// Returns the statistics collected during the search.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns the best total value found, or `None` if no arrangement was
    /// reported.
    #[inline]
    pub fn best_value(&self) -> Option<T> {
        self.arrangements.first().map(|a| a.total_value())
    }
}

impl<T> std::fmt::Display for BnbSolverOutcome<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbSolverOutcome(arrangements: {}, termination: {})",
            self.arrangements.len(),
            self.termination_reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rucksack_model::instance::Instance;

    #[test]
    fn test_optimal_outcome() {
        let instance = Instance::from_entries(&[(1.0f64, 1.0)], 2.0).unwrap();
        let outcome = BnbSolverOutcome::optimal(
            vec![Arrangement::empty(&instance)],
            BnbSolverStatistics::default(),
        );
        assert!(outcome.is_optimal());
        assert_eq!(outcome.arrangements().len(), 1);
        assert_eq!(outcome.best_value(), Some(0.0));
    }

    #[test]
    fn test_aborted_outcome() {
        let outcome = BnbSolverOutcome::<f64>::aborted(
            Vec::new(),
            "time limit reached".to_string(),
            BnbSolverStatistics::default(),
        );
        assert!(!outcome.is_optimal());
        assert_eq!(outcome.best_value(), None);
        assert_eq!(
            outcome.termination_reason(),
            &BnbTerminationReason::Aborted("time limit reached".to_string())
        );
    }

    #[test]
    fn test_display() {
        let outcome =
            BnbSolverOutcome::<f64>::optimal(Vec::new(), BnbSolverStatistics::default());
        assert_eq!(
            format!("{}", outcome),
            "BnbSolverOutcome(arrangements: 0, termination: OptimalityProven)"
        );
    }
}
