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

//! # External Exact Engines
//!
//! An adapter seam for delegating a solve to an out-of-process constraint
//! engine. The engine sees a flat numeric model (profit and size arrays plus
//! a capacity) and answers with a single inclusion vector; the adapter
//! translates between that wire-level shape and the typed domain model, and
//! validates the answer before trusting it.
//!
//! Unlike the in-process engines, an external engine reports at most one
//! arrangement and gives no information about ties.

use fixedbitset::FixedBitSet;
use rucksack_model::{arrangement::Arrangement, instance::Instance};
use rucksack_search::num::SolverNumeric;

/// The flat model handed to an external engine.
///
/// `profits[i]` and `sizes[i]` describe the item at density-order position
/// `i` of the originating instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineModel<T> {
    pub profits: Vec<T>,
    pub sizes: Vec<T>,
    pub capacity: T,
}

/// An external engine's answer: one inclusion flag per item position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSelection {
    pub included: Vec<bool>,
}

/// The error type for engine invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine could not be reached or is not installed.
    Unavailable(String),
    /// The engine ran but failed to produce an answer.
    Execution(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "Engine unavailable: {}", detail),
            Self::Execution(detail) => write!(f, "Engine execution failed: {}", detail),
        }
    }
}

impl std::error::Error for EngineError {}

/// An exact engine that can solve the flat knapsack model.
///
/// Implementations typically shell out to an external process or service;
/// `solve` takes `&mut self` so they can hold connections or scratch state.
pub trait ExactEngine<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str;
    fn solve(&mut self, model: &EngineModel<T>) -> Result<EngineSelection, EngineError>;
}

/// The error type for adapter-level solve failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalSolverError {
    /// The engine itself failed.
    Engine(EngineError),
    /// The engine answered with the wrong number of inclusion flags.
    SelectionLength { expected: usize, actual: usize },
    /// The engine's selection exceeds the instance capacity.
    Overweight,
}

impl std::fmt::Display for ExternalSolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(error) => write!(f, "{}", error),
            Self::SelectionLength { expected, actual } => write!(
                f,
                "Engine returned {} inclusion flags for {} items",
                actual, expected
            ),
            Self::Overweight => {
                write!(f, "Engine returned a selection exceeding the capacity")
            }
        }
    }
}

impl std::error::Error for ExternalSolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(error) => Some(error),
            _ => None,
        }
    }
}

impl From<EngineError> for ExternalSolverError {
    fn from(error: EngineError) -> Self {
        Self::Engine(error)
    }
}

/// Adapts an `ExactEngine` to the typed domain model.
///
/// # Examples
///
/// ```rust
/// use rucksack_model::instance::Instance;
/// use rucksack_solver::external::{
///     EngineError, EngineModel, EngineSelection, ExactEngine, ExternalSolver,
/// };
///
/// struct TakeAll;
///
/// impl ExactEngine<f64> for TakeAll {
///     fn name(&self) -> &str {
///         "TakeAll"
///     }
///
///     fn solve(&mut self, model: &EngineModel<f64>) -> Result<EngineSelection, EngineError> {
///         Ok(EngineSelection {
///             included: vec![true; model.profits.len()],
///         })
///     }
/// }
///
/// let instance = Instance::from_entries(&[(10.0, 5.0), (7.0, 3.0)], 20.0).unwrap();
/// let mut solver = ExternalSolver::new(TakeAll);
/// let arrangement = solver.solve(&instance).unwrap();
/// assert_eq!(arrangement.total_value(), 17.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalSolver<E> {
    engine: E,
}

impl<E> ExternalSolver<E> {
    /// Wraps the given engine.
    #[inline]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the wrapped engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E> ExternalSolver<E> {
    /// Solves the instance through the wrapped engine.
    ///
    /// The engine's selection is validated before it is turned into an
    /// arrangement: it must carry exactly one flag per item and must not
    /// exceed the capacity.
    ///
    /// # Errors
    ///
    /// Returns an `ExternalSolverError` if the engine fails or answers with
    /// a malformed or infeasible selection.
    pub fn solve<T>(&mut self, instance: &Instance<T>) -> Result<Arrangement<T>, ExternalSolverError>
    where
        T: SolverNumeric,
        E: ExactEngine<T>,
    {
        let model = EngineModel {
            profits: instance.items().iter().map(|item| item.value()).collect(),
            sizes: instance.items().iter().map(|item| item.weight()).collect(),
            capacity: instance.capacity(),
        };

        let selection = self.engine.solve(&model)?;
        if selection.included.len() != instance.num_items() {
            return Err(ExternalSolverError::SelectionLength {
                expected: instance.num_items(),
                actual: selection.included.len(),
            });
        }

        let mut state = FixedBitSet::with_capacity(instance.num_items());
        for (position, &included) in selection.included.iter().enumerate() {
            if included {
                state.set(position, true);
            }
        }

        let arrangement = Arrangement::from_state(instance, state);
        if !arrangement.is_feasible(instance) {
            return Err(ExternalSolverError::Overweight);
        }
        Ok(arrangement)
    }
}
