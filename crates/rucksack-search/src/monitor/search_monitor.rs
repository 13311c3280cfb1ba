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

use crate::num::SolverNumeric;
use rucksack_model::{arrangement::Arrangement, instance::Instance};

/// A control-flow decision a monitor hands back to the search loop.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Lifecycle hooks for observing and controlling a running search.
///
/// The engines call `on_step` once per expanded node and poll
/// `search_command` on the same cadence; implementations that check clocks or
/// atomics should keep both cheap.
pub trait SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str;
    fn on_enter_search(&mut self, instance: &Instance<T>);
    fn on_exit_search(&mut self);
    fn on_solution_found(&mut self, arrangement: &Arrangement<T>);
    fn on_step(&mut self);

    #[inline]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// A monitor that observes nothing and never terminates the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>) {}
    fn on_exit_search(&mut self) {}
    fn on_solution_found(&mut self, _arrangement: &Arrangement<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_display() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("budget".to_string())),
            "Terminate: budget"
        );
    }

    #[test]
    fn test_search_command_default_is_continue() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_noop_monitor_always_continues() {
        let mut mon = NoOpMonitor::new();
        let instance = Instance::from_entries(&[(1.0f64, 1.0)], 1.0).unwrap();

        SearchMonitor::<f64>::on_enter_search(&mut mon, &instance);
        for _ in 0..100 {
            SearchMonitor::<f64>::on_step(&mut mon);
        }
        assert_eq!(
            SearchMonitor::<f64>::search_command(&mon),
            SearchCommand::Continue
        );
        SearchMonitor::<f64>::on_exit_search(&mut mon);
    }

    #[test]
    fn test_dyn_monitor_formatting() {
        let mon = NoOpMonitor::new();
        let dynamic: &dyn SearchMonitor<f64> = &mon;
        assert_eq!(format!("{}", dynamic), "SearchMonitor(NoOpMonitor)");
        assert_eq!(format!("{:?}", dynamic), "SearchMonitor(NoOpMonitor)");
    }
}
