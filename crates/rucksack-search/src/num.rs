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

//! # Solver Numeric Trait
//!
//! Defines `SolverNumeric`, a convenience trait alias that bundles all the
//! bounds the solving engines place on their numeric type parameter. Writing
//! `T: SolverNumeric` everywhere keeps the engine signatures short and makes
//! the full requirement list visible in exactly one place.

use num_traits::{float::FloatCore, FromPrimitive};

/// The numeric bound shared by every solving engine.
///
/// `FloatCore` (rather than `Float`) keeps the bound compatible with the
/// `OrderedFloat` keys the engines use for heap and sort ordering.
pub trait SolverNumeric:
    FloatCore + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> SolverNumeric for T where
    T: FloatCore + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solver_numeric<T: SolverNumeric>() {}

    #[test]
    fn test_standard_floats_satisfy_bound() {
        assert_solver_numeric::<f32>();
        assert_solver_numeric::<f64>();
    }
}
