//! Fibonacci-walking clause.

use std::convert::Infallible;

use quirkysat_core::Clause;

/// Passes when the input equals the next Fibonacci number.
///
/// The cursor advances on every invocation, pass or fail, so the same input
/// can get different answers: 1, 2, 3, 5 pass in that order, then 6 fails
/// (8 was expected) and 13 passes.
#[derive(Debug, Clone)]
pub struct FibonacciClause {
    prev: [i64; 2],
}

impl FibonacciClause {
    pub fn new() -> Self {
        Self { prev: [0, 1] }
    }
}

impl Default for FibonacciClause {
    fn default() -> Self {
        Self::new()
    }
}

impl Clause<i64> for FibonacciClause {
    fn evaluate(&mut self, input: &i64) -> Result<bool, Infallible> {
        let next = self.prev[0] + self.prev[1];
        self.prev = [self.prev[1], next];
        Ok(*input == next)
    }
}
