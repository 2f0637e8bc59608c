//! Always-faulting clause.

use quirkysat_core::Clause;

/// A clause that raises the same fault on every invocation.
#[derive(Debug, Clone)]
pub struct FailingClause<E> {
    fault: E,
}

impl<E> FailingClause<E> {
    pub fn new(fault: E) -> Self {
        Self { fault }
    }
}

impl<I: ?Sized, E: Clone + Send> Clause<I, E> for FailingClause<E> {
    fn evaluate(&mut self, _input: &I) -> Result<bool, E> {
        Err(self.fault.clone())
    }
}
