//! Invocation-counting clause.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use quirkysat_core::Clause;

/// A clause with a fixed answer that counts how often it was invoked.
///
/// The counter is shared, so it stays observable after the clause has been
/// boxed into a model.
#[derive(Debug, Clone)]
pub struct CountingClause {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingClause {
    /// Creates a clause that always answers `answer`.
    pub fn always(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a handle to the invocation counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Returns the number of invocations so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<I: ?Sized, E> Clause<I, E> for CountingClause {
    fn evaluate(&mut self, _input: &I) -> Result<bool, E> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}
