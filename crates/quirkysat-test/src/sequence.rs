//! Expected-sequence clause.

use quirkysat_core::Clause;

/// Passes when the input equals the next element of an expected sequence.
///
/// Every invocation consumes one element. Once the sequence is exhausted the
/// clause fails.
#[derive(Debug, Clone)]
pub struct SequenceClause<T> {
    expected: Vec<T>,
    cursor: usize,
}

impl<T> SequenceClause<T> {
    pub fn new(expected: impl IntoIterator<Item = T>) -> Self {
        Self {
            expected: expected.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Returns how many elements have been consumed.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<T: PartialEq + Send, E> Clause<T, E> for SequenceClause<T> {
    fn evaluate(&mut self, input: &T) -> Result<bool, E> {
        let passed = self.expected.get(self.cursor) == Some(input);
        self.cursor += 1;
        Ok(passed)
    }
}
