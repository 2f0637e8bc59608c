//! Score analysis types for per-clause introspection.
//!
//! A [`ScoreExplanation`] records what every clause answered for one input,
//! which weight it carried and whether the total met the threshold.

use quirkysat_core::Weight;

/// Outcome of a single clause for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseOutcome<W> {
    /// Clause name.
    pub name: String,
    /// Clause weight.
    pub weight: W,
    /// Whether the clause passed.
    pub passed: bool,
}

impl<W: Weight> ClauseOutcome<W> {
    /// Creates a new outcome.
    pub fn new(name: impl Into<String>, weight: W, passed: bool) -> Self {
        Self {
            name: name.into(),
            weight,
            passed,
        }
    }

    /// Returns the score this clause added: its weight if it passed, zero
    /// otherwise.
    pub fn contribution(&self) -> W {
        if self.passed {
            self.weight
        } else {
            W::zero()
        }
    }
}

/// Per-clause breakdown of a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreExplanation<W> {
    /// The total score.
    pub score: W,
    /// The model's required score.
    pub required_score: W,
    /// Outcomes in evaluation order.
    pub outcomes: Vec<ClauseOutcome<W>>,
}

impl<W: Weight> ScoreExplanation<W> {
    /// Creates a new explanation.
    pub fn new(score: W, required_score: W, outcomes: Vec<ClauseOutcome<W>>) -> Self {
        Self {
            score,
            required_score,
            outcomes,
        }
    }

    /// Returns true if the score meets the required score.
    pub fn is_satisfied(&self) -> bool {
        self.score >= self.required_score
    }

    /// Returns the number of clauses that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Returns the clauses that failed.
    pub fn failed_clauses(&self) -> Vec<&ClauseOutcome<W>> {
        self.outcomes.iter().filter(|o| !o.passed).collect()
    }

    /// Returns the clauses that added a non-zero amount to the score.
    pub fn contributing_clauses(&self) -> Vec<&ClauseOutcome<W>> {
        self.outcomes
            .iter()
            .filter(|o| o.contribution() > W::zero())
            .collect()
    }

    /// Returns the outcome of the named clause.
    pub fn outcome(&self, name: &str) -> Option<&ClauseOutcome<W>> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
