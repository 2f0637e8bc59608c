//! Sequential evaluation.
//!
//! `score` always evaluates every clause. `check` compares the score with the
//! threshold, except under the all-must-pass policy where it stops at the
//! first failing clause. Clause faults are returned as is.

use std::convert::Infallible;

use quirkysat_core::{Clause, Decision, Weight};
use tracing::{debug, trace};

use super::Model;
use crate::analysis::{ClauseOutcome, ScoreExplanation};

impl<I: ?Sized, W: Weight, E> Model<I, W, E> {
    /// Sums the weights of the clauses that pass on `input`.
    ///
    /// Every clause is invoked exactly once, in insertion order, even after a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by a clause, unmodified. Clauses after
    /// the faulting one are not invoked.
    pub fn try_score(&mut self, input: &I) -> Result<W, E> {
        let mut score = W::zero();
        for entry in &mut self.clauses {
            let passed = entry.clause.evaluate(input)?;
            trace!(clause = %entry.name, passed, "Clause evaluated");
            if passed {
                score = score.saturating_add_weight(entry.weight);
            }
        }
        Ok(score)
    }

    /// Decides whether `input` satisfies the model.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by a clause, unmodified.
    pub fn try_check(&mut self, input: &I) -> Result<bool, E> {
        match self.kind.decision() {
            Decision::Threshold => {
                let score = self.try_score(input)?;
                let satisfied = score >= self.required_score;
                debug!(
                    event = "verdict",
                    kind = %self.kind,
                    score = ?score,
                    required = ?self.required_score,
                    satisfied,
                    "Model evaluated"
                );
                Ok(satisfied)
            }
            Decision::AllMustPass => self.try_check_all(input),
        }
    }

    fn try_check_all(&mut self, input: &I) -> Result<bool, E> {
        let total = self.clauses.len();
        for (index, entry) in self.clauses.iter_mut().enumerate() {
            let passed = entry.clause.evaluate(input)?;
            trace!(clause = %entry.name, passed, "Clause evaluated");
            if !passed {
                debug!(
                    event = "short_circuit",
                    kind = %self.kind,
                    clause = %entry.name,
                    skipped = total - index - 1,
                    "Model short-circuited"
                );
                return Ok(false);
            }
        }
        debug!(
            event = "verdict",
            kind = %self.kind,
            passed_count = total,
            clause_count = total,
            satisfied = true,
            "Model evaluated"
        );
        Ok(true)
    }

    /// Evaluates every clause and reports each outcome.
    ///
    /// Follows the same policy as [`Model::try_score`], including for absolute
    /// models.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by a clause, unmodified.
    pub fn try_explain(&mut self, input: &I) -> Result<ScoreExplanation<W>, E> {
        let mut score = W::zero();
        let mut outcomes = Vec::with_capacity(self.clauses.len());
        for entry in &mut self.clauses {
            let passed = entry.clause.evaluate(input)?;
            if passed {
                score = score.saturating_add_weight(entry.weight);
            }
            outcomes.push(ClauseOutcome::new(entry.name.clone(), entry.weight, passed));
        }
        Ok(ScoreExplanation::new(score, self.required_score, outcomes))
    }
}

impl<I: ?Sized, W: Weight> Model<I, W, Infallible> {
    /// Sums the weights of the clauses that pass on `input`.
    ///
    /// See [`Model::try_score`].
    pub fn score(&mut self, input: &I) -> W {
        into_ok(self.try_score(input))
    }

    /// Decides whether `input` satisfies the model.
    ///
    /// See [`Model::try_check`].
    pub fn check(&mut self, input: &I) -> bool {
        into_ok(self.try_check(input))
    }

    /// Evaluates every clause and reports each outcome.
    pub fn explain(&mut self, input: &I) -> ScoreExplanation<W> {
        into_ok(self.try_explain(input))
    }
}

/// A model is itself a clause: its decision on the input.
impl<I: ?Sized, W: Weight, E> Clause<I, E> for Model<I, W, E> {
    fn evaluate(&mut self, input: &I) -> Result<bool, E> {
        self.try_check(input)
    }
}

pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
