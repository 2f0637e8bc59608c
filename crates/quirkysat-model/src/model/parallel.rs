//! Concurrent clause evaluation.
//!
//! A separate mode from the sequential `score`/`check` contract: every
//! clause is evaluated on the rayon pool, results are gathered, then scored
//! in insertion order. Nothing short-circuits here, not even for absolute
//! models, and when several clauses fault it is unspecified which fault is
//! returned.

use std::convert::Infallible;

use quirkysat_core::{Decision, Weight};
use rayon::prelude::*;
use tracing::debug;

use super::evaluate::into_ok;
use super::Model;

impl<I, W, E> Model<I, W, E>
where
    I: ?Sized + Sync,
    W: Weight,
    E: Send,
{
    fn gather(&mut self, input: &I) -> Result<Vec<bool>, E> {
        self.clauses
            .par_iter_mut()
            .map(|entry| entry.clause.evaluate(input))
            .collect()
    }

    /// Scores `input` with all clauses evaluated concurrently.
    ///
    /// # Errors
    ///
    /// Returns a fault raised by one of the clauses, unmodified.
    pub fn par_try_score(&mut self, input: &I) -> Result<W, E> {
        let results = self.gather(input)?;
        Ok(self
            .clauses
            .iter()
            .zip(results)
            .filter(|(_, passed)| *passed)
            .fold(W::zero(), |acc, (entry, _)| acc.saturating_add_weight(entry.weight)))
    }

    /// Decides `input` with all clauses evaluated concurrently.
    ///
    /// # Errors
    ///
    /// Returns a fault raised by one of the clauses, unmodified.
    pub fn par_try_check(&mut self, input: &I) -> Result<bool, E> {
        match self.kind.decision() {
            Decision::Threshold => {
                let score = self.par_try_score(input)?;
                let satisfied = score >= self.required_score;
                debug!(
                    event = "verdict",
                    kind = %self.kind,
                    mode = "parallel",
                    score = ?score,
                    required = ?self.required_score,
                    satisfied,
                    "Model evaluated"
                );
                Ok(satisfied)
            }
            Decision::AllMustPass => {
                let passed_count = self.gather(input)?.into_iter().filter(|p| *p).count();
                let satisfied = passed_count == self.clauses.len();
                debug!(
                    event = "verdict",
                    kind = %self.kind,
                    mode = "parallel",
                    passed_count,
                    clause_count = self.clauses.len(),
                    satisfied,
                    "Model evaluated"
                );
                Ok(satisfied)
            }
        }
    }
}

impl<I, W> Model<I, W, Infallible>
where
    I: ?Sized + Sync,
    W: Weight,
{
    /// Scores `input` with all clauses evaluated concurrently.
    pub fn par_score(&mut self, input: &I) -> W {
        into_ok(self.par_try_score(input))
    }

    /// Decides `input` with all clauses evaluated concurrently.
    pub fn par_check(&mut self, input: &I) -> bool {
        into_ok(self.par_try_check(input))
    }
}
