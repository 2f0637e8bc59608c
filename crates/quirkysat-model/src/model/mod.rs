//! The scoring engine.
//!
//! A [`Model`] owns an ordered list of clauses, each paired with a weight and
//! a name, and a required score. Its [`ModelKind`] fixes the weighting policy
//! (caller-supplied or uniform) and the decision policy (threshold comparison
//! or short-circuiting conjunction) at construction time.

mod evaluate;
#[cfg(feature = "parallel")]
mod parallel;

#[cfg(test)]
mod tests;

use std::convert::Infallible;
use std::fmt::{self, Debug};

use quirkysat_core::{
    BoxedClause, Clause, Decision, ModelKind, QuirkyError, Result, ThresholdSource, Weight,
    Weighting,
};
use tracing::{debug, warn};

/// A named, weighted clause as stored by a model.
pub(crate) struct ClauseEntry<I: ?Sized, W, E> {
    pub(crate) name: String,
    pub(crate) weight: W,
    pub(crate) clause: BoxedClause<I, E>,
}

impl<I: ?Sized, W, E> ClauseEntry<I, W, E> {
    pub(crate) fn new(name: String, weight: W, clause: BoxedClause<I, E>) -> Self {
        Self {
            name,
            weight,
            clause,
        }
    }
}

pub(crate) fn default_clause_name(index: usize) -> String {
    format!("clause-{}", index)
}

/// A weighted collection of clauses with a pass threshold.
///
/// # Type Parameters
/// * `I` - Input type; use a tuple for several arguments
/// * `W` - Weight and score type
/// * `E` - Fault type raised by clauses
///
/// # Example
///
/// ```
/// use quirkysat_model::{boxed, Model};
///
/// let mut model: Model<i64> = Model::absolute(vec![
///     boxed(|x: &i64| *x > 1),
///     boxed(|x: &i64| *x < 3),
/// ]);
///
/// assert!(!model.check(&1));
/// assert!(model.check(&2));
/// assert!(!model.check(&3));
/// ```
pub struct Model<I: ?Sized, W: Weight = i64, E = Infallible> {
    kind: ModelKind,
    clauses: Vec<ClauseEntry<I, W, E>>,
    required_score: W,
    threshold_source: ThresholdSource,
}

impl<I: ?Sized, W: Weight, E> Model<I, W, E> {
    /// Creates a weighted model.
    ///
    /// When `required_score` is `None` it defaults to the sum of the weights,
    /// which means every clause must pass. An empty model then has a zero
    /// threshold and accepts any input.
    ///
    /// # Errors
    ///
    /// Returns [`QuirkyError::InvalidWeight`] for a negative or NaN weight or
    /// when the weights do not sum without overflow, and
    /// [`QuirkyError::InvalidThreshold`] for a negative or NaN threshold.
    pub fn weighted(
        clauses: Vec<(BoxedClause<I, E>, W)>,
        required_score: Option<W>,
    ) -> Result<Self> {
        let entries = clauses
            .into_iter()
            .enumerate()
            .map(|(index, (clause, weight))| {
                ClauseEntry::new(default_clause_name(index), weight, clause)
            })
            .collect();
        Self::from_entries(ModelKind::Weighted, entries, required_score)
    }

    /// Creates a simple model where every clause weighs one.
    ///
    /// `required_score` defaults to the clause count and is clamped down to
    /// it when larger.
    ///
    /// # Errors
    ///
    /// Returns [`QuirkyError::InvalidThreshold`] for a negative or NaN
    /// threshold.
    pub fn simple(clauses: Vec<BoxedClause<I, E>>, required_score: Option<W>) -> Result<Self> {
        Self::from_entries(ModelKind::Simple, unit_entries(clauses), required_score)
    }

    /// Creates an absolute model: every clause must pass.
    ///
    /// The required score is the clause count and checking stops at the
    /// first failing clause.
    pub fn absolute(clauses: Vec<BoxedClause<I, E>>) -> Self {
        Self::with_clause_count(ModelKind::Absolute, unit_entries(clauses))
    }

    /// Creates a model in the default configuration (simple, all clauses
    /// required).
    pub fn new(clauses: Vec<BoxedClause<I, E>>) -> Self {
        Self::with_clause_count(ModelKind::default(), unit_entries(clauses))
    }

    fn with_clause_count(kind: ModelKind, clauses: Vec<ClauseEntry<I, W, E>>) -> Self {
        let required_score = W::from_count(clauses.len());
        let threshold_source = match kind.decision() {
            Decision::AllMustPass => ThresholdSource::ClauseCount,
            Decision::Threshold => ThresholdSource::Derived,
        };
        Self {
            kind,
            clauses,
            required_score,
            threshold_source,
        }
    }

    pub(crate) fn from_entries(
        kind: ModelKind,
        entries: Vec<ClauseEntry<I, W, E>>,
        required_score: Option<W>,
    ) -> Result<Self> {
        let mut clauses = Vec::with_capacity(entries.len());
        let mut max_score = W::zero();
        for entry in entries {
            let entry = admit(kind, entry)?;
            max_score = add_to_max(max_score, &entry)?;
            clauses.push(entry);
        }

        let count = W::from_count(clauses.len());
        let (required_score, threshold_source) = match (kind.decision(), required_score) {
            (Decision::AllMustPass, supplied) => {
                if let Some(supplied) = supplied {
                    warn!(
                        event = "threshold_ignored",
                        kind = %kind,
                        supplied = ?supplied,
                        "Required score ignored, every clause must pass"
                    );
                }
                (count, ThresholdSource::ClauseCount)
            }
            (Decision::Threshold, None) => (max_score, ThresholdSource::Derived),
            (Decision::Threshold, Some(supplied)) => {
                if !supplied.is_valid_weight() {
                    return Err(QuirkyError::InvalidThreshold(format!("{:?}", supplied)));
                }
                if kind.weighting() == Weighting::Uniform && supplied > count {
                    warn!(
                        event = "threshold_clamped",
                        kind = %kind,
                        supplied = ?supplied,
                        clause_count = clauses.len(),
                        "Required score clamped to clause count"
                    );
                    (count, ThresholdSource::Clamped)
                } else {
                    (supplied, ThresholdSource::Explicit)
                }
            }
        };

        debug!(
            event = "model_built",
            kind = %kind,
            clause_count = clauses.len(),
            required = ?required_score,
            "Model built"
        );

        Ok(Self {
            kind,
            clauses,
            required_score,
            threshold_source,
        })
    }

    /// Appends a clause with the given weight, named after its position.
    ///
    /// An explicit or derived threshold is never recomputed. Under uniform
    /// weighting the weight is forced to one. An absolute model keeps its
    /// threshold equal to the clause count.
    ///
    /// # Errors
    ///
    /// Returns [`QuirkyError::InvalidWeight`] for a negative or NaN weight, or
    /// when the weights of all clauses would no longer sum without overflow.
    pub fn push_clause<C>(&mut self, clause: C, weight: W) -> Result<()>
    where
        C: Clause<I, E> + 'static,
    {
        let name = default_clause_name(self.clauses.len());
        self.push_named_clause(name, clause, weight)
    }

    /// Appends a named clause with the given weight.
    ///
    /// # Errors
    ///
    /// Same as [`Model::push_clause`].
    pub fn push_named_clause<C>(
        &mut self,
        name: impl Into<String>,
        clause: C,
        weight: W,
    ) -> Result<()>
    where
        C: Clause<I, E> + 'static,
    {
        let entry = admit(self.kind, ClauseEntry::new(name.into(), weight, Box::new(clause)))?;
        add_to_max(self.max_score(), &entry)?;

        debug!(
            event = "clause_pushed",
            clause = %entry.name,
            weight = ?entry.weight,
            "Clause pushed"
        );
        self.clauses.push(entry);
        if self.kind.decision() == Decision::AllMustPass {
            self.required_score = W::from_count(self.clauses.len());
        }
        Ok(())
    }

    /// Returns the model configuration.
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Returns the score needed for the model to pass.
    pub fn required_score(&self) -> W {
        self.required_score
    }

    /// Returns where the required score came from.
    pub fn threshold_source(&self) -> ThresholdSource {
        self.threshold_source
    }

    /// Returns the score reached when every clause passes.
    pub fn max_score(&self) -> W {
        self.clauses
            .iter()
            .fold(W::zero(), |acc, entry| acc.saturating_add_weight(entry.weight))
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if the model has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the clause names in evaluation order.
    pub fn clause_names(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|entry| entry.name.as_str())
    }

    /// Returns the weight of the named clause.
    pub fn clause_weight(&self, name: &str) -> Option<W> {
        self.clauses
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.weight)
    }
}

impl<I: ?Sized, W: Weight, E> Debug for Model<I, W, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("kind", &self.kind)
            .field("clauses", &self.clauses.iter().map(|e| &e.name).collect::<Vec<_>>())
            .field("required_score", &self.required_score)
            .field("threshold_source", &self.threshold_source)
            .finish()
    }
}

fn unit_entries<I: ?Sized, W: Weight, E>(
    clauses: Vec<BoxedClause<I, E>>,
) -> Vec<ClauseEntry<I, W, E>> {
    clauses
        .into_iter()
        .enumerate()
        .map(|(index, clause)| ClauseEntry::new(default_clause_name(index), W::one(), clause))
        .collect()
}

// Applies the weighting policy and rejects unusable weights.
fn admit<I: ?Sized, W: Weight, E>(
    kind: ModelKind,
    entry: ClauseEntry<I, W, E>,
) -> Result<ClauseEntry<I, W, E>> {
    match kind.weighting() {
        Weighting::Uniform => Ok(ClauseEntry {
            weight: W::one(),
            ..entry
        }),
        Weighting::CallerSupplied if entry.weight.is_valid_weight() => Ok(entry),
        Weighting::CallerSupplied => Err(QuirkyError::InvalidWeight {
            clause: entry.name,
            weight: format!("{:?}", entry.weight),
        }),
    }
}

fn add_to_max<I: ?Sized, W: Weight, E>(max_score: W, entry: &ClauseEntry<I, W, E>) -> Result<W> {
    max_score
        .checked_add_weight(entry.weight)
        .ok_or_else(|| QuirkyError::InvalidWeight {
            clause: entry.name.clone(),
            weight: format!("{:?} (total overflows)", entry.weight),
        })
}

