//! Fluent model construction.
//!
//! The builder accepts clauses of different concrete types, names them,
//! applies weight overrides and finally hands everything to the engine.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::path::Path;

use quirkysat_config::ModelConfig;
use quirkysat_core::{Clause, ModelKind, Result, Weight};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{default_clause_name, ClauseEntry, Model};

/// Builder for [`Model`].
///
/// # Example
///
/// ```
/// use quirkysat_model::{Model, ModelBuilder, ModelKind};
///
/// let mut model: Model<i64> = ModelBuilder::new(ModelKind::Weighted)
///     .named_clause("positive", |x: &i64| *x > 1, 10)
///     .named_clause("small", |x: &i64| *x < 10, 10)
///     .named_clause("even", |x: &i64| x % 2 == 0, 20)
///     .required_score(20)
///     .build()
///     .unwrap();
///
/// assert_eq!(model.score(&11), 10);
/// assert!(!model.check(&11));
/// ```
pub struct ModelBuilder<I: ?Sized, W: Weight = i64, E = Infallible> {
    kind: ModelKind,
    entries: Vec<ClauseEntry<I, W, E>>,
    required_score: Option<W>,
    // Replacement weights keyed by clause name, applied at build time
    overrides: BTreeMap<String, W>,
}

impl<I: ?Sized, W: Weight, E> ModelBuilder<I, W, E> {
    /// Creates a builder for the given configuration.
    pub fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            required_score: None,
            overrides: BTreeMap::new(),
        }
    }

    /// Creates a builder for a weighted model.
    pub fn weighted() -> Self {
        Self::new(ModelKind::Weighted)
    }

    /// Creates a builder for a simple model.
    pub fn simple() -> Self {
        Self::new(ModelKind::Simple)
    }

    /// Creates a builder for an absolute model.
    pub fn absolute() -> Self {
        Self::new(ModelKind::Absolute)
    }

    /// Creates a builder from a loaded configuration.
    ///
    /// The configuration supplies the kind, the required score and the weight
    /// overrides.
    pub fn from_config(config: &ModelConfig<W>) -> Self {
        Self {
            kind: config.kind,
            entries: Vec::new(),
            required_score: config.required_score,
            overrides: config.weights.clone(),
        }
    }

    /// Creates a builder from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`quirkysat_core::QuirkyError::Config`] if the file cannot be
    /// read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self>
    where
        W: DeserializeOwned,
    {
        let config = ModelConfig::from_toml_file(path)?;
        Ok(Self::from_config(&config))
    }

    /// Adds a clause with weight one.
    pub fn clause<C>(self, clause: C) -> Self
    where
        C: Clause<I, E> + 'static,
    {
        self.weighted_clause(clause, W::one())
    }

    /// Adds a clause with the given weight, named after its position.
    pub fn weighted_clause<C>(self, clause: C, weight: W) -> Self
    where
        C: Clause<I, E> + 'static,
    {
        let name = default_clause_name(self.entries.len());
        self.named_clause(name, clause, weight)
    }

    /// Adds a named clause with the given weight.
    pub fn named_clause<C>(mut self, name: impl Into<String>, clause: C, weight: W) -> Self
    where
        C: Clause<I, E> + 'static,
    {
        self.entries
            .push(ClauseEntry::new(name.into(), weight, Box::new(clause)));
        self
    }

    /// Sets an explicit required score.
    pub fn required_score(mut self, required_score: W) -> Self {
        self.required_score = Some(required_score);
        self
    }

    /// Replaces the weight of the named clauses, on top of any overrides
    /// already set. Names that match no clause are ignored.
    ///
    /// Overrides apply at [`ModelBuilder::build`], so they also reach clauses
    /// added after this call. Uniform weighting still forces every weight to
    /// one.
    pub fn weight_overrides<N>(mut self, overrides: impl IntoIterator<Item = (N, W)>) -> Self
    where
        N: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(name, weight)| (name.into(), weight)));
        self
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// Returns [`quirkysat_core::QuirkyError::InvalidWeight`] or
    /// [`quirkysat_core::QuirkyError::InvalidThreshold`] for negative or NaN
    /// values, including overridden weights.
    pub fn build(self) -> Result<Model<I, W, E>> {
        let Self {
            kind,
            entries,
            required_score,
            overrides,
        } = self;

        let entries = entries
            .into_iter()
            .map(|mut entry| {
                if let Some(&weight) = overrides.get(&entry.name) {
                    debug!(
                        event = "weight_override",
                        clause = %entry.name,
                        from = ?entry.weight,
                        to = ?weight,
                        "Clause weight overridden"
                    );
                    entry.weight = weight;
                }
                entry
            })
            .collect();

        Model::from_entries(kind, entries, required_score)
    }
}
