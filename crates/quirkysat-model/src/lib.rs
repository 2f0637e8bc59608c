//! Clause scoring models for quirkysat.
//!
//! This crate provides the scoring engine:
//! - [`Model`], one engine configured as weighted, simple or absolute
//! - [`ModelBuilder`] for named, heterogeneous clauses and config-driven builds
//! - Score explanations for per-clause introspection
//!
//! # Example
//!
//! ```
//! use quirkysat_model::{boxed, Model};
//!
//! let mut model: Model<i64> = Model::weighted(
//!     vec![
//!         (boxed(|x: &i64| *x > 1), 10),
//!         (boxed(|x: &i64| *x < 10), 10),
//!         (boxed(|x: &i64| x % 2 == 0), 20),
//!     ],
//!     Some(20),
//! )
//! .unwrap();
//!
//! assert!(model.check(&12));
//! assert_eq!(model.score(&12), 30);
//! assert!(!model.check(&11));
//! ```

pub mod analysis;
pub mod builder;
pub mod model;


pub use analysis::{ClauseOutcome, ScoreExplanation};
pub use builder::ModelBuilder;
pub use model::Model;

pub use quirkysat_core::{
    boxed, BoxedClause, Clause, Decision, FallibleFn, Mapped, ModelKind, Not, QuirkyError, Result,
    ThresholdSource, Weight, Weighting,
};
