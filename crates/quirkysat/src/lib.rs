//! quirkysat - Weighted Clause Scoring in Rust
//!
//! Describe a decision as a list of boolean clauses, give each a weight, and
//! let a model decide whether an input scores high enough.
//!
//! # Example
//!
//! ```rust
//! use quirkysat::prelude::*;
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
//! assert!(!model.check(&11));
//! ```

// Clause abstraction and policies
pub use quirkysat_core::{
    boxed, BoxedClause, Clause, Decision, FallibleFn, Mapped, ModelKind, Not, QuirkyError, Result,
    ThresholdSource, Weight, Weighting,
};

// Scoring engine
pub use quirkysat_model::{ClauseOutcome, Model, ModelBuilder, ScoreExplanation};

// Configuration
pub use quirkysat_config::{ConfigError, ModelConfig};

/// Colored console output for model events.
#[cfg(feature = "console")]
pub mod console {
    pub use quirkysat_console::{init, ModelConsoleLayer};
}

/// Common imports for defining clauses and building models.
pub mod prelude {
    pub use super::{boxed, Clause, FallibleFn, Mapped, Not};
    pub use super::{Model, ModelBuilder, ModelKind, QuirkyError};
    pub use super::{ModelConfig, ScoreExplanation};
}
