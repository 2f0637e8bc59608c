//! quirkysat Core - Clause abstraction and scoring policies
//!
//! This crate provides the fundamental abstractions for quirkysat:
//! - The [`Clause`] capability trait and its combinators
//! - The [`Weight`] trait for clause weights and thresholds
//! - Weighting and decision policies selected per model
//! - The crate-wide error type

pub mod clause;
pub mod error;
pub mod policy;
pub mod weight;


pub use clause::{boxed, BoxedClause, Clause, FallibleFn, Mapped, Not};
pub use error::{QuirkyError, Result};
pub use policy::{Decision, ModelKind, ThresholdSource, Weighting};
pub use weight::Weight;
