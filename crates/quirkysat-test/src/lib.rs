//! Shared test fixtures for quirkysat crates.
//!
//! This crate provides stateful clauses for testing evaluation order and
//! short-circuiting. It depends only on `quirkysat-core`, so every other
//! crate can use it as a dev-dependency.
//!
//! - [`counting`] - Clause that counts its invocations
//! - [`fibonacci`] - Clause that walks the Fibonacci sequence
//! - [`sequence`] - Clause that matches inputs against an expected sequence
//! - [`failing`] - Clause that always faults
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! quirkysat-test = { workspace = true }
//! ```

pub mod counting;
pub mod failing;
pub mod fibonacci;
pub mod sequence;

pub use counting::CountingClause;
pub use failing::FailingClause;
pub use fibonacci::FibonacciClause;
pub use sequence::SequenceClause;
