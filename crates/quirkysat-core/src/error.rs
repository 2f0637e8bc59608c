//! Error types for quirkysat

use thiserror::Error;

/// Main error type for quirkysat model construction.
///
/// Faults raised by clauses during evaluation are never wrapped in this type;
/// they reach the caller as the clause's own error value.
#[derive(Debug, Error)]
pub enum QuirkyError {
    /// A clause weight was negative or unordered (NaN).
    #[error("Invalid weight for clause '{clause}': {weight}")]
    InvalidWeight { clause: String, weight: String },

    /// An explicit required score was negative or unordered (NaN).
    #[error("Invalid required score: {0}")]
    InvalidThreshold(String),

    /// Error in model configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for quirkysat operations
pub type Result<T> = std::result::Result<T, QuirkyError>;
