//! Weighting and decision policies.
//!
//! A model is one scoring engine configured by two independent policies:
//! how clause weights are assigned and how the pass/fail decision is made.
//! [`ModelKind`] names the three supported combinations.

use std::fmt;

/// How clause weights are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weighting {
    /// Every clause weighs exactly one, whatever the caller supplied.
    Uniform,
    /// Clauses keep the weight the caller supplied.
    CallerSupplied,
}

/// How the pass/fail decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Evaluate every clause, then compare the score against the threshold.
    Threshold,
    /// Stop at the first failing clause.
    AllMustPass,
}

/// Named model configurations.
///
/// # Example
///
/// ```
/// use quirkysat_core::{Decision, ModelKind, Weighting};
///
/// assert_eq!(ModelKind::default(), ModelKind::Simple);
/// assert_eq!(ModelKind::Weighted.weighting(), Weighting::CallerSupplied);
/// assert_eq!(ModelKind::Absolute.decision(), Decision::AllMustPass);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// Caller-supplied weights, threshold comparison.
    Weighted,
    /// Unit weights, threshold comparison with a clamped threshold.
    #[default]
    Simple,
    /// Unit weights, every clause must pass, short-circuiting.
    Absolute,
}

impl ModelKind {
    /// Returns the weighting policy of this configuration.
    pub const fn weighting(self) -> Weighting {
        match self {
            Self::Weighted => Weighting::CallerSupplied,
            Self::Simple | Self::Absolute => Weighting::Uniform,
        }
    }

    /// Returns the decision policy of this configuration.
    pub const fn decision(self) -> Decision {
        match self {
            Self::Weighted | Self::Simple => Decision::Threshold,
            Self::Absolute => Decision::AllMustPass,
        }
    }

    /// Returns the configuration name as used in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Simple => "simple",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a model's required score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdSource {
    /// Sum of clause weights at construction time.
    Derived,
    /// Supplied by the caller and used as is.
    Explicit,
    /// Supplied by the caller, then clamped down to the clause count.
    Clamped,
    /// Pinned to the clause count by the all-must-pass policy.
    ClauseCount,
}
