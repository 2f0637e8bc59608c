//! Configuration system for quirkysat.
//!
//! Load model configuration from TOML or YAML to pick the model kind, the
//! required score and per-clause weight overrides without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use quirkysat_config::ModelConfig;
//! use quirkysat_core::ModelKind;
//!
//! let config: ModelConfig = ModelConfig::from_toml_str(r#"
//!     kind = "weighted"
//!     required_score = 20
//!
//!     [weights]
//!     positive = 10
//!     even = 20
//! "#).unwrap();
//!
//! assert_eq!(config.kind, ModelKind::Weighted);
//! assert_eq!(config.required_score, Some(20));
//! assert_eq!(config.weight("even"), Some(20));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use quirkysat_config::ModelConfig;
//!
//! let config: ModelConfig = ModelConfig::load("model.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use quirkysat_core::{ModelKind, QuirkyError, Weight};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for QuirkyError {
    fn from(err: ConfigError) -> Self {
        QuirkyError::Config(err.to_string())
    }
}

/// Model configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub struct ModelConfig<W = i64> {
    /// Which model configuration to build.
    #[serde(default)]
    pub kind: ModelKind,

    /// Explicit required score. Derived from the clauses when absent.
    #[serde(default)]
    pub required_score: Option<W>,

    /// Weight overrides keyed by clause name.
    #[serde(default)]
    pub weights: BTreeMap<String, W>,
}

impl<W: Weight> ModelConfig<W> {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self {
            kind: ModelKind::default(),
            required_score: None,
            weights: BTreeMap::new(),
        }
    }

    /// Sets the model kind.
    pub fn with_kind(mut self, kind: ModelKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the required score.
    pub fn with_required_score(mut self, required_score: W) -> Self {
        self.required_score = Some(required_score);
        self
    }

    /// Adds a weight override for a named clause.
    pub fn with_weight(mut self, clause: impl Into<String>, weight: W) -> Self {
        self.weights.insert(clause.into(), weight);
        self
    }

    /// Returns the override for a clause, if configured.
    pub fn weight(&self, clause: &str) -> Option<W> {
        self.weights.get(clause).copied()
    }

    /// Checks that every configured number is a usable weight.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first negative or
    /// unordered value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(required) = self.required_score {
            if !required.is_valid_weight() {
                return Err(ConfigError::Invalid(format!(
                    "required_score must be non-negative, got {:?}",
                    required
                )));
            }
        }
        for (name, weight) in &self.weights {
            if !weight.is_valid_weight() {
                return Err(ConfigError::Invalid(format!(
                    "weight for clause '{}' must be non-negative, got {:?}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

impl<W: Weight + DeserializeOwned> ModelConfig<W> {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
