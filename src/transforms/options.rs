//! Options controlling how transforms treat degenerate input

use serde::{Deserialize, Serialize};

use crate::{FigaroError, Result};

/// How degenerate rows are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Compute every row; zero vectors and zero distances surface as
    /// `NaN`/`inf` in the output
    #[default]
    Passthrough,
    /// Reject the first degenerate or non-finite row with a domain error
    Strict,
}

/// Options shared by all transforms of a [`super::CoordinateTransform`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub validation: Validation,
}

impl TransformOptions {
    /// Options with strict validation enabled
    pub fn strict() -> Self {
        TransformOptions {
            validation: Validation::Strict,
        }
    }

    /// Parse options from a JSON document
    ///
    /// Missing fields take their default values.
    ///
    /// ```rust
    /// use figaro::{TransformOptions, Validation};
    ///
    /// let options = TransformOptions::from_json(r#"{"validation": "strict"}"#).unwrap();
    /// assert_eq!(options.validation, Validation::Strict);
    ///
    /// let options = TransformOptions::from_json("{}").unwrap();
    /// assert_eq!(options.validation, Validation::Passthrough);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FigaroError::ConfigError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FigaroError::ConfigError(e.to_string()))
    }
}
