//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BayesianError, Result};

/// Configuration for a naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of categories. Must be at least 1.
    pub categories: usize,
    /// Lidstone smoothing constant added to every word count.
    /// 1.0 gives Laplace smoothing, 0.0 disables smoothing.
    pub smoothing_factor: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: 2,
            smoothing_factor: 1.0,
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration.
    pub fn new(categories: usize, smoothing_factor: f64) -> Self {
        Self {
            categories,
            smoothing_factor,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.categories == 0 {
            return Err(BayesianError::InvalidCategoryCount(self.categories));
        }
        validate_smoothing_factor(self.smoothing_factor)
    }
}

/// Reject negative, NaN and infinite smoothing factors.
pub(crate) fn validate_smoothing_factor(smoothing_factor: f64) -> Result<()> {
    if !smoothing_factor.is_finite() || smoothing_factor < 0.0 {
        return Err(BayesianError::InvalidSmoothingFactor(smoothing_factor));
    }
    Ok(())
}
