use thiserror::Error;

use super::Refiner;

/// Configuration for a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Initial probe step for bracketing.
    pub initial_step: f64,

    /// Strategy used to shrink the bracket.
    pub refiner: Refiner,

    /// Target accuracy of the refined minimizer.
    pub accuracy: f64,

    /// Maximum number of step doublings while bracketing.
    pub max_expansions: usize,

    /// Maximum number of refinement iterations.
    pub max_refinements: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive, got {0}")]
    InitialStep(f64),

    #[error("line accuracy must be finite and positive, got {0}")]
    Accuracy(f64),

    #[error("max_expansions must be at least 1")]
    MaxExpansions,

    #[error("max_refinements must be at least 1")]
    MaxRefinements,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_step: 0.1,
            refiner: Refiner::default(),
            accuracy: 0.01,
            max_expansions: 200,
            max_refinements: 1000,
        }
    }
}

impl Config {
    /// Validates step, accuracy, and iteration caps.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(ConfigError::InitialStep(self.initial_step));
        }
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(ConfigError::Accuracy(self.accuracy));
        }
        if self.max_expansions == 0 {
            return Err(ConfigError::MaxExpansions);
        }
        if self.max_refinements == 0 {
            return Err(ConfigError::MaxRefinements);
        }
        Ok(())
    }
}
