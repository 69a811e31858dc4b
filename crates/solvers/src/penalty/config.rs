use thiserror::Error;

use crate::conjugate_gradient;

/// Configuration for the penalty method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Penalty coefficient for the first outer iteration.
    pub initial_coefficient: f64,

    /// Factor applied to the coefficient after each infeasible outer iteration.
    pub growth: f64,

    /// Largest acceptable constraint violation.
    pub violation_tol: f64,

    /// Maximum number of outer iterations.
    pub max_outer_iters: usize,

    /// Settings for each inner minimization.
    pub inner: conjugate_gradient::Config,
}

/// Errors that can occur when validating a penalty config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("initial_coefficient must be finite and positive, got {0}")]
    InitialCoefficient(f64),

    #[error("growth must be finite and greater than 1, got {0}")]
    Growth(f64),

    #[error("violation_tol must be finite and non-negative, got {0}")]
    ViolationTol(f64),

    #[error("max_outer_iters must be at least 1")]
    MaxOuterIters,

    #[error("inner solver: {0}")]
    Inner(#[from] conjugate_gradient::ConfigError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_coefficient: 1.0,
            growth: 10.0,
            violation_tol: 1e-3,
            max_outer_iters: 20,
            inner: conjugate_gradient::Config::default(),
        }
    }
}

impl Config {
    /// Validates the outer settings and the inner solver config.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_coefficient.is_finite() || self.initial_coefficient <= 0.0 {
            return Err(ConfigError::InitialCoefficient(self.initial_coefficient));
        }
        if !self.growth.is_finite() || self.growth <= 1.0 {
            return Err(ConfigError::Growth(self.growth));
        }
        if !self.violation_tol.is_finite() || self.violation_tol < 0.0 {
            return Err(ConfigError::ViolationTol(self.violation_tol));
        }
        if self.max_outer_iters == 0 {
            return Err(ConfigError::MaxOuterIters);
        }
        self.inner.validate()?;
        Ok(())
    }
}
