use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{ParseOptionError, gradient, line};

use super::{Modification, Termination};

/// Configuration for the conjugate-gradient solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Finite-difference gradient settings.
    pub gradient: gradient::Config,

    /// Line search settings for each step.
    pub line: line::Config,

    /// Rule for the direction blend weight.
    pub modification: Modification,

    /// Stopping rule.
    pub termination: Termination,

    /// Tolerance used by the stopping rule.
    pub accuracy: f64,

    /// Restart policy; `None` disables restarts.
    pub restart: Option<Restart>,

    /// Clamp the blend weight to be non-negative.
    pub clamp_weight: bool,

    /// Maximum number of iterations; `None` removes the cap.
    pub max_iters: Option<usize>,
}

/// Resets the search direction to steepest descent after a short step.
///
/// A threshold of zero or below never triggers, so `threshold = -1` in a
/// config file runs without restarts, the same as leaving `restart` unset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restart {
    /// A step length `λ* < threshold` triggers a restart.
    pub threshold: f64,

    /// What to do with the step once a restart triggers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: RestartPolicy,
}

/// How a restart treats the step that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RestartPolicy {
    /// Keep the step length found along the old direction and apply it along
    /// `−∇f(x)`.
    #[default]
    KeepStep,

    /// Run a fresh line search along `−∇f(x)` and take that step instead.
    SearchAgain,
}

/// Errors that can occur when validating a conjugate-gradient config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("gradient: {0}")]
    Gradient(#[from] gradient::ConfigError),

    #[error("line search: {0}")]
    Line(#[from] line::ConfigError),

    #[error("accuracy must be finite and positive, got {0}")]
    Accuracy(f64),

    #[error("restart threshold must be a number, got {0}")]
    RestartThreshold(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradient: gradient::Config::default(),
            line: line::Config::default(),
            modification: Modification::default(),
            termination: Termination::default(),
            accuracy: 1e-3,
            restart: None,
            clamp_weight: true,
            max_iters: Some(10_000),
        }
    }
}

impl Config {
    /// Validates this config and the nested gradient and line configs.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gradient.validate()?;
        self.line.validate()?;
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(ConfigError::Accuracy(self.accuracy));
        }
        if let Some(Restart { threshold, .. }) = self.restart {
            if threshold.is_nan() {
                return Err(ConfigError::RestartThreshold(threshold));
            }
        }
        if self.max_iters == Some(0) {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}

impl Restart {
    #[must_use]
    pub fn new(threshold: f64, policy: RestartPolicy) -> Self {
        Self { threshold, policy }
    }

    /// Returns `true` if restarts can trigger at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.threshold > 0.0
    }

    /// Returns `true` if a step of `step_length` should trigger a restart.
    #[must_use]
    pub fn triggers(&self, step_length: f64) -> bool {
        self.is_enabled() && step_length < self.threshold
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::KeepStep => "keep_step",
            Self::SearchAgain => "search_again",
        })
    }
}

impl FromStr for RestartPolicy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_step" => Ok(Self::KeepStep),
            "search_again" => Ok(Self::SearchAgain),
            _ => Err(ParseOptionError::new(
                "restart policy",
                s,
                "keep_step, search_again",
            )),
        }
    }
}
