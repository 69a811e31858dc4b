//! Finite-difference gradient estimates.
//!
//! Element `i` of the estimate perturbs only coordinate `i`:
//!
//! ```text
//! left:      (f(x) − f(x − h·eᵢ)) / h
//! right:     (f(x + h·eᵢ) − f(x)) / h
//! symmetric: (f(x + h·eᵢ) − f(x − h·eᵢ)) / 2h
//! ```
//!
//! One-sided methods need `f(x)`; callers that already know it can pass it in
//! to save an evaluation. The symmetric method never uses it.

use std::{array, fmt, str::FromStr};

use contour_core::{Objective, vector};
use thiserror::Error;

use crate::ParseOptionError;

/// Finite-difference scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Backward difference.
    Left,

    /// Forward difference.
    Right,

    /// Central difference.
    #[default]
    Symmetric,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Symmetric => "symmetric",
        })
    }
}

impl FromStr for Method {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "symmetric" => Ok(Self::Symmetric),
            _ => Err(ParseOptionError::new(
                "derivation method",
                s,
                "left, right, symmetric",
            )),
        }
    }
}

/// Gradient estimation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub method: Method,
    pub step: f64,
}

/// Errors that can occur when validating a gradient config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("derivation step must be finite and non-zero, got {0}")]
    Step(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::Symmetric,
            step: 1e-3,
        }
    }
}

impl Config {
    /// Validates the derivation step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is zero or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step == 0.0 {
            return Err(ConfigError::Step(self.step));
        }
        Ok(())
    }

    /// Estimates the gradient of `objective` at `x` with these settings.
    pub fn estimate<O, const N: usize>(
        &self,
        objective: &O,
        x: &[f64; N],
        known_value: Option<f64>,
    ) -> [f64; N]
    where
        O: Objective<N> + ?Sized,
    {
        estimate(objective, x, self.step, self.method, known_value)
    }
}

/// Estimates the gradient of `objective` at `x` using finite differences.
///
/// `known_value` may carry an already-computed `f(x)` for the one-sided
/// methods. The caller must ensure `step ≠ 0`; non-finite objective values
/// propagate into the estimate.
pub fn estimate<O, const N: usize>(
    objective: &O,
    x: &[f64; N],
    step: f64,
    method: Method,
    known_value: Option<f64>,
) -> [f64; N]
where
    O: Objective<N> + ?Sized,
{
    match method {
        Method::Left => {
            let f0 = known_value.unwrap_or_else(|| objective.value(x));
            array::from_fn(|i| (f0 - objective.value(&vector::shifted(x, i, -step))) / step)
        }
        Method::Right => {
            let f0 = known_value.unwrap_or_else(|| objective.value(x));
            array::from_fn(|i| (objective.value(&vector::shifted(x, i, step)) - f0) / step)
        }
        Method::Symmetric => array::from_fn(|i| {
            let forward = objective.value(&vector::shifted(x, i, step));
            let backward = objective.value(&vector::shifted(x, i, -step));
            (forward - backward) / (2.0 * step)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn bowl(x: &[f64; 2]) -> f64 {
        x[0].powi(2) + 2.0 * x[1].powi(2)
    }

    #[test]
    fn left_difference_matches_formula() {
        let x = [2.0, 1.0];
        let h = 0.5;
        let f0 = bowl(&x);

        let gradient = estimate(&bowl, &x, h, Method::Left, None);

        assert_relative_eq!(gradient[0], (f0 - bowl(&[1.5, 1.0])) / h, epsilon = 1e-10);
        assert_relative_eq!(gradient[1], (f0 - bowl(&[2.0, 0.5])) / h, epsilon = 1e-10);
    }

    #[test]
    fn right_difference_matches_formula() {
        let x = [2.0, 1.0];
        let h = 0.5;
        let f0 = bowl(&x);

        let gradient = estimate(&bowl, &x, h, Method::Right, None);

        assert_relative_eq!(gradient[0], (bowl(&[2.5, 1.0]) - f0) / h, epsilon = 1e-10);
        assert_relative_eq!(gradient[1], (bowl(&[2.0, 1.5]) - f0) / h, epsilon = 1e-10);
    }

    #[test]
    fn symmetric_difference_matches_formula() {
        let x = [2.0, 1.0];
        let h = 0.5;

        let gradient = estimate(&bowl, &x, h, Method::Symmetric, None);

        let expected_0 = (bowl(&[2.5, 1.0]) - bowl(&[1.5, 1.0])) / (2.0 * h);
        let expected_1 = (bowl(&[2.0, 1.5]) - bowl(&[2.0, 0.5])) / (2.0 * h);
        assert_relative_eq!(gradient[0], expected_0, epsilon = 1e-10);
        assert_relative_eq!(gradient[1], expected_1, epsilon = 1e-10);
    }

    #[test]
    fn all_methods_approach_the_analytic_gradient() {
        let x = [2.0, 1.0];
        let analytic = [4.0, 4.0];

        for (method, h, tol) in [
            (Method::Left, 1e-6, 1e-5),
            (Method::Right, 1e-6, 1e-5),
            (Method::Symmetric, 1e-1, 1e-10),
        ] {
            let gradient = estimate(&bowl, &x, h, method, None);
            assert_relative_eq!(gradient[0], analytic[0], epsilon = tol);
            assert_relative_eq!(gradient[1], analytic[1], epsilon = tol);
        }
    }

    #[test]
    fn known_value_saves_an_evaluation() {
        let calls = Cell::new(0);
        let counted = |x: &[f64; 2]| {
            calls.set(calls.get() + 1);
            bowl(x)
        };
        let x = [2.0, 1.0];

        estimate(&counted, &x, 0.1, Method::Right, None);
        assert_eq!(calls.get(), 3);

        calls.set(0);
        estimate(&counted, &x, 0.1, Method::Right, Some(bowl(&x)));
        assert_eq!(calls.get(), 2);

        calls.set(0);
        estimate(&counted, &x, 0.1, Method::Symmetric, Some(bowl(&x)));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn config_rejects_degenerate_steps() {
        for step in [0.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                step,
                ..Config::default()
            };
            assert!(config.validate().is_err());
        }
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn methods_parse_from_names() {
        assert_eq!("left".parse::<Method>(), Ok(Method::Left));
        assert_eq!("symmetric".parse::<Method>(), Ok(Method::Symmetric));

        let err = "central".parse::<Method>().unwrap_err();
        assert_eq!(err.option(), "derivation method");
        assert_eq!(err.value(), "central");

        for method in [Method::Left, Method::Right, Method::Symmetric] {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }
}
