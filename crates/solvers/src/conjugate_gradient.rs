//! Nonlinear conjugate-gradient minimization.
//!
//! # Algorithm
//!
//! Starting from `x₀` with direction `s₀ = −∇f(x₀)`, each iteration:
//!
//! 1. Minimizes `g(λ) = f(x + λ·s)` with a [line search](crate::line),
//!    giving a step length `λ*` and value `f₁`.
//! 2. Optionally [restarts](Restart): if `λ* < threshold` for a positive
//!    threshold, the conjugate direction is discarded in favor of `−∇f(x)`.
//! 3. Steps to `x₁ = x + λ*·s` and estimates `∇₁` by
//!    [finite differences](crate::gradient).
//! 4. Checks the [`Termination`] criterion and the iteration cap.
//! 5. Blends the next direction `s₁ = −∇₁ + w·s` where `w` comes from the
//!    [`Modification`] rule, clamped to `w ≥ 0` unless
//!    [`Config::clamp_weight`] is off.
//!
//! On a quadratic with exact line searches this reaches the minimum in at most
//! `N` iterations; elsewhere it behaves like an accelerated steepest descent.
//!
//! # Observer Events
//!
//! One [`IterationRecord`] is emitted per iteration, after the restart
//! decision and before the termination check, so the final iteration is
//! recorded too. Records describe the point the iteration started from and
//! the direction the step was applied along.
//!
//! # Limitations
//!
//! - **Derivative-free gradient**: accuracy is bounded by the finite-difference
//!   step; a step that is too small amplifies rounding noise.
//! - **Line search failures are fatal**: a non-unimodal restriction or an
//!   exhausted line-search cap aborts the run with [`Error::LineSearch`].

mod config;
mod error;
mod modification;
mod record;
mod search;
mod solution;
mod state;
mod termination;


pub use config::{Config, ConfigError, Restart, RestartPolicy};
pub use error::Error;
pub use modification::Modification;
pub use record::IterationRecord;
pub use solution::{Solution, Status};
pub use termination::Termination;

use contour_core::{Objective, Observer};

/// Minimizes `objective` starting from `x0`.
///
/// The observer receives one [`IterationRecord`] per iteration.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `N` is zero, or if a line
/// search fails.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
    Obs: Observer<IterationRecord<N>>,
{
    config.validate()?;
    if N == 0 {
        return Err(Error::ZeroDimension);
    }
    search::search(objective, x0, config, observer)
}

/// Minimizes `objective` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
{
    minimize(objective, x0, config, ())
}
