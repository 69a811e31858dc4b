//! One-dimensional minimization along a line.
//!
//! # Algorithm
//!
//! A line search runs in two stages:
//!
//! 1. [`sven`] expands a probe around a start point, doubling the step until
//!    the function rises again, and returns a [`Bracket`] `(a, m, b)` whose
//!    center value is no greater than either end.
//! 2. A [`Refiner`] shrinks the bracket to the requested accuracy:
//!    - [`golden_section`] keeps four points at golden-ratio spacing and
//!      discards the worse side each step
//!    - [`quadratic_interpolation`] (DSK-Powell) fits a parabola through the
//!      bracket and moves to its vertex
//!
//! # Limitations
//!
//! - **Unimodal assumption**: the function must have a single local minimum
//!   near the start point. A local maximum at the start is reported as
//!   [`Error::NotUnimodal`].
//! - **Bounded loops**: expansion and refinement each stop after a configured
//!   number of iterations with [`Error::NoConvergence`].

mod bracket;
mod config;
mod error;
mod golden_section;
mod point;
mod quadratic;
mod refiner;
mod sven;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::{Error, Phase};
pub use golden_section::golden_section;
pub use point::Point;
pub use quadratic::quadratic_interpolation;
pub use refiner::Refiner;
pub use sven::sven;

/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Bracket produced by the expansion stage.
    pub bracket: Bracket,

    /// Refined estimate of the minimizer.
    pub minimum: Point,
}

/// Brackets and refines a minimum of `g` starting from `origin`.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `g` is not unimodal around
/// `origin`, or if either stage exceeds its iteration cap.
pub fn search<G>(g: &G, origin: f64, config: &Config) -> Result<Outcome, Error>
where
    G: Fn(f64) -> f64 + ?Sized,
{
    config.validate()?;
    run(g, origin, config)
}

/// Runs a line search with a config the caller has already validated.
pub(crate) fn run<G>(g: &G, origin: f64, config: &Config) -> Result<Outcome, Error>
where
    G: Fn(f64) -> f64 + ?Sized,
{
    let bracket = sven(g, origin, config.initial_step, config.max_expansions)?;
    let minimum = config
        .refiner
        .refine(g, &bracket, config.accuracy, config.max_refinements)?;
    Ok(Outcome { bracket, minimum })
}
