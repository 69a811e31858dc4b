//! Exterior quadratic penalty method for inequality constraints.
//!
//! # Algorithm
//!
//! Constraints `cⱼ(x) ≤ 0` are folded into the objective:
//!
//! ```text
//! f_r(x) = f(x) + r · Σⱼ max(0, cⱼ(x))²
//! ```
//!
//! Each outer iteration minimizes `f_r` with the
//! [conjugate-gradient solver](crate::conjugate_gradient), starting from the
//! previous outer result. If the largest violation at the result is within
//! tolerance the search stops; otherwise `r` is multiplied by the growth factor
//! and the loop repeats. Feasible points carry no penalty, so the start point
//! does not need to be feasible.
//!
//! # Observer Events
//!
//! - [`Event::Inner`] forwards every inner [`IterationRecord`] tagged with the
//!   outer iteration and coefficient in force.
//! - [`Event::Outer`] is emitted once per outer iteration, after the inner
//!   solve and before the stopping check.
//!
//! [`IterationRecord`]: crate::conjugate_gradient::IterationRecord

mod config;
mod error;
mod event;
mod penalized;
mod search;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, OuterRecord};
pub use penalized::{Penalized, max_violation};
pub use solution::{Solution, Status};

use contour_core::{Constraint, Objective, Observer};

/// Minimizes `objective` subject to `constraints`, starting from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid or an inner solve fails.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    constraints: &[&dyn Constraint<N>],
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
    Obs: Observer<Event<N>>,
{
    config.validate()?;
    search::search(objective, constraints, x0, config, observer)
}

/// Minimizes `objective` subject to `constraints` without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    constraints: &[&dyn Constraint<N>],
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
{
    minimize(objective, constraints, x0, config, ())
}
