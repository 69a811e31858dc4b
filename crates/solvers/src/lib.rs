//! Numerical solvers for Contour.
//!
//! The modules build on each other, leaves first:
//!
//! - [`gradient`] — finite-difference gradient estimates
//! - [`line`] — one-dimensional search: Sven bracketing followed by golden
//!   section or quadratic-interpolation refinement
//! - [`conjugate_gradient`] — nonlinear conjugate-gradient descent
//!   (Fletcher-Reeves / Polak-Ribiere) driven by the line search
//! - [`penalty`] — exterior quadratic penalty for inequality constraints,
//!   repeatedly solving the penalized problem with a growing coefficient
//!
//! Every solver is synchronous and deterministic. Diagnostics flow out through
//! an [`Observer`](contour_core::Observer); observers never steer the search.

mod parse;

pub mod conjugate_gradient;
pub mod gradient;
pub mod line;
pub mod penalty;

pub use parse::ParseOptionError;
