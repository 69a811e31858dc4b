//! Core traits and types for Contour.
//!
//! This crate defines the shared abstractions the solvers and observers build
//! on:
//!
//! - [`Objective`] — a scalar function of a fixed-size point `[f64; N]`
//! - [`Constraint`] — an inequality constraint, feasible where its value is `≤ 0`
//! - [`Observer`] — receives solver records without influencing control flow
//! - [`vector`] — small helpers for arithmetic on `[f64; N]` points
//! - [`region`] — ready-made two-dimensional constraint regions

mod constraint;
mod objective;
mod observer;

pub mod region;
pub mod vector;

pub use constraint::Constraint;
pub use objective::Objective;
pub use observer::Observer;
