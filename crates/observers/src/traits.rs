//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, so an observer can
//! be written once and used with both the conjugate-gradient solver and the
//! penalty method.
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasPoint`] — events that carry a point in the search space
//!
//! # Example
//!
//! ```rust
//! use contour_core::Observer;
//! use contour_observers::traits::HasObjective;
//!
//! struct Best(f64);
//!
//! impl<E: HasObjective> Observer<E> for Best {
//!     fn observe(&mut self, event: &E) {
//!         self.0 = self.0.min(event.objective());
//!     }
//! }
//! ```

use contour_solvers::{conjugate_gradient::IterationRecord, penalty};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective value the solver is minimizing at this event.
    fn objective(&self) -> f64;
}

/// An event that carries a point in `N` dimensions.
pub trait HasPoint<const N: usize> {
    /// Returns the point this event describes.
    fn point(&self) -> [f64; N];
}

// --- IterationRecord ---

impl<const N: usize> HasObjective for IterationRecord<N> {
    fn objective(&self) -> f64 {
        self.value
    }
}

impl<const N: usize> HasPoint<N> for IterationRecord<N> {
    fn point(&self) -> [f64; N] {
        self.x
    }
}

// --- penalty::Event ---

/// Reports the penalized value, which is what the inner solver minimizes.
impl<const N: usize> HasObjective for penalty::Event<N> {
    fn objective(&self) -> f64 {
        match self {
            penalty::Event::Inner { record, .. } => record.value,
            penalty::Event::Outer(record) => record.value,
        }
    }
}

impl<const N: usize> HasPoint<N> for penalty::Event<N> {
    fn point(&self) -> [f64; N] {
        match self {
            penalty::Event::Inner { record, .. } => record.x,
            penalty::Event::Outer(record) => record.x,
        }
    }
}
