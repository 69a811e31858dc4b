use contour_core::{Objective, vector};

use crate::{gradient, line};

/// Current iterate of the conjugate-gradient loop.
#[derive(Debug, Clone, Copy)]
pub(super) struct State<const N: usize> {
    pub(super) x: [f64; N],
    pub(super) value: f64,
    pub(super) gradient: [f64; N],
    pub(super) direction: [f64; N],
}

impl<const N: usize> State<N> {
    /// Evaluates the start point and points downhill.
    pub(super) fn start<O>(objective: &O, x0: [f64; N], config: &gradient::Config) -> Self
    where
        O: Objective<N> + ?Sized,
    {
        let value = objective.value(&x0);
        let gradient = config.estimate(objective, &x0, Some(value));
        Self {
            x: x0,
            value,
            gradient,
            direction: vector::neg(&gradient),
        }
    }

    /// Returns the steepest-descent direction at the current point.
    pub(super) fn steepest_descent(&self) -> [f64; N] {
        vector::neg(&self.gradient)
    }

    /// Minimizes the objective along `direction` from the current point.
    pub(super) fn line_search<O>(
        &self,
        objective: &O,
        direction: &[f64; N],
        config: &line::Config,
    ) -> Result<line::Outcome, line::Error>
    where
        O: Objective<N> + ?Sized,
    {
        let g = |lambda: f64| objective.value(&self.point_along(direction, lambda));
        line::run(&g, 0.0, config)
    }

    /// Returns `x + lambda·direction`.
    pub(super) fn point_along(&self, direction: &[f64; N], lambda: f64) -> [f64; N] {
        vector::add_scaled(&self.x, lambda, direction)
    }
}
