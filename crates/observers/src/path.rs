use contour_core::Observer;

use crate::traits::HasPoint;

/// Collects the points a solver visits, in order.
///
/// Works with any event implementing [`HasPoint`]. Solver records describe
/// the point an iteration started from, so call [`SearchPath::push`] with the
/// solution to close the path.
#[derive(Debug, Clone, Default)]
pub struct SearchPath<const N: usize> {
    points: Vec<[f64; N]>,
}

impl<const N: usize> SearchPath<N> {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends a point unless it repeats the last one.
    pub fn push(&mut self, point: [f64; N]) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; N]] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<[f64; N]> {
        self.points
    }
}

impl<const N: usize, E> Observer<E> for SearchPath<N>
where
    E: HasPoint<N>,
{
    fn observe(&mut self, event: &E) {
        self.push(event.point());
    }
}

/// Allows `&mut SearchPath<N>` to be passed to solvers that take an observer
/// by value.
impl<const N: usize, E> Observer<E> for &mut SearchPath<N>
where
    E: HasPoint<N>,
{
    fn observe(&mut self, event: &E) {
        (*self).observe(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use contour_solvers::{conjugate_gradient, gradient, line, penalty};

    fn quadratic(x: &[f64; 2]) -> f64 {
        2.0 * x[0] * x[0] + x[0] * x[1] + 2.0 * x[1] * x[1] + 8.0 * x[0]
    }

    fn coarse_config() -> conjugate_gradient::Config {
        conjugate_gradient::Config {
            gradient: gradient::Config {
                method: gradient::Method::Symmetric,
                step: 0.01,
            },
            line: line::Config {
                initial_step: 0.1,
                accuracy: 0.01,
                ..line::Config::default()
            },
            accuracy: 0.01,
            ..conjugate_gradient::Config::default()
        }
    }

    #[test]
    fn follows_conjugate_gradient_iterates() {
        let mut path = SearchPath::new();

        let solution =
            conjugate_gradient::minimize(&quadratic, [0.0, 0.0], &coarse_config(), &mut path)
                .expect("should converge");
        path.push(solution.x);

        let points = path.points();
        assert_eq!(points[0], [0.0, 0.0]);
        assert_relative_eq!(points[1][0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(points[1][1], 0.0, epsilon = 1e-9);

        // The last iteration does not move, so the closing point is merged.
        assert_eq!(points.len(), 3);
        assert_eq!(points.last(), Some(&solution.x));
    }

    #[test]
    fn follows_penalty_events() {
        let nonnegative = |x: &[f64; 2]| -x[0];
        let constraints: [&dyn contour_core::Constraint<2>; 1] = [&nonnegative];
        let config = penalty::Config {
            violation_tol: 1e-2,
            inner: coarse_config(),
            ..penalty::Config::default()
        };
        let mut path = SearchPath::new();

        let solution =
            penalty::minimize(&quadratic, &constraints, [0.0, 0.0], &config, &mut path)
                .expect("should converge");

        assert_eq!(path.points().first(), Some(&[0.0, 0.0]));
        assert_eq!(path.points().last(), Some(&solution.x));
    }
}
