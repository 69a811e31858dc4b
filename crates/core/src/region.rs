//! Two-dimensional constraint regions.
//!
//! Each region implements [`Constraint<2>`] and is feasible on its inside.
//! Wrap a region in [`Complement`] to make its outside the feasible side.

use crate::Constraint;

/// A disc: `(x₁ − cx)² + (x₂ − cy)² − r² ≤ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: [f64; 2], radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Constraint<2> for Circle {
    fn evaluate(&self, x: &[f64; 2]) -> f64 {
        let dx = x[0] - self.center[0];
        let dy = x[1] - self.center[1];
        dx * dx + dy * dy - self.radius * self.radius
    }
}

/// A rotated ellipse with semi-axes `a` (along the heading) and `b`.
///
/// In local coordinates `(u, v)` rotated by `angle_deg`, the constraint is
/// `b²u² + a²v² − a²b² ≤ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: [f64; 2],
    pub semi_axes: [f64; 2],
    pub angle_deg: f64,
}

impl Ellipse {
    #[must_use]
    pub fn new(center: [f64; 2], semi_axes: [f64; 2], angle_deg: f64) -> Self {
        Self {
            center,
            semi_axes,
            angle_deg,
        }
    }
}

impl Constraint<2> for Ellipse {
    fn evaluate(&self, x: &[f64; 2]) -> f64 {
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        let dx = x[0] - self.center[0];
        let dy = x[1] - self.center[1];
        let u = dx * cos + dy * sin;
        let v = -dx * sin + dy * cos;
        let [a, b] = self.semi_axes;
        b * b * u * u + a * a * v * v - a * a * b * b
    }
}

/// The half-plane on the left of a directed line.
///
/// The line passes through `point` with heading `angle_deg` measured
/// counter-clockwise from the positive x₁ axis. The constraint value is the
/// signed distance to the line, positive on the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub point: [f64; 2],
    pub angle_deg: f64,
}

impl HalfPlane {
    #[must_use]
    pub fn new(point: [f64; 2], angle_deg: f64) -> Self {
        Self { point, angle_deg }
    }
}

impl Constraint<2> for HalfPlane {
    fn evaluate(&self, x: &[f64; 2]) -> f64 {
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        sin * (x[0] - self.point[0]) - cos * (x[1] - self.point[1])
    }
}

/// Adapter that negates a constraint, swapping its feasible and infeasible sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complement<C>(pub C);

impl<const N: usize, C> Constraint<N> for Complement<C>
where
    C: Constraint<N>,
{
    fn evaluate(&self, x: &[f64; N]) -> f64 {
        -self.0.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn circle_is_feasible_inside() {
        let circle = Circle::new([0.5, 0.75], 0.7);

        assert!(circle.is_satisfied(&[0.5, 0.75]));
        assert!(circle.is_satisfied(&[1.0, 1.0]));
        assert!(!circle.is_satisfied(&[1.5, 0.75]));
        assert_relative_eq!(circle.evaluate(&[1.2, 0.75]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ellipse_axes_follow_the_rotation() {
        let ellipse = Ellipse::new([0.0, 0.0], [2.0, 1.0], 90.0);

        // Rotated by 90°, the long axis lies along x₂.
        assert_relative_eq!(ellipse.evaluate(&[0.0, 2.0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ellipse.evaluate(&[1.0, 0.0]), 0.0, epsilon = 1e-12);
        assert!(ellipse.is_satisfied(&[0.0, 1.5]));
        assert!(!ellipse.is_satisfied(&[1.5, 0.0]));
    }

    #[test]
    fn unrotated_ellipse_matches_expanded_polynomial() {
        let ellipse = Ellipse::new([1.0, -1.0], [3.0, 2.0], 0.0);
        let x = [2.0, 0.5];

        // b²(x₁ − 1)² + a²(x₂ + 1)² − a²b²
        let expected = 4.0 * 1.0 + 9.0 * 2.25 - 36.0;
        assert_relative_eq!(ellipse.evaluate(&x), expected, epsilon = 1e-12);
    }

    #[test]
    fn half_plane_keeps_the_left_side() {
        // Heading along +x₁ through the origin: feasible above the axis.
        let upper = HalfPlane::new([0.0, 0.0], 0.0);
        assert!(upper.is_satisfied(&[5.0, 1.0]));
        assert!(!upper.is_satisfied(&[5.0, -1.0]));

        // Heading along +x₂ through x₁ = 2: feasible for x₁ ≤ 2.
        let left = HalfPlane::new([2.0, 0.0], 90.0);
        assert!(left.is_satisfied(&[1.0, 10.0]));
        assert_relative_eq!(left.evaluate(&[3.0, -4.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn complement_swaps_sides() {
        let outside = Complement(Circle::new([0.0, 0.0], 1.0));

        assert!(outside.is_satisfied(&[2.0, 0.0]));
        assert!(!outside.is_satisfied(&[0.0, 0.0]));
        assert_relative_eq!(outside.violation(&[0.0, 0.0]), 1.0);
    }
}
