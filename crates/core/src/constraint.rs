/// An inequality constraint over points in `N` dimensions.
///
/// A point is feasible when [`Constraint::evaluate`] returns a value `≤ 0`.
/// Positive values measure how far the point lies outside the feasible region.
///
/// Closures of the form `Fn(&[f64; N]) -> f64` implement this trait.
pub trait Constraint<const N: usize> {
    /// Evaluates the constraint function at `x`.
    fn evaluate(&self, x: &[f64; N]) -> f64;

    /// Returns the violation `max(0, c(x))`.
    ///
    /// Feasible points have zero violation.
    /// A `NaN` constraint value yields `NaN` so the problem stays visible.
    fn violation(&self, x: &[f64; N]) -> f64 {
        let c = self.evaluate(x);
        if c.is_nan() { c } else { c.max(0.0) }
    }

    /// Returns `true` if `x` satisfies the constraint.
    fn is_satisfied(&self, x: &[f64; N]) -> bool {
        self.evaluate(x) <= 0.0
    }
}

impl<const N: usize, F> Constraint<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn evaluate(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn violation_is_zero_inside_the_region() {
        let below_one = |x: &[f64; 1]| x[0] - 1.0;

        assert_relative_eq!(below_one.violation(&[0.5]), 0.0);
        assert!(below_one.is_satisfied(&[0.5]));
        assert!(below_one.is_satisfied(&[1.0]));
    }

    #[test]
    fn violation_measures_distance_outside_the_region() {
        let below_one = |x: &[f64; 1]| x[0] - 1.0;

        assert_relative_eq!(below_one.violation(&[3.0]), 2.0);
        assert!(!below_one.is_satisfied(&[3.0]));
    }

    #[test]
    fn nan_values_are_reported_as_nan_violation() {
        let broken = |_: &[f64; 1]| f64::NAN;

        assert!(broken.violation(&[0.0]).is_nan());
        assert!(!broken.is_satisfied(&[0.0]));
    }
}
