use contour_core::{Constraint, Objective};

/// An objective with a quadratic penalty on constraint violations.
///
/// Evaluates `f(x) + r · Σ max(0, c(x))²`.
pub struct Penalized<'a, O: ?Sized, const N: usize> {
    objective: &'a O,
    constraints: &'a [&'a dyn Constraint<N>],
    coefficient: f64,
}

impl<'a, O, const N: usize> Penalized<'a, O, N>
where
    O: Objective<N> + ?Sized,
{
    pub fn new(objective: &'a O, constraints: &'a [&'a dyn Constraint<N>], coefficient: f64) -> Self {
        Self {
            objective,
            constraints,
            coefficient,
        }
    }

    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the penalty term `r · Σ max(0, c(x))²` alone.
    #[must_use]
    pub fn penalty(&self, x: &[f64; N]) -> f64 {
        let squared: f64 = self
            .constraints
            .iter()
            .map(|c| {
                let v = c.violation(x);
                v * v
            })
            .sum();
        self.coefficient * squared
    }
}

impl<O, const N: usize> Objective<N> for Penalized<'_, O, N>
where
    O: Objective<N> + ?Sized,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self.objective.value(x) + self.penalty(x)
    }
}

/// Returns the largest violation `max(0, c(x))` over `constraints`.
///
/// Returns zero when there are no constraints, and `NaN` if any constraint
/// evaluates to `NaN`.
#[must_use]
pub fn max_violation<const N: usize>(constraints: &[&dyn Constraint<N>], x: &[f64; N]) -> f64 {
    constraints
        .iter()
        .map(|c| c.violation(x))
        .fold(0.0, |worst, v| if v > worst || v.is_nan() { v } else { worst })
}
