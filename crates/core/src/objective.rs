/// A scalar objective function over points in `N` dimensions.
///
/// Objectives are expected to be pure: solvers call them repeatedly, in any
/// order, and never memoize results. Non-finite values are not treated as
/// errors; they propagate through whatever arithmetic consumes them.
///
/// Closures of the form `Fn(&[f64; N]) -> f64` implement this trait.
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;
}

impl<const N: usize, F> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}
