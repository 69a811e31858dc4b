/// An abscissa with its function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The function value at x.
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }

    /// Evaluates `g` at `x`.
    pub(crate) fn at<G>(g: &G, x: f64) -> Self
    where
        G: Fn(f64) -> f64 + ?Sized,
    {
        Self::new(x, g(x))
    }
}
