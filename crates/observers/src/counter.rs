use std::cell::Cell;

use contour_core::Objective;

/// Wraps an objective and counts how many times it is evaluated.
///
/// # Example
///
/// ```rust
/// use contour_core::Objective;
/// use contour_observers::Counted;
///
/// let square = Counted::new(|x: &[f64; 1]| x[0] * x[0]);
/// square.value(&[2.0]);
/// square.value(&[3.0]);
/// assert_eq!(square.calls(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Counted<O> {
    inner: O,
    calls: Cell<usize>,
}

impl<O> Counted<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Returns the number of evaluations since creation or the last reset.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Resets the evaluation count to zero.
    pub fn reset(&self) {
        self.calls.set(0);
    }

    /// Returns the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O, const N: usize> Objective<N> for Counted<O>
where
    O: Objective<N>,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.value(x)
    }
}
