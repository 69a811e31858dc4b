/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The termination criterion was satisfied.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a conjugate-gradient minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: [f64; N],

    /// Objective value at `x` as reported by the line search.
    pub value: f64,

    /// Gradient estimate at `x`.
    pub gradient: [f64; N],

    /// Number of iterations performed.
    pub iters: usize,

    /// Number of iterations that restarted.
    pub restarts: usize,
}
