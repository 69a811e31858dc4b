/// Indicates whether the penalty method reached the violation tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The largest violation is within tolerance.
    Feasible,

    /// Reached the outer iteration limit with violations above tolerance.
    MaxOuterIters,
}

/// The result of a penalty-method solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the constrained minimizer.
    pub x: [f64; N],

    /// Penalized objective at `x`.
    pub value: f64,

    /// Unpenalized objective at `x`.
    pub objective: f64,

    /// Penalty coefficient used by the final inner solve.
    pub coefficient: f64,

    /// Largest constraint violation at `x`.
    pub max_violation: f64,

    /// Number of outer iterations performed.
    pub outer_iters: usize,

    /// Total inner iterations across all outer iterations.
    pub inner_iters: usize,
}
