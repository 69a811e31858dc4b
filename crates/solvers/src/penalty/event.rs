use crate::conjugate_gradient::IterationRecord;

/// Events emitted by the penalty method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<const N: usize> {
    /// An inner conjugate-gradient iteration.
    Inner {
        /// Outer iteration the record belongs to, starting at 1.
        outer_iter: usize,

        /// Penalty coefficient used by the inner solve.
        coefficient: f64,

        record: IterationRecord<N>,
    },

    /// A completed outer iteration.
    Outer(OuterRecord<N>),
}

/// Summary of one outer iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterRecord<const N: usize> {
    /// Outer iteration number, starting at 1.
    pub iter: usize,

    pub coefficient: f64,

    /// Result of the inner solve.
    pub x: [f64; N],

    /// Penalized objective at `x`.
    pub value: f64,

    /// Unpenalized objective at `x`.
    pub objective: f64,

    /// Largest constraint violation at `x`.
    pub max_violation: f64,

    /// Iterations used by the inner solve.
    pub inner_iters: usize,
}

impl<const N: usize> Event<N> {
    /// Returns the penalty coefficient in force when the event was emitted.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Inner { coefficient, .. } => *coefficient,
            Self::Outer(record) => record.coefficient,
        }
    }

    /// Returns the outer iteration the event belongs to.
    #[must_use]
    pub fn outer_iter(&self) -> usize {
        match self {
            Self::Inner { outer_iter, .. } => *outer_iter,
            Self::Outer(record) => record.iter,
        }
    }
}
