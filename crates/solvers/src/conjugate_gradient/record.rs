use crate::line::Bracket;

/// Snapshot of one conjugate-gradient iteration.
///
/// `x`, `value` and `gradient` describe the point the iteration started from.
/// `direction` is the direction the step was applied along, after any restart.
///
/// Under [`RestartPolicy::KeepStep`] the step was found along the discarded
/// conjugate direction and then applied along steepest descent, so `bracket`
/// and `step_length` belong to that earlier search. Under
/// [`RestartPolicy::SearchAgain`] they come from the repeated search along
/// `direction`.
///
/// [`RestartPolicy::KeepStep`]: super::RestartPolicy::KeepStep
/// [`RestartPolicy::SearchAgain`]: super::RestartPolicy::SearchAgain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord<const N: usize> {
    /// Iteration number, starting at 1.
    pub iter: usize,

    pub x: [f64; N],
    pub value: f64,
    pub gradient: [f64; N],
    pub direction: [f64; N],

    /// Bracket on the step length from the line search that chose `step_length`.
    pub bracket: Bracket,

    /// Step length `λ*` taken along `direction`.
    pub step_length: f64,

    /// Whether this iteration restarted from steepest descent.
    pub restarted: bool,
}
