use std::fmt;

use thiserror::Error;

use super::{ConfigError, Point};

/// Stage of a line search that hit its iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Bracketing,
    GoldenSection,
    QuadraticInterpolation,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bracketing => "bracket expansion",
            Self::GoldenSection => "golden section refinement",
            Self::QuadraticInterpolation => "quadratic interpolation",
        })
    }
}

/// Errors that can occur during a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The start point is a local maximum: both neighbors are lower.
    #[error(
        "function is not unimodal at x = {}: f = {} exceeds f({}) = {} and f({}) = {}",
        .center.x, .center.value, .left.x, .left.value, .right.x, .right.value
    )]
    NotUnimodal {
        left: Point,
        center: Point,
        right: Point,
    },

    #[error("{phase} did not converge within {iters} iterations")]
    NoConvergence { phase: Phase, iters: usize },
}
