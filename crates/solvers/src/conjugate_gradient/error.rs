use thiserror::Error;

use crate::line;

use super::ConfigError;

/// Errors that can occur during conjugate-gradient minimization.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("cannot minimize over a zero-dimensional space")]
    ZeroDimension,

    /// The line search along the current direction failed.
    #[error("line search failed at iteration {iter}")]
    LineSearch {
        iter: usize,
        #[source]
        source: line::Error,
    },
}
