use thiserror::Error;

use crate::conjugate_gradient;

use super::ConfigError;

/// Errors that can occur during a penalty-method solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The inner minimization failed.
    #[error("inner solve failed at outer iteration {outer_iter}")]
    Inner {
        outer_iter: usize,
        #[source]
        source: conjugate_gradient::Error,
    },
}
