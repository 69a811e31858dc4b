use std::{fmt, str::FromStr};

use crate::ParseOptionError;

use super::{Bracket, Error, Point, golden_section, quadratic_interpolation};

/// Strategy used to shrink a bracket to the target accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Refiner {
    /// Golden section search; stops when the interval is no wider than the accuracy.
    GoldenSection,

    /// Successive quadratic interpolation (DSK-Powell); stops when successive
    /// estimates agree in both x and value.
    #[default]
    QuadraticInterpolation,
}

impl Refiner {
    /// Shrinks `bracket` and returns the approximate minimizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConvergence`] if the strategy exceeds `max_iters`.
    pub fn refine<G>(
        self,
        g: &G,
        bracket: &Bracket,
        accuracy: f64,
        max_iters: usize,
    ) -> Result<Point, Error>
    where
        G: Fn(f64) -> f64 + ?Sized,
    {
        match self {
            Self::GoldenSection => golden_section(g, bracket, accuracy, max_iters),
            Self::QuadraticInterpolation => {
                quadratic_interpolation(g, bracket, accuracy, max_iters)
            }
        }
    }
}

impl fmt::Display for Refiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GoldenSection => "golden_section",
            Self::QuadraticInterpolation => "quadratic_interpolation",
        })
    }
}

impl FromStr for Refiner {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golden_section" => Ok(Self::GoldenSection),
            "quadratic_interpolation" => Ok(Self::QuadraticInterpolation),
            _ => Err(ParseOptionError::new(
                "line refiner",
                s,
                "golden_section, quadratic_interpolation",
            )),
        }
    }
}
