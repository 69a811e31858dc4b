use std::{fmt, str::FromStr};

use contour_core::vector;

use crate::ParseOptionError;

/// Stopping rule checked after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// `‖x₁ − x₀‖ / ‖x₀‖ ≤ accuracy` and `|f₁ − f₀| ≤ accuracy`.
    ///
    /// Never satisfied when `‖x₀‖ = 0`.
    #[default]
    XAndFChange,

    /// `‖s‖ ≤ accuracy` for the direction just searched.
    DirectionNorm,

    /// `‖∇₁‖ ≤ accuracy` at the new point.
    GradientNorm,
}

/// Quantities from one step that the stopping rules inspect.
pub(super) struct Step<'a, const N: usize> {
    pub(super) x0: &'a [f64; N],
    pub(super) x1: &'a [f64; N],
    pub(super) f0: f64,
    pub(super) f1: f64,
    pub(super) direction: &'a [f64; N],
    pub(super) gradient: &'a [f64; N],
}

impl Termination {
    pub(super) fn is_met<const N: usize>(self, step: &Step<'_, N>, accuracy: f64) -> bool {
        match self {
            Self::XAndFChange => {
                let scale = vector::norm(step.x0);
                if scale == 0.0 {
                    return false;
                }
                let dx = vector::norm(&vector::sub(step.x1, step.x0)) / scale;
                dx <= accuracy && (step.f1 - step.f0).abs() <= accuracy
            }
            Self::DirectionNorm => vector::norm(step.direction) <= accuracy,
            Self::GradientNorm => vector::norm(step.gradient) <= accuracy,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::XAndFChange => "x_and_f_change",
            Self::DirectionNorm => "direction_norm",
            Self::GradientNorm => "gradient_norm",
        })
    }
}

impl FromStr for Termination {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x_and_f_change" => Ok(Self::XAndFChange),
            "direction_norm" => Ok(Self::DirectionNorm),
            "gradient_norm" => Ok(Self::GradientNorm),
            _ => Err(ParseOptionError::new(
                "termination criterion",
                s,
                "x_and_f_change, direction_norm, gradient_norm",
            )),
        }
    }
}
