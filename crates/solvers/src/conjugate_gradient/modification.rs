use std::{fmt, str::FromStr};

use contour_core::vector;

use crate::ParseOptionError;

/// Rule for the weight `w` in `s₁ = −∇₁ + w·s₀`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Modification {
    /// `w = ⟨∇₁, ∇₁⟩ / ⟨∇₀, ∇₀⟩`
    #[default]
    FletcherReeves,

    /// `w = ⟨∇₁, ∇₁ − ∇₀⟩ / ⟨∇₀, ∇₀⟩`
    PolakRibiere,
}

impl Modification {
    /// Returns the unclamped blend weight for gradients `g0` then `g1`.
    ///
    /// A zero previous gradient gives a weight of zero.
    #[must_use]
    pub fn weight<const N: usize>(self, g0: &[f64; N], g1: &[f64; N]) -> f64 {
        let denominator = vector::dot(g0, g0);
        if denominator == 0.0 {
            return 0.0;
        }

        let numerator = match self {
            Self::FletcherReeves => vector::dot(g1, g1),
            Self::PolakRibiere => vector::dot(g1, &vector::sub(g1, g0)),
        };
        numerator / denominator
    }
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FletcherReeves => "fletcher_reeves",
            Self::PolakRibiere => "polak_ribiere",
        })
    }
}

impl FromStr for Modification {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fletcher_reeves" => Ok(Self::FletcherReeves),
            "polak_ribiere" => Ok(Self::PolakRibiere),
            _ => Err(ParseOptionError::new(
                "modification",
                s,
                "fletcher_reeves, polak_ribiere",
            )),
        }
    }
}
