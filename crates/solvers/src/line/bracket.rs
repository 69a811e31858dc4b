use thiserror::Error;

use super::Point;

/// Three points `(left, center, right)` enclosing a local minimum.
///
/// Abscissas are ordered `left ≤ center ≤ right` and the center value is no
/// greater than either end value, so a unimodal function has its minimum
/// inside `[left, right]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Point,
    center: Point,
    right: Point,
}

/// Errors that can occur when constructing a [`Bracket`] by hand.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket contains non-finite x: {x}")]
    NonFinite { x: f64 },

    #[error("center x = {center} lies outside [{left}, {right}]")]
    Unordered { left: f64, center: f64, right: f64 },

    #[error("center value {center} exceeds an end value ({left}, {right})")]
    NotUnimodal { left: f64, center: f64, right: f64 },
}

impl Bracket {
    /// Creates a validated bracket.
    ///
    /// If the ends are reversed (`left.x > right.x`), they are swapped.
    ///
    /// # Errors
    ///
    /// Returns an error if any abscissa is non-finite, if the center does not
    /// lie between the ends, or if the center value exceeds an end value.
    pub fn new(left: Point, center: Point, right: Point) -> Result<Self, BracketError> {
        for p in [left, center, right] {
            if !p.x.is_finite() {
                return Err(BracketError::NonFinite { x: p.x });
            }
        }

        let (left, right) = if left.x <= right.x {
            (left, right)
        } else {
            (right, left)
        };

        if center.x < left.x || center.x > right.x {
            return Err(BracketError::Unordered {
                left: left.x,
                center: center.x,
                right: right.x,
            });
        }

        let bracket = Self {
            left,
            center,
            right,
        };
        if !bracket.is_unimodal() {
            return Err(BracketError::NotUnimodal {
                left: left.value,
                center: center.value,
                right: right.value,
            });
        }

        Ok(bracket)
    }

    /// Evaluates `g` at three abscissas and validates the resulting bracket.
    ///
    /// # Errors
    ///
    /// See [`Bracket::new`].
    pub fn evaluate<G>(g: &G, xs: [f64; 3]) -> Result<Self, BracketError>
    where
        G: Fn(f64) -> f64 + ?Sized,
    {
        let [a, m, b] = xs.map(|x| Point::at(g, x));
        Self::new(a, m, b)
    }

    /// Builds a bracket from points the caller has already ordered.
    pub(super) fn from_ordered(left: Point, center: Point, right: Point) -> Self {
        debug_assert!(left.x <= center.x && center.x <= right.x);
        Self {
            left,
            center,
            right,
        }
    }

    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Returns the points in ascending order of x.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.left, self.center, self.right]
    }

    /// Returns `right.x − left.x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.x - self.left.x
    }

    /// Returns `true` if `x` lies within `[left.x, right.x]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left.x <= x && x <= self.right.x
    }

    /// Returns `true` if the center value is no greater than both end values.
    #[must_use]
    pub fn is_unimodal(&self) -> bool {
        self.center.value <= self.left.value && self.center.value <= self.right.value
    }
}
