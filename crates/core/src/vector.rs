//! Arithmetic helpers for fixed-size points.
//!
//! Every helper returns a new array; inputs are never modified.

use std::array;

/// Returns the inner product `⟨a, b⟩`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns the Euclidean norm `‖a‖`.
#[must_use]
pub fn norm<const N: usize>(a: &[f64; N]) -> f64 {
    dot(a, a).sqrt()
}

/// Returns `a − b`.
#[must_use]
pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    array::from_fn(|i| a[i] - b[i])
}

/// Returns `−a`.
#[must_use]
pub fn neg<const N: usize>(a: &[f64; N]) -> [f64; N] {
    a.map(|v| -v)
}

/// Returns `a + scale · b`.
#[must_use]
pub fn add_scaled<const N: usize>(a: &[f64; N], scale: f64, b: &[f64; N]) -> [f64; N] {
    array::from_fn(|i| a[i] + scale * b[i])
}

/// Returns a copy of `a` with coordinate `i` shifted by `delta`.
///
/// # Panics
///
/// Panics if `i >= N`.
#[must_use]
pub fn shifted<const N: usize>(a: &[f64; N], i: usize, delta: f64) -> [f64; N] {
    let mut out = *a;
    out[i] += delta;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dot_and_norm() {
        assert_relative_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_relative_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_relative_eq!(norm::<0>(&[]), 0.0);
    }

    #[test]
    fn add_scaled_moves_along_direction() {
        let x = [1.0, 1.0];
        let s = [2.0, -1.0];

        assert_eq!(add_scaled(&x, 0.5, &s), [2.0, 0.5]);
        assert_eq!(x, [1.0, 1.0]);
    }

    #[test]
    fn sub_neg_and_shift() {
        assert_eq!(sub(&[3.0, 1.0], &[1.0, 2.0]), [2.0, -1.0]);
        assert_eq!(neg(&[3.0, -1.0]), [-3.0, 1.0]);
        assert_eq!(shifted(&[3.0, 1.0], 1, 0.5), [3.0, 1.5]);
    }
}
