/// `f(x) = 2x₁² + x₁x₂ + 2x₂² + 8x₁`
pub fn quadratic(x: &[f64; 2]) -> f64 {
    2.0 * x[0] * x[0] + x[0] * x[1] + 2.0 * x[1] * x[1] + 8.0 * x[0]
}

/// Minimizer of [`quadratic`].
pub const QUADRATIC_MIN: [f64; 2] = [-32.0 / 15.0, 8.0 / 15.0];

/// Rosenbrock's banana function, minimized at `(1, 1)`.
pub fn rosenbrock(x: &[f64; 2]) -> f64 {
    100.0 * (x[1] - x[0] * x[0]) * (x[1] - x[0] * x[0]) + (1.0 - x[0]) * (1.0 - x[0])
}
