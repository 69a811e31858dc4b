use super::{Bracket, Error, Phase, Point};

/// Refines a bracket by successive quadratic interpolation (DSK-Powell).
///
/// Each step fits a parabola through the current three points and evaluates
/// its vertex. The search stops when both the abscissa and the value of the
/// vertex are within `accuracy` of the current center. Otherwise the vertex
/// joins the three points, and the lowest of the four (kept away from the
/// ends so it has a neighbor on each side) becomes the next center.
///
/// A degenerate fit, where the vertex is non-finite or falls outside the
/// current points, falls back to the lowest sampled point without a new
/// evaluation. This keeps every estimate inside the original bracket.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the estimates have not settled after
/// `max_iters` fits.
pub fn quadratic_interpolation<G>(
    g: &G,
    bracket: &Bracket,
    accuracy: f64,
    max_iters: usize,
) -> Result<Point, Error>
where
    G: Fn(f64) -> f64 + ?Sized,
{
    let mut triple = bracket.points();

    for _ in 0..max_iters {
        let estimate = match vertex(&triple) {
            Some(x) => Point::at(g, x),
            None => {
                log::debug!(
                    "quadratic interpolation: degenerate fit on [{}, {}], using best sample",
                    triple[0].x,
                    triple[2].x
                );
                best_sample(&triple)
            }
        };

        let center = triple[1];
        if (center.x - estimate.x).abs() <= accuracy
            && (center.value - estimate.value).abs() <= accuracy
        {
            return Ok(estimate);
        }

        triple = narrow(&triple, estimate);
    }

    Err(Error::NoConvergence {
        phase: Phase::QuadraticInterpolation,
        iters: max_iters,
    })
}

/// Returns the abscissa of the parabola's stationary point, if usable.
///
/// Uses first and second divided differences of the samples. Returns `None`
/// when the result is non-finite or lies outside `[p0.x, p2.x]`.
fn vertex(triple: &[Point; 3]) -> Option<f64> {
    let [p0, p1, p2] = triple;

    let a1 = (p1.value - p0.value) / (p1.x - p0.x);
    let a2 = ((p2.value - p0.value) / (p2.x - p0.x) - a1) / (p2.x - p1.x);
    let x = 0.5 * (p0.x + p1.x) - a1 / (2.0 * a2);

    (p0.x..=p2.x).contains(&x).then_some(x)
}

/// Returns the lowest sampled point, preferring the center on ties.
fn best_sample(triple: &[Point; 3]) -> Point {
    let [left, center, right] = *triple;
    let mut best = center;
    for candidate in [left, right] {
        if candidate.value < best.value {
            best = candidate;
        }
    }
    best
}

/// Merges `estimate` into the points and picks the next three.
fn narrow(triple: &[Point; 3], estimate: Point) -> [Point; 3] {
    let mut points = [triple[0], triple[1], triple[2], estimate];
    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut lowest = 0;
    for (i, point) in points.iter().enumerate() {
        if point.value < points[lowest].value {
            lowest = i;
        }
    }

    let mid = lowest.clamp(1, 2);
    [points[mid - 1], points[mid], points[mid + 1]]
}
