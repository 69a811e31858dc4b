use super::{Bracket, Error, Phase, Point};

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// Fraction of the interval between an end and its nearer interior point.
///
/// Equals `2 / (3 + √5) = 2 − φ ≈ 0.382`.
const TAU: f64 = 2.0 - PHI;

/// Refines a bracket using golden section search.
///
/// Only the bracket's ends are used. Two interior points are placed at `TAU`
/// from each end; each step discards the side beyond the worse interior point
/// and evaluates one new point, reusing the other. When the interval is no
/// wider than `accuracy`, returns its midpoint paired with the mean of the end
/// values.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the interval is still wider than
/// `accuracy` after `max_iters` shrink steps.
pub fn golden_section<G>(
    g: &G,
    bracket: &Bracket,
    accuracy: f64,
    max_iters: usize,
) -> Result<Point, Error>
where
    G: Fn(f64) -> f64 + ?Sized,
{
    let mut a = bracket.left();
    let mut b = bracket.right();

    let width = b.x - a.x;
    let mut p = Point::at(g, a.x + TAU * width);
    let mut q = Point::at(g, a.x + (1.0 - TAU) * width);

    let mut iters = 0;
    loop {
        if b.x - a.x <= accuracy {
            return Ok(Point::new(0.5 * (a.x + b.x), 0.5 * (a.value + b.value)));
        }
        if iters == max_iters {
            return Err(Error::NoConvergence {
                phase: Phase::GoldenSection,
                iters,
            });
        }
        iters += 1;

        if p.value < q.value {
            // Minimum lies in [a, q]: old p becomes the new right interior point.
            b = q;
            q = p;
            p = Point::at(g, a.x + TAU * (b.x - a.x));
        } else {
            // Minimum lies in [p, b]: old q becomes the new left interior point.
            a = p;
            p = q;
            q = Point::at(g, a.x + (1.0 - TAU) * (b.x - a.x));
        }
        log::trace!("golden section: [{}, {}]", a.x, b.x);
    }
}
