use super::{Bracket, Error, Phase, Point};

/// Brackets a local minimum of `g` using Sven's method.
///
/// Probes `x0 − step`, `x0`, and `x0 + step`. If the center is already no
/// higher than both neighbors, that triple is returned. Otherwise the search
/// moves toward the lower neighbor, doubling the step each time, until the
/// function rises. A final probe half a step back from the last point picks
/// the three points that enclose the minimum.
///
/// The sign of `step` is ignored; the descent direction is chosen from the
/// probes. The returned bracket is always ordered left to right.
///
/// # Errors
///
/// - [`Error::NotUnimodal`] if both neighbors are lower than the center,
///   or if any comparison involves `NaN`.
/// - [`Error::NoConvergence`] if no rise is found within `max_expansions`
///   doublings or the step overflows.
pub fn sven<G>(g: &G, x0: f64, step: f64, max_expansions: usize) -> Result<Bracket, Error>
where
    G: Fn(f64) -> f64 + ?Sized,
{
    let step = step.abs();

    let center = Point::at(g, x0);
    let left = Point::at(g, x0 - step);
    let right = Point::at(g, x0 + step);

    let (mut delta, side) = if left.value >= center.value && center.value <= right.value {
        return Ok(Bracket::from_ordered(left, center, right));
    } else if left.value >= center.value && center.value >= right.value {
        (step, right)
    } else if left.value <= center.value && center.value <= right.value {
        (-step, left)
    } else {
        return Err(Error::NotUnimodal {
            left,
            center,
            right,
        });
    };

    // The last three points visited, oldest first.
    let (mut before, mut prev, mut last) = (center, center, side);

    let mut expansions = 0;
    loop {
        if expansions == max_expansions || !delta.is_finite() {
            return Err(Error::NoConvergence {
                phase: Phase::Bracketing,
                iters: expansions,
            });
        }
        expansions += 1;

        delta *= 2.0;
        let next = Point::at(g, last.x + delta);
        log::trace!("sven: expanded to x = {} (f = {})", next.x, next.value);

        (before, prev, last) = (prev, last, next);
        if last.value >= prev.value {
            break;
        }
    }

    let half_back = Point::at(g, last.x - delta / 2.0);

    let (a, m, b) = if half_back.value < prev.value {
        (prev, half_back, last)
    } else {
        (before, prev, half_back)
    };

    if delta < 0.0 {
        Ok(Bracket::from_ordered(b, m, a))
    } else {
        Ok(Bracket::from_ordered(a, m, b))
    }
}
