use contour_core::{Constraint, Objective, Observer};

use crate::conjugate_gradient::{self, IterationRecord};

use super::{Config, Error, Event, OuterRecord, Penalized, Solution, Status, max_violation};

/// Core penalty loop; the config must already be validated.
pub(super) fn search<O, Obs, const N: usize>(
    objective: &O,
    constraints: &[&dyn Constraint<N>],
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
    Obs: Observer<Event<N>>,
{
    let mut coefficient = config.initial_coefficient;
    let mut x = x0;
    let mut inner_iters = 0;
    let mut outer_iter = 0;

    loop {
        outer_iter += 1;
        let penalized = Penalized::new(objective, constraints, coefficient);

        let forward = |record: &IterationRecord<N>| {
            observer.observe(&Event::Inner {
                outer_iter,
                coefficient,
                record: *record,
            });
        };
        let inner = conjugate_gradient::minimize(&penalized, x, &config.inner, forward)
            .map_err(|source| Error::Inner { outer_iter, source })?;
        inner_iters += inner.iters;

        let record = OuterRecord {
            iter: outer_iter,
            coefficient,
            x: inner.x,
            value: inner.value,
            objective: objective.value(&inner.x),
            max_violation: max_violation(constraints, &inner.x),
            inner_iters: inner.iters,
        };
        observer.observe(&Event::Outer(record));
        log::debug!(
            "penalty: outer iteration {outer_iter}, r = {coefficient}, max violation = {}",
            record.max_violation
        );

        let status = if record.max_violation <= config.violation_tol {
            Some(Status::Feasible)
        } else if outer_iter >= config.max_outer_iters {
            log::warn!(
                "penalty: stopped after {outer_iter} outer iterations, max violation = {}",
                record.max_violation
            );
            Some(Status::MaxOuterIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x: record.x,
                value: record.value,
                objective: record.objective,
                coefficient,
                max_violation: record.max_violation,
                outer_iters: outer_iter,
                inner_iters,
            });
        }

        coefficient *= config.growth;
        x = inner.x;
    }
}
