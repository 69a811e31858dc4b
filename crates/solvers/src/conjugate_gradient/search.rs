use contour_core::{Objective, Observer, vector};

use super::{
    Config, Error, IterationRecord, RestartPolicy, Solution, Status, state::State,
    termination::Step,
};

/// Core conjugate-gradient loop; the config must already be validated.
pub(super) fn search<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
    Obs: Observer<IterationRecord<N>>,
{
    let mut state = State::start(objective, x0, &config.gradient);
    let mut restarts = 0;
    let mut iter = 0;

    loop {
        iter += 1;
        let line_error = move |source| Error::LineSearch { iter, source };

        let mut direction = state.direction;
        let mut outcome = state
            .line_search(objective, &direction, &config.line)
            .map_err(line_error)?;
        let mut step_length = outcome.minimum.x;
        let mut value = outcome.minimum.value;

        let restart = config
            .restart
            .filter(|restart| restart.triggers(step_length));
        let restarted = restart.is_some();
        if let Some(restart) = restart {
            restarts += 1;
            direction = state.steepest_descent();
            match restart.policy {
                RestartPolicy::KeepStep => {
                    value = objective.value(&state.point_along(&direction, step_length));
                }
                RestartPolicy::SearchAgain => {
                    outcome = state
                        .line_search(objective, &direction, &config.line)
                        .map_err(line_error)?;
                    step_length = outcome.minimum.x;
                    value = outcome.minimum.value;
                }
            }
            log::debug!(
                "conjugate gradient: restart at iteration {iter} ({}), step = {step_length}",
                restart.policy
            );
        }

        let x1 = state.point_along(&direction, step_length);
        let gradient = config.gradient.estimate(objective, &x1, Some(value));

        observer.observe(&IterationRecord {
            iter,
            x: state.x,
            value: state.value,
            gradient: state.gradient,
            direction,
            bracket: outcome.bracket,
            step_length,
            restarted,
        });
        log::debug!(
            "conjugate gradient: iteration {iter}, f = {value}, step = {step_length}, |grad| = {}",
            vector::norm(&gradient)
        );

        let step = Step {
            x0: &state.x,
            x1: &x1,
            f0: state.value,
            f1: value,
            direction: &direction,
            gradient: &gradient,
        };
        let status = if config.termination.is_met(&step, config.accuracy) {
            Some(Status::Converged)
        } else if config.max_iters.is_some_and(|max| iter >= max) {
            log::warn!("conjugate gradient: stopped after {iter} iterations without converging");
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x: x1,
                value,
                gradient,
                iters: iter,
                restarts,
            });
        }

        let mut weight = config.modification.weight(&state.gradient, &gradient);
        if config.clamp_weight {
            weight = weight.max(0.0);
        }

        state = State {
            x: x1,
            value,
            gradient,
            direction: vector::add_scaled(&vector::neg(&gradient), weight, &direction),
        };
    }
}
