//! Bisection on a sign-changing bracket.
//!
//! Each iteration evaluates the bracket midpoint and keeps the half whose
//! endpoints still disagree in residual sign. Convergence is guaranteed for
//! any continuous residual, at one bit of accuracy per iteration.

mod action;
mod decision;
mod event;

pub use action::Action;
pub use event::Event;

use std::error::Error as StdError;

use pedon_core::{EquationProblem, Model, Observer};

use self::decision::Decision;
use super::{
    Bracket, Config, Error, EvalError, Evaluation, Solution, Status, best::Best, bracket::Bounds,
    evaluate,
};

/// Finds a root of the equation using the bisection method.
///
/// The bracket endpoints may be given in either order. Observers see every
/// evaluation (both endpoints, then each midpoint) and may stop the solve or
/// override the residual sign used for the bracket update.
///
/// # Errors
///
/// Returns an error if the bracket is invalid (non-finite, zero width, or
/// without a sign change), or if the model or problem fails at a point where
/// the observer does not intervene.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let mut best = Best::empty();

    let left = bounds.left();
    let result = evaluate(model, problem, [left]);
    let action = observer.observe(&Event::Left {
        x: left,
        result: &result,
    });
    let left_sign = match record(result, action, &mut best) {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0),
        Decision::Error(error) => return Err(error),
    };

    let right = bounds.right();
    let result = evaluate(model, problem, [right]);
    let action = observer.observe(&Event::Right {
        x: right,
        result: &result,
    });
    let right_sign = match record(result, action, &mut best) {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0),
        Decision::Error(error) => return Err(error),
    };

    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0);
    }

    let mut bracket = Bracket::new(bounds, [left_sign, right_sign])?;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let result = evaluate(model, problem, [mid]);
        let action = observer.observe(&Event::Midpoint {
            x: mid,
            bracket: &bracket,
            result: &result,
        });

        let sign = match record(result, action, &mut best) {
            Decision::Continue(sign) => sign,
            Decision::StopEarly => return best.finish(Status::StoppedByObserver, iter),
            Decision::Error(error) => return Err(error),
        };

        if best.is_residual_converged(config.residual_tol()) {
            return best.finish(Status::Converged, iter);
        }

        bracket.shrink(mid, sign);

        if bracket.is_x_converged(config) {
            return best.finish(Status::Converged, iter);
        }
    }

    best.finish(Status::MaxIters, config.max_iters())
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Turns an evaluation and observer action into a decision, recording
/// successful evaluations the observer did not override.
fn record<I, O, ME, PE>(
    result: Result<Evaluation<I, O, 1>, EvalError<ME, PE>>,
    action: Option<Action>,
    best: &mut Best<I, O>,
) -> Decision
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    match result {
        Ok(eval) => {
            let residual = eval.residuals[0];
            if !matches!(action, Some(Action::AssumeResidualSign(_))) {
                best.update(eval);
            }
            Decision::new(action, Ok(residual))
        }
        Err(error) => Decision::new(action, Err(Error::from(error))),
    }
}
