//! Safeguarded Newton iteration on a sign-changing bracket.
//!
//! The solve starts from a caller-supplied guess and takes Newton steps
//! `x - r/r'` using the slope from [`DifferentiableProblem`]. Every evaluation
//! also shrinks the bracket, and any step that would land on or outside the
//! bracket (or that has a zero or non-finite slope) is replaced by a bisection
//! step. The result converges as fast as Newton near a simple root and never
//! slower than bisection elsewhere.
//!
//! The iteration is fully deterministic: identical inputs produce
//! bit-identical solutions.

mod action;
mod event;

pub use action::Action;
pub use event::{Event, StepKind};

use pedon_core::{DifferentiableProblem, EquationProblem, Model, Observer};

use super::{
    Bracket, Config, Error, Evaluation, Sign, Solution, Status, best::Best, bracket::Bounds,
    evaluate,
};

/// Finds a root of a differentiable equation starting from `guess`.
///
/// Both bracket endpoints are evaluated first to establish the residual signs.
/// If `guess` lies inside the closed bracket it is the first iterate,
/// otherwise the bracket midpoint is. Observers see each iterate after it is
/// evaluated.
///
/// # Errors
///
/// Returns an error if the bracket is invalid (non-finite, zero width, or
/// without a sign change), if `guess` is not finite, or if the model or
/// problem fails at any evaluated point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem + EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    if !guess.is_finite() {
        return Err(Error::NonFiniteGuess { guess });
    }

    let mut best = Best::empty();

    let left = evaluate(model, problem, [bounds.left()])?;
    let left_sign = Sign::of(left.residuals[0]);
    best.update(left);

    let right = evaluate(model, problem, [bounds.right()])?;
    let right_sign = Sign::of(right.residuals[0]);
    best.update(right);

    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0);
    }

    let mut bracket = Bracket::new(bounds, [left_sign, right_sign])?;

    let (mut x, mut step) = if (bounds.left()..=bounds.right()).contains(&guess) {
        (guess, StepKind::Guess)
    } else {
        (bracket.midpoint(), StepKind::Bisection)
    };

    for iter in 1..=config.max_iters() {
        let (eval, slope) = evaluate_with_slope(model, problem, x)?;
        let residual = eval.residuals[0];

        let action = observer.observe(&Event {
            iter,
            bracket: bracket.endpoints(),
            eval: &eval,
            slope,
            step,
        });
        best.update(eval);

        if let Some(Action::StopEarly) = action {
            return best.finish(Status::StoppedByObserver, iter);
        }

        if best.is_residual_converged(config.residual_tol()) {
            return best.finish(Status::Converged, iter);
        }

        bracket.shrink(x, Sign::of(residual));

        let (next, next_step) = next_iterate(&bracket, x, residual, slope);

        if config.is_x_converged(next - x, next)
            || bracket.is_x_converged(config)
        {
            return best.finish(Status::Converged, iter);
        }

        x = next;
        step = next_step;
    }

    best.finish(Status::MaxIters, config.max_iters())
}

/// Runs the safeguarded Newton solver without observation.
///
/// # Errors
///
/// Returns an error if the bracket or guess is invalid, or if the model or
/// problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    guess: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem + EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, guess, config, ())
}

/// Chooses the next iterate: the Newton step if it stays strictly inside the
/// bracket, otherwise the bracket midpoint.
fn next_iterate(bracket: &Bracket, x: f64, residual: f64, slope: f64) -> (f64, StepKind) {
    #[allow(clippy::float_cmp)]
    if slope != 0.0 && slope.is_finite() {
        let newton = x - residual / slope;
        if newton.is_finite() && bracket.contains_strictly(newton) {
            return (newton, StepKind::Newton);
        }
    }
    (bracket.midpoint(), StepKind::Bisection)
}

/// Evaluates the problem at `x` and computes the residual slope there.
fn evaluate_with_slope<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<(Evaluation<M::Input, M::Output, 1>, f64), Error>
where
    M: Model,
    P: DifferentiableProblem + EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    let slope = problem
        .slope(&eval.snapshot.input, &eval.snapshot.output)
        .map_err(|error| Error::Problem(Box::new(error)))?;
    Ok((eval, slope))
}

#[cfg(test)]
mod tests;
