//! Forward Euler solver for ODE problems.
//!
//! Steps a model forward with the explicit update
//!
//! ```text
//! state_{n+1} = finalize(state_n + derivative_n * dt)
//! ```
//!
//! where `finalize` is the problem's [`OdeProblem::finalize_step`] hook.
//! The derivative used for step `n + 1` comes only from the snapshot at step
//! `n`, so nothing computed during a step feeds back into the same step.
//!
//! # Example
//!
//! ```ignore
//! use pedon_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use pedon_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state from the current input.
///    - Compute the derivative from the current input and output.
///    - Step the state forward: `state + derivative * dt`.
///    - Build the next input from the stepped state.
///    - Finalize the step (boundary conditions, clamping).
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial snapshot (step 0) and
/// after each integration step, and may return [`Action::StopEarly`] to end
/// the simulation with the history so far.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(Error::model(0))?;
    let mut history = Vec::with_capacity(steps + 1);
    history.push(Snapshot::new(initial, initial_output));

    if let Some(Action::StopEarly) = observer.observe(&Event {
        step: 0,
        snapshot: &history[0],
    }) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=steps {
        let current = &history[step - 1];

        let state = problem.state(&current.input).map_err(Error::problem(step))?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem(step))?;
        let next_state = state.step(derivative, dt.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::problem(step))?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::problem(step))?;

        let next_output = model.call(&next_input).map_err(Error::model(step))?;
        history.push(Snapshot::new(next_input, next_output));

        if let Some(Action::StopEarly) = observer.observe(&Event {
            step,
            snapshot: &history[step],
        }) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}
