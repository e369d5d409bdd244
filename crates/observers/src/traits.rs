//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can be attached to several solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a solver variable and its residual
//! - [`HasStep`]: events emitted once per time step
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination

use pedon_core::{EquationProblem, Model};

use pedon_solvers::{
    equation::{bisection, newton},
    transient::euler,
};

/// An event that carries a solver variable and its residual.
pub trait HasResidual {
    /// Returns the evaluated solver variable.
    fn x(&self) -> f64;

    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event emitted once per time step.
pub trait HasStep {
    /// Returns the step number, starting at 0 for the initial state.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<M, P> HasResidual for bisection::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }

    fn residual(&self) -> f64 {
        match self.result() {
            Ok(eval) => eval.residuals[0],
            Err(_) => f64::NAN,
        }
    }
}

impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn x(&self) -> f64 {
        newton::Event::x(self)
    }

    fn residual(&self) -> f64 {
        newton::Event::residual(self)
    }
}

impl<I, O> HasStep for euler::Event<'_, I, O> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
