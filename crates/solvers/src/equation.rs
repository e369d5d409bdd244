//! Solvers for equation problems - finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive that
//! residual toward zero inside a sign-changing bracket.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: Newton steps from an initial guess, falling back to
//!   bisection whenever a step would leave the bracket
//!
//! Both solvers share [`Config`], [`Solution`], and [`Error`].
//!
//! [`EquationProblem`]: pedon_core::EquationProblem

mod best;
mod bracket;
mod config;
mod error;
mod evaluate;
mod solution;

pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use solution::{Solution, Status};

pub mod bisection;
pub mod newton;
