//! Core traits and types for the Pedon soil simulators.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the soil models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`], [`DifferentiableProblem`], [`OdeProblem`]: problem
//!   traits that adapt solver variables to model inputs and extract residuals,
//!   slopes, or derivatives from outputs
//! - [`constraint`]: numeric invariants checked once at construction

pub mod constraint;

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::{DifferentiableProblem, EquationProblem, OdeProblem};
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
