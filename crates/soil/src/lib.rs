//! Soil process simulators.
//!
//! Three independent simulators share the numerics in [`pedon_solvers`]:
//!
//! - [`moisture`]: a daily root-zone bucket with field-capacity runoff and a
//!   wilting-point floor, stepped with forward Euler
//! - [`infiltration`]: Green–Ampt cumulative infiltration, found with a
//!   safeguarded Newton or bisection root finder
//! - [`heat`]: explicit finite-difference heat conduction down a soil column
//!
//! Each simulator has a serde-friendly parameter struct and a validated
//! counterpart built from it. Every run returns an owned result and keeps no
//! state between calls.
//!
//! Failures are reported as [`Error`]: [`Error::InvalidInput`] for rejected
//! parameters or series and [`Error::Numerical`] when a solver cannot deliver
//! a result. Progress is logged through the [`log`] facade.

pub mod heat;
pub mod infiltration;
pub mod moisture;

mod error;
mod series;

pub use error::{Error, InputError, NumericalError, Result};
pub use series::DrivingSeries;
