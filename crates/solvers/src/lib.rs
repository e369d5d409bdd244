//! Numerical solvers for the Pedon soil simulators.
//!
//! The solvers here know nothing about soil. They operate on the problem
//! traits from [`pedon_core`] and can be tested on their own.
//!
//! - [`equation`]: scalar root finding ([`equation::bisection`] and the
//!   safeguarded Newton hybrid [`equation::newton`])
//! - [`transient`]: explicit time marching ([`transient::euler`])

pub mod equation;
pub mod transient;
