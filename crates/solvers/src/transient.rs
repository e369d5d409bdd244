//! Explicit time-marching solvers for ODE problems.
//!
//! - [`euler`]: forward Euler with a post-step hook for boundary conditions
//!   and state limits

pub mod euler;
