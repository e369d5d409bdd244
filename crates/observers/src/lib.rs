//! Reusable observers for the Pedon solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`pedon_solvers`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//! - [`ResidualLogger`], [`StepLogger`]: forward solver progress to the
//!   [`log`] facade at `trace` level
//! - [`StopAfter`]: stops any solver after a fixed number of events
//!
//! [`Observer`]: pedon_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod stop;

pub use logger::{ResidualLogger, StepLogger};
pub use stop::StopAfter;
