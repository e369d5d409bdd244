use log::{Level, log_enabled, trace};

use pedon_core::Observer;

use crate::traits::{HasResidual, HasStep};

/// Logs every root-finder evaluation at `trace` level.
///
/// Never returns an action.
#[derive(Debug, Clone)]
pub struct ResidualLogger {
    label: &'static str,
    evaluations: usize,
}

impl ResidualLogger {
    /// Creates a logger that prefixes each record with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            evaluations: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl<E: HasResidual, A> Observer<E, A> for &mut ResidualLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evaluations += 1;
        trace!(
            "{} eval {}: x = {:.9e}, residual = {:.3e}",
            self.label,
            self.evaluations,
            event.x(),
            event.residual()
        );
        None
    }
}

/// Logs time-stepping progress at `trace` level every `every` steps.
///
/// Never returns an action.
#[derive(Debug, Clone)]
pub struct StepLogger {
    label: &'static str,
    every: usize,
    last_step: Option<usize>,
}

impl StepLogger {
    /// Creates a logger that records every `every`-th step (at least every step).
    #[must_use]
    pub fn new(label: &'static str, every: usize) -> Self {
        Self {
            label,
            every: every.max(1),
            last_step: None,
        }
    }

    /// Returns the last step observed, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<usize> {
        self.last_step
    }
}

impl<E: HasStep, A> Observer<E, A> for &mut StepLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        self.last_step = Some(step);
        if step % self.every == 0 && log_enabled!(Level::Trace) {
            trace!("{} step {}", self.label, step);
        }
        None
    }
}
