//! Explicit conduction as a forward-Euler problem.
//!
//! The model returns the per-step temperature change at each node and the
//! problem applies it with a step of one time level. The surface and bottom
//! boundaries are imposed by `finalize_step`, surface first.

use std::convert::Infallible;

use pedon_core::{Model, OdeProblem};
use thiserror::Error;

/// Node temperatures at one time level.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TimeLevel {
    pub(super) step: usize,
    pub(super) temperatures: Vec<f64>,
}

/// Per-step change `α·(T[i+1] − 2T[i] + T[i−1])` at each interior node.
///
/// The end nodes get no change; their values come from the boundaries.
#[derive(Debug, Clone, Copy)]
pub(super) struct Conduction {
    alpha: f64,
}

impl Conduction {
    pub(super) fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Model for Conduction {
    type Input = TimeLevel;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn call(&self, level: &TimeLevel) -> Result<Vec<f64>, Infallible> {
        let temperatures = &level.temperatures;
        let mut change = vec![0.0; temperatures.len()];
        for (i, t) in temperatures.windows(3).enumerate() {
            change[i + 1] = self.alpha * (t[2] - 2.0 * t[1] + t[0]);
        }
        Ok(change)
    }
}

#[derive(Debug, Error)]
#[error("no surface temperature for step {step}")]
pub(super) struct MissingSurfaceTemperature {
    step: usize,
}

/// Steps the profile with a fixed surface and an insulated bottom.
pub(super) struct BoundedProfile<'a> {
    surface: &'a [f64],
}

impl<'a> BoundedProfile<'a> {
    pub(super) fn new(surface: &'a [f64]) -> Self {
        Self { surface }
    }
}

impl OdeProblem for BoundedProfile<'_> {
    type Input = TimeLevel;
    type Output = Vec<f64>;
    type Delta = f64;
    type State = Vec<f64>;
    type Error = MissingSurfaceTemperature;

    fn state(&self, level: &TimeLevel) -> Result<Vec<f64>, Self::Error> {
        Ok(level.temperatures.clone())
    }

    fn derivative(&self, _level: &TimeLevel, change: &Vec<f64>) -> Result<Vec<f64>, Self::Error> {
        Ok(change.clone())
    }

    fn build_input(
        &self,
        base: &TimeLevel,
        temperatures: &Vec<f64>,
        _steps: &f64,
    ) -> Result<TimeLevel, Self::Error> {
        Ok(TimeLevel {
            step: base.step + 1,
            temperatures: temperatures.clone(),
        })
    }

    /// Sets the surface node from the series, then copies the node above the
    /// bottom into the bottom node.
    fn finalize_step(
        &self,
        mut next: TimeLevel,
        _prev_level: &TimeLevel,
        _prev_change: &Vec<f64>,
        _steps: &f64,
    ) -> Result<TimeLevel, Self::Error> {
        let step = next.step;
        let surface = step
            .checked_sub(1)
            .and_then(|j| self.surface.get(j))
            .copied()
            .ok_or(MissingSurfaceTemperature { step })?;

        let temperatures = &mut next.temperatures;
        if let Some(first) = temperatures.first_mut() {
            *first = surface;
        }
        let n = temperatures.len();
        if n >= 2 {
            temperatures[n - 1] = temperatures[n - 2];
        }
        Ok(next)
    }
}
