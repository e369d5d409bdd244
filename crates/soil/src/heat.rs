//! One-dimensional soil heat conduction with an explicit finite-difference
//! scheme.
//!
//! Nodes are spaced `Δz` apart with node 0 at the surface. Each time level
//! updates the interior nodes from the previous level only:
//!
//! ```text
//! T[i, j+1] = T[i, j] + α·(T[i+1, j] − 2·T[i, j] + T[i−1, j]),    α = D·Δt/Δz²
//! ```
//!
//! The surface node is then set from the surface series and the bottom node
//! is copied from the node above it (no heat flux through the bottom). The
//! scheme can diverge when `α > 0.5`; such runs still complete, with a
//! warning logged and recorded in [`HeatProfile::stability`].
//!
//! # Example
//!
//! ```
//! use pedon_soil::heat::{self, HeatProfileConfig, InitialTemperature};
//!
//! let config = HeatProfileConfig {
//!     diffusivity: 2e-7,
//!     time_step: 3600.0,
//!     node_spacing: 0.1,
//!     nodes: 10,
//! };
//!
//! let profile = heat::simulate(
//!     &InitialTemperature::Uniform(10.0),
//!     &[15.0, 16.0, 15.5],
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(profile.shape(), (10, 3));
//! assert!(profile.stability().is_stable());
//! ```

mod conduction;
mod config;
mod profile;

#[cfg(test)]
mod tests;

pub use config::{HeatProfileConfig, InitialTemperature};
pub use profile::{HeatProfile, Stability};

use log::{debug, warn};
use ndarray::{Array2, ArrayView1, Axis};
use pedon_core::constraint::{Constrained, StrictlyPositive};
use pedon_observers::StepLogger;
use pedon_solvers::transient::euler;

use crate::{
    error::{Error, InputError, NumericalError, Result, constrained},
    series::DrivingSeries,
};

use conduction::{BoundedProfile, Conduction, TimeLevel};

/// Runs a heat profile driven by a surface temperature series (°C).
///
/// The result has `config.nodes` rows and one column per surface value.
/// Column `j ≥ 1` is the state after applying `surface[j − 1]`, so the last
/// surface value is not used.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the config is out of range, the surface
/// series is empty or non-finite, or the initial profile does not match the
/// node count.
pub fn simulate(
    initial: &InitialTemperature,
    surface: &[f64],
    config: &HeatProfileConfig,
) -> Result<HeatProfile> {
    HeatConduction::new(*config)?.simulate(initial, surface)
}

/// A validated heat conduction grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatConduction {
    diffusivity: Constrained<f64, StrictlyPositive>,
    time_step: Constrained<f64, StrictlyPositive>,
    node_spacing: Constrained<f64, StrictlyPositive>,
    nodes: usize,
}

impl HeatConduction {
    /// Smallest grid with an interior node.
    pub const MIN_NODES: usize = 3;

    /// Checks the config.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if diffusivity, time step or node spacing is
    /// not strictly positive and finite, or if there are fewer than
    /// [`Self::MIN_NODES`] nodes.
    pub fn new(config: HeatProfileConfig) -> std::result::Result<Self, InputError> {
        let diffusivity = constrained("diffusivity", config.diffusivity)?;
        let time_step = constrained("time_step", config.time_step)?;
        let node_spacing = constrained("node_spacing", config.node_spacing)?;
        if config.nodes < Self::MIN_NODES {
            return Err(InputError::TooFewNodes {
                nodes: config.nodes,
            });
        }
        Ok(Self {
            diffusivity,
            time_step,
            node_spacing,
            nodes: config.nodes,
        })
    }

    #[must_use]
    pub fn config(&self) -> HeatProfileConfig {
        HeatProfileConfig {
            diffusivity: self.diffusivity.get(),
            time_step: self.time_step.get(),
            node_spacing: self.node_spacing.get(),
            nodes: self.nodes,
        }
    }

    #[must_use]
    pub fn stability(&self) -> Stability {
        Stability::new(self.config().stability_factor())
    }

    /// Runs the scheme from `initial` under the given surface series.
    ///
    /// # Errors
    ///
    /// See [`simulate`].
    pub fn simulate(&self, initial: &InitialTemperature, surface: &[f64]) -> Result<HeatProfile> {
        let surface = DrivingSeries::new("surface temperature", surface)?;
        let temperatures = initial.to_profile(self.nodes)?;

        let stability = self.stability();
        if !stability.is_stable() {
            warn!(
                "heat profile: stability factor {:.4} exceeds {}, the explicit scheme may diverge",
                stability.alpha(),
                Stability::LIMIT,
            );
        }
        debug!(
            "heat profile: {} nodes, {} time levels, alpha {:.4}",
            self.nodes,
            surface.len(),
            stability.alpha(),
        );

        let model = Conduction::new(stability.alpha());
        let problem = BoundedProfile::new(&surface);
        let mut logger = StepLogger::new("heat profile", 100);

        let solution = euler::solve(
            &model,
            &problem,
            TimeLevel {
                step: 0,
                temperatures,
            },
            1.0,
            surface.len() - 1,
            &mut logger,
        )?;
        if solution.status != euler::Status::Complete {
            return Err(Error::Numerical(NumericalError::StoppedEarly {
                iterations: solution.steps,
            }));
        }

        let mut grid = Array2::zeros((self.nodes, solution.history.len()));
        for (mut column, level) in grid.axis_iter_mut(Axis(1)).zip(solution.inputs()) {
            column.assign(&ArrayView1::from(level.temperatures.as_slice()));
        }

        Ok(HeatProfile::new(grid, self.node_spacing.get(), stability))
    }
}

impl TryFrom<HeatProfileConfig> for HeatConduction {
    type Error = Error;

    fn try_from(config: HeatProfileConfig) -> Result<Self> {
        Ok(Self::new(config)?)
    }
}
