use serde::{Deserialize, Serialize};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, Length, Time},
    length::meter,
    time::second,
};

use crate::error::InputError;

/// Grid and material settings for a heat profile run.
///
/// Values are SI: diffusivity in m²/s, time step in seconds, node spacing in
/// metres. Deserialization rejects unknown and missing keys; range checks
/// happen when the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatProfileConfig {
    /// Thermal diffusivity of the soil.
    pub diffusivity: f64,
    pub time_step: f64,
    pub node_spacing: f64,
    /// Number of depth nodes, including the surface and bottom nodes.
    pub nodes: usize,
}

impl HeatProfileConfig {
    /// Builds a config from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(
        diffusivity: DiffusionCoefficient,
        time_step: Time,
        node_spacing: Length,
        nodes: usize,
    ) -> Self {
        Self {
            diffusivity: diffusivity.get::<square_meter_per_second>(),
            time_step: time_step.get::<second>(),
            node_spacing: node_spacing.get::<meter>(),
            nodes,
        }
    }

    /// Returns `α = D·Δt/Δz²`.
    #[must_use]
    pub fn stability_factor(&self) -> f64 {
        self.diffusivity * self.time_step / (self.node_spacing * self.node_spacing)
    }
}

/// Temperature profile at the start of a run, in °C.
///
/// Deserializes from either a number or a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialTemperature {
    /// The same temperature at every node.
    Uniform(f64),
    /// One temperature per node, surface first.
    Profile(Vec<f64>),
}

impl InitialTemperature {
    /// Expands to one finite temperature per node.
    pub(super) fn to_profile(&self, nodes: usize) -> Result<Vec<f64>, InputError> {
        let profile = match self {
            Self::Uniform(temperature) => vec![*temperature; nodes],
            Self::Profile(profile) if profile.len() == nodes => profile.clone(),
            Self::Profile(profile) => {
                return Err(InputError::ProfileLength {
                    expected: nodes,
                    actual: profile.len(),
                });
            }
        };
        if let Some((index, &value)) = profile.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(InputError::NonFinite {
                name: "initial temperature",
                index,
                value,
            });
        }
        Ok(profile)
    }
}

impl From<f64> for InitialTemperature {
    fn from(temperature: f64) -> Self {
        Self::Uniform(temperature)
    }
}

impl From<Vec<f64>> for InitialTemperature {
    fn from(profile: Vec<f64>) -> Self {
        Self::Profile(profile)
    }
}
