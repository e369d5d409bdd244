use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Ratio, Velocity},
    length::meter,
    ratio::ratio,
    velocity::meter_per_second,
};

/// Soil properties for the Green–Ampt infiltration model.
///
/// Values are SI: conductivity in m/s, suction head in metres, moisture
/// contents as volumetric fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreenAmptParameters {
    pub saturated_conductivity: f64,
    /// Suction head at the wetting front.
    pub suction_head: f64,
    pub initial_moisture: f64,
    pub saturated_moisture: f64,
}

impl GreenAmptParameters {
    /// Builds parameters from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(
        saturated_conductivity: Velocity,
        suction_head: Length,
        initial_moisture: Ratio,
        saturated_moisture: Ratio,
    ) -> Self {
        Self {
            saturated_conductivity: saturated_conductivity.get::<meter_per_second>(),
            suction_head: suction_head.get::<meter>(),
            initial_moisture: initial_moisture.get::<ratio>(),
            saturated_moisture: saturated_moisture.get::<ratio>(),
        }
    }
}
