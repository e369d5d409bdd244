//! Shared fixtures for the cross-crate tests.

use pedon_soil::{
    heat::{HeatProfileConfig, InitialTemperature},
    infiltration::{GreenAmptParameters, RootMethod},
    moisture::BucketParameters,
};
use serde::{Deserialize, Serialize};

/// A site description holding one parameter set per simulator, as it would
/// appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub name: String,
    pub bucket: BucketParameters,
    pub infiltration: InfiltrationConfig,
    pub heat: HeatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfiltrationConfig {
    pub soil: GreenAmptParameters,
    #[serde(default)]
    pub method: RootMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatConfig {
    pub grid: HeatProfileConfig,
    pub initial: InitialTemperature,
}

/// The sandy loam site used across the scenario tests.
pub const SANDY_LOAM_TOML: &str = r#"
name = "sandy loam"

[bucket]
field_capacity = 0.3
wilting_point = 0.1
root_depth = 0.5
initial_moisture = 0.2

[infiltration]
method = "newton"

[infiltration.soil]
saturated_conductivity = 1e-5
suction_head = 0.15
initial_moisture = 0.2
saturated_moisture = 0.4

[heat]
initial = 10.0

[heat.grid]
diffusivity = 2e-7
time_step = 3600.0
node_spacing = 0.1
nodes = 10
"#;
