use serde::{Deserialize, Serialize};

/// Static parameters of the root-zone bucket.
///
/// Moisture contents are volumetric fractions (m³/m³) and the root depth is in
/// metres. Deserialization rejects unknown and missing keys; range checks
/// happen in [`MoistureBalance::new`](super::MoistureBalance::new).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketParameters {
    pub field_capacity: f64,
    pub wilting_point: f64,
    pub root_depth: f64,
    pub initial_moisture: f64,
}
