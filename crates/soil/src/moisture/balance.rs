use serde::{Deserialize, Serialize};

/// One row of a moisture balance.
///
/// Precipitation, evapotranspiration, runoff and wilting-point fill are in
/// millimetres; soil moisture is volumetric (m³/m³).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyBalance {
    /// One-based day number.
    pub day: usize,
    pub precipitation: f64,
    #[serde(rename = "ET")]
    pub evapotranspiration: f64,
    pub soil_moisture: f64,
    pub runoff: f64,
    pub wilting_point_fill: f64,
}

/// Daily records of a moisture balance run, one per forcing day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceResult {
    records: Vec<DailyBalance>,
}

impl BalanceResult {
    pub(super) fn new(records: Vec<DailyBalance>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[DailyBalance] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyBalance> {
        self.records.iter()
    }

    /// Returns the volumetric soil moisture for each day.
    #[must_use]
    pub fn soil_moisture(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.soil_moisture).collect()
    }

    /// Returns the runoff for each day.
    #[must_use]
    pub fn runoff(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.runoff).collect()
    }

    #[must_use]
    pub fn total_runoff(&self) -> f64 {
        self.records.iter().map(|r| r.runoff).sum()
    }

    /// Total water added by lifting storage to the wilting point.
    ///
    /// This water is not part of the forcing, so a non-zero total means the
    /// balance does not close.
    #[must_use]
    pub fn total_wilting_point_fill(&self) -> f64 {
        self.records.iter().map(|r| r.wilting_point_fill).sum()
    }

    #[must_use]
    pub fn final_soil_moisture(&self) -> Option<f64> {
        self.records.last().map(|r| r.soil_moisture)
    }
}

impl<'a> IntoIterator for &'a BalanceResult {
    type Item = &'a DailyBalance;
    type IntoIter = std::slice::Iter<'a, DailyBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
