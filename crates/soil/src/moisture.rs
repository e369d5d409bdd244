//! Daily root-zone water balance (bucket model).
//!
//! The root zone is a single reservoir bounded below by the wilting point and
//! above by field capacity. Storage on day 1 is the initial moisture. Each
//! later day adds the previous day's precipitation and removes the previous
//! day's evapotranspiration, then clamps to the limits. Water above field
//! capacity leaves as runoff. Water missing below the wilting point is
//! filled in and reported as `wilting_point_fill`.
//!
//! Volumetric contents are converted to millimetres of water with the factor
//! `root_depth * 1000` and reported back as volumetric fractions.
//!
//! # Example
//!
//! ```
//! use pedon_soil::moisture::{self, BucketParameters};
//!
//! let params = BucketParameters {
//!     field_capacity: 0.3,
//!     wilting_point: 0.1,
//!     root_depth: 0.5,
//!     initial_moisture: 0.2,
//! };
//!
//! let balance = moisture::simulate(&[10.0, 0.0, 5.0], &[2.0, 2.0, 2.0], &params).unwrap();
//! assert_eq!(balance.len(), 3);
//! assert!(balance.final_soil_moisture().unwrap() > 0.0);
//! ```

mod balance;
mod bucket;
mod params;

#[cfg(test)]
mod tests;

pub use balance::{BalanceResult, DailyBalance};
pub use params::BucketParameters;

use log::debug;
use pedon_core::constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval};
use pedon_observers::StepLogger;
use pedon_solvers::transient::euler;
use rayon::prelude::*;

use crate::{
    error::{Error, InputError, NumericalError, Result, constrained},
    series::DrivingSeries,
};

use bucket::{BucketDay, BucketProblem, DailyForcing, StorageLimits};

/// Millimetres of water per metre of root depth per unit volumetric content.
const MM_PER_M: f64 = 1000.0;

/// Runs a moisture balance over paired daily precipitation and
/// evapotranspiration series (mm/day).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the parameters are out of range, if a
/// series is empty or contains a non-finite value, or if the series lengths
/// differ.
pub fn simulate(
    precipitation: &[f64],
    evapotranspiration: &[f64],
    params: &BucketParameters,
) -> Result<BalanceResult> {
    let balance = MoistureBalance::new(*params)?;
    let forcing = Forcing::new(precipitation, evapotranspiration)?;
    balance.simulate(&forcing)
}

/// Daily precipitation and evapotranspiration of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Forcing {
    precipitation: DrivingSeries,
    evapotranspiration: DrivingSeries,
}

impl Forcing {
    /// Validates both series and pairs them.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if either series is empty or non-finite, or
    /// if their lengths differ.
    pub fn new(
        precipitation: impl Into<Vec<f64>>,
        evapotranspiration: impl Into<Vec<f64>>,
    ) -> std::result::Result<Self, InputError> {
        Self::from_series(
            DrivingSeries::new("precipitation", precipitation)?,
            DrivingSeries::new("evapotranspiration", evapotranspiration)?,
        )
    }

    /// Pairs two already validated series.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::LengthMismatch`] if the lengths differ.
    pub fn from_series(
        precipitation: DrivingSeries,
        evapotranspiration: DrivingSeries,
    ) -> std::result::Result<Self, InputError> {
        if precipitation.len() != evapotranspiration.len() {
            return Err(InputError::LengthMismatch {
                precipitation: precipitation.len(),
                evapotranspiration: evapotranspiration.len(),
            });
        }
        Ok(Self {
            precipitation,
            evapotranspiration,
        })
    }

    #[must_use]
    pub fn days(&self) -> usize {
        self.precipitation.len()
    }

    #[must_use]
    pub fn precipitation(&self) -> &DrivingSeries {
        &self.precipitation
    }

    #[must_use]
    pub fn evapotranspiration(&self) -> &DrivingSeries {
        &self.evapotranspiration
    }
}

/// A validated bucket ready to run against any number of forcings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistureBalance {
    field_capacity: Constrained<f64, UnitInterval>,
    wilting_point: Constrained<f64, UnitInterval>,
    root_depth: Constrained<f64, StrictlyPositive>,
    initial_moisture: Constrained<f64, NonNegative>,
}

impl MoistureBalance {
    /// Checks the parameters and builds the bucket.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] unless `0 ≤ wilting_point < field_capacity ≤ 1`,
    /// `root_depth > 0` and `0 ≤ initial_moisture ≤ field_capacity`.
    pub fn new(params: BucketParameters) -> std::result::Result<Self, InputError> {
        let field_capacity = constrained("field_capacity", params.field_capacity)?;
        let wilting_point = constrained("wilting_point", params.wilting_point)?;
        let root_depth = constrained("root_depth", params.root_depth)?;
        let initial_moisture = constrained("initial_moisture", params.initial_moisture)?;

        if params.field_capacity <= params.wilting_point {
            return Err(InputError::MoistureLimits {
                field_capacity: params.field_capacity,
                wilting_point: params.wilting_point,
            });
        }
        if params.initial_moisture > params.field_capacity {
            return Err(InputError::InitialAboveFieldCapacity {
                initial: params.initial_moisture,
                field_capacity: params.field_capacity,
            });
        }

        Ok(Self {
            field_capacity,
            wilting_point,
            root_depth,
            initial_moisture,
        })
    }

    /// Returns the parameters this bucket was built from.
    #[must_use]
    pub fn parameters(&self) -> BucketParameters {
        BucketParameters {
            field_capacity: self.field_capacity.get(),
            wilting_point: self.wilting_point.get(),
            root_depth: self.root_depth.get(),
            initial_moisture: self.initial_moisture.get(),
        }
    }

    /// Millimetres of water per unit of volumetric content.
    #[must_use]
    pub fn depth_factor(&self) -> f64 {
        self.root_depth.get() * MM_PER_M
    }

    #[must_use]
    pub fn field_capacity_depth(&self) -> f64 {
        self.field_capacity.get() * self.depth_factor()
    }

    #[must_use]
    pub fn wilting_point_depth(&self) -> f64 {
        self.wilting_point.get() * self.depth_factor()
    }

    /// Water held between the wilting point and field capacity (mm).
    #[must_use]
    pub fn available_water_capacity(&self) -> f64 {
        self.field_capacity_depth() - self.wilting_point_depth()
    }

    /// Runs the balance over one forcing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Numerical`] only if the time stepper fails, which a
    /// validated forcing does not trigger.
    pub fn simulate(&self, forcing: &Forcing) -> Result<BalanceResult> {
        let limits = StorageLimits {
            field_capacity: self.field_capacity_depth(),
            wilting_point: self.wilting_point_depth(),
        };
        let seed = limits.clamp(self.initial_moisture.get() * self.depth_factor());

        debug!(
            "moisture balance: {} days, storage limits [{:.3}, {:.3}] mm, initial {:.3} mm",
            forcing.days(),
            limits.wilting_point,
            limits.field_capacity,
            seed.storage,
        );
        if seed.wilting_point_fill > 0.0 {
            debug!(
                "initial moisture below wilting point, added {:.3} mm",
                seed.wilting_point_fill
            );
        }

        let model = DailyForcing::new(forcing);
        let problem = BucketProblem::new(limits);
        let mut logger = StepLogger::new("moisture balance", 30);

        let solution = euler::solve(
            &model,
            &problem,
            BucketDay::first(seed),
            1.0,
            forcing.days() - 1,
            &mut logger,
        )?;
        if solution.status != euler::Status::Complete {
            return Err(NumericalError::StoppedEarly {
                iterations: solution.steps,
            }
            .into());
        }

        let factor = self.depth_factor();
        let (wilting_point, field_capacity) = (self.wilting_point.get(), self.field_capacity.get());
        let records: Vec<DailyBalance> = solution
            .history
            .iter()
            .map(|snapshot| DailyBalance {
                day: snapshot.input.index + 1,
                precipitation: snapshot.output.precipitation,
                evapotranspiration: snapshot.output.evapotranspiration,
                // Dividing a clamped depth can round just past a limit.
                soil_moisture: (snapshot.input.storage / factor).clamp(wilting_point, field_capacity),
                runoff: snapshot.input.runoff,
                wilting_point_fill: snapshot.input.wilting_point_fill,
            })
            .collect();

        let result = BalanceResult::new(records);
        debug!(
            "moisture balance finished: runoff {:.3} mm, wilting point fill {:.3} mm",
            result.total_runoff(),
            result.total_wilting_point_fill(),
        );
        Ok(result)
    }

    /// Runs independent forcings in parallel.
    ///
    /// Results are returned in the same order as `forcings`.
    #[must_use]
    pub fn simulate_batch(&self, forcings: &[Forcing]) -> Vec<Result<BalanceResult>> {
        forcings
            .par_iter()
            .map(|forcing| self.simulate(forcing))
            .collect()
    }
}

impl TryFrom<BucketParameters> for MoistureBalance {
    type Error = Error;

    fn try_from(params: BucketParameters) -> Result<Self> {
        Ok(Self::new(params)?)
    }
}
