//! The bucket as a forward-Euler problem with a step of one day.
//!
//! The model looks up the forcing for the day held in its input, and the
//! problem turns that forcing into a storage change. Because the change
//! computed on day `t - 1` is applied to produce day `t`, the last day's
//! forcing never reaches the storage.

use std::convert::Infallible;

use pedon_core::{Model, OdeProblem, StepIntegrable};
use thiserror::Error;

use super::Forcing;

/// Root-zone state at the start of a day, in millimetres of water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct BucketDay {
    /// Zero-based index into the forcing series.
    pub(super) index: usize,
    pub(super) storage: f64,
    /// Water shed above field capacity when this day's storage was clamped.
    pub(super) runoff: f64,
    /// Water added to reach the wilting point when this day's storage was clamped.
    pub(super) wilting_point_fill: f64,
}

impl BucketDay {
    pub(super) fn first(clamped: Clamped) -> Self {
        Self {
            index: 0,
            storage: clamped.storage,
            runoff: clamped.runoff,
            wilting_point_fill: clamped.wilting_point_fill,
        }
    }
}

/// Water entering and leaving the bucket on one day, in mm/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DailyFlux {
    pub(super) precipitation: f64,
    pub(super) evapotranspiration: f64,
}

/// Root-zone storage in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Storage(f64);

impl StepIntegrable<f64> for Storage {
    type Derivative = DailyFlux;

    fn step(&self, flux: DailyFlux, days: f64) -> Self {
        Self(self.0 + flux.precipitation * days - flux.evapotranspiration * days)
    }
}

#[derive(Debug, Error)]
#[error("no forcing for day {day}")]
pub(super) struct MissingForcing {
    day: usize,
}

/// Looks up the forcing for the day held in the input.
pub(super) struct DailyForcing<'a> {
    forcing: &'a Forcing,
}

impl<'a> DailyForcing<'a> {
    pub(super) fn new(forcing: &'a Forcing) -> Self {
        Self { forcing }
    }
}

impl Model for DailyForcing<'_> {
    type Input = BucketDay;
    type Output = DailyFlux;
    type Error = MissingForcing;

    fn call(&self, input: &BucketDay) -> Result<DailyFlux, MissingForcing> {
        let day = input.index;
        match (
            self.forcing.precipitation().get(day),
            self.forcing.evapotranspiration().get(day),
        ) {
            (Some(&precipitation), Some(&evapotranspiration)) => Ok(DailyFlux {
                precipitation,
                evapotranspiration,
            }),
            _ => Err(MissingForcing { day: day + 1 }),
        }
    }
}

/// Storage after the capacity limits have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Clamped {
    pub(super) storage: f64,
    pub(super) runoff: f64,
    pub(super) wilting_point_fill: f64,
}

/// Field capacity and wilting point expressed as depths (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct StorageLimits {
    pub(super) field_capacity: f64,
    pub(super) wilting_point: f64,
}

impl StorageLimits {
    /// Caps storage at field capacity, then lifts it to the wilting point.
    ///
    /// Both checks see the same value: excess above field capacity becomes
    /// runoff, and any shortfall below the wilting point is filled.
    pub(super) fn clamp(&self, raw: f64) -> Clamped {
        let mut clamped = Clamped {
            storage: raw,
            runoff: 0.0,
            wilting_point_fill: 0.0,
        };
        if clamped.storage > self.field_capacity {
            clamped.runoff = clamped.storage - self.field_capacity;
            clamped.storage = self.field_capacity;
        }
        if clamped.storage < self.wilting_point {
            clamped.wilting_point_fill = self.wilting_point - clamped.storage;
            clamped.storage = self.wilting_point;
        }
        clamped
    }
}

/// Daily water balance with the capacity limits applied after each step.
pub(super) struct BucketProblem {
    limits: StorageLimits,
}

impl BucketProblem {
    pub(super) fn new(limits: StorageLimits) -> Self {
        Self { limits }
    }
}

impl OdeProblem for BucketProblem {
    type Input = BucketDay;
    type Output = DailyFlux;
    type Delta = f64;
    type State = Storage;
    type Error = Infallible;

    fn state(&self, input: &BucketDay) -> Result<Storage, Infallible> {
        Ok(Storage(input.storage))
    }

    fn derivative(&self, _input: &BucketDay, output: &DailyFlux) -> Result<DailyFlux, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &BucketDay,
        state: &Storage,
        _days: &f64,
    ) -> Result<BucketDay, Infallible> {
        Ok(BucketDay {
            index: base.index + 1,
            storage: state.0,
            runoff: 0.0,
            wilting_point_fill: 0.0,
        })
    }

    fn finalize_step(
        &self,
        next: BucketDay,
        _prev_input: &BucketDay,
        _prev_output: &DailyFlux,
        _days: &f64,
    ) -> Result<BucketDay, Infallible> {
        let clamped = self.limits.clamp(next.storage);
        Ok(BucketDay {
            storage: clamped.storage,
            runoff: clamped.runoff,
            wilting_point_fill: clamped.wilting_point_fill,
            ..next
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const LIMITS: StorageLimits = StorageLimits {
        field_capacity: 150.0,
        wilting_point: 50.0,
    };

    #[test]
    fn clamp_passes_values_within_limits() {
        let clamped = LIMITS.clamp(108.0);
        assert_eq!(
            clamped,
            Clamped {
                storage: 108.0,
                runoff: 0.0,
                wilting_point_fill: 0.0,
            }
        );
    }

    #[test]
    fn excess_becomes_runoff() {
        let clamped = LIMITS.clamp(170.0);
        assert_relative_eq!(clamped.storage, 150.0);
        assert_relative_eq!(clamped.runoff, 20.0);
        assert_relative_eq!(clamped.wilting_point_fill, 0.0);
    }

    #[test]
    fn deficit_is_filled() {
        let clamped = LIMITS.clamp(40.0);
        assert_relative_eq!(clamped.storage, 50.0);
        assert_relative_eq!(clamped.runoff, 0.0);
        assert_relative_eq!(clamped.wilting_point_fill, 10.0);
    }

    #[test]
    fn storage_steps_by_net_flux() {
        let flux = DailyFlux {
            precipitation: 10.0,
            evapotranspiration: 2.0,
        };
        assert_eq!(Storage(100.0).step(flux, 1.0), Storage(108.0));
    }

    #[test]
    fn forcing_past_the_horizon_is_an_error() {
        let forcing = Forcing::new([1.0], [0.5]).unwrap();
        let model = DailyForcing::new(&forcing);
        let day = BucketDay {
            index: 1,
            storage: 100.0,
            runoff: 0.0,
            wilting_point_fill: 0.0,
        };

        let err = model.call(&day).unwrap_err();
        assert_eq!(err.to_string(), "no forcing for day 2");
    }
}
