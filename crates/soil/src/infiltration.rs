//! Green–Ampt cumulative infiltration under ponded conditions.
//!
//! The cumulative depth `F` infiltrated after time `t` satisfies
//!
//! ```text
//! F − ψ·Δθ·ln(1 + F/(ψ·Δθ)) = Ks·t,    Δθ = θ_s − θ_i
//! ```
//!
//! which has one root with `F > Ks·t` whenever `t > 0`. The root is found
//! with the root finders in [`pedon_solvers::equation`], starting from
//! `Ks·t`.
//!
//! # Example
//!
//! ```
//! use pedon_soil::infiltration::{self, GreenAmptParameters};
//!
//! let params = GreenAmptParameters {
//!     saturated_conductivity: 1e-5,
//!     suction_head: 0.15,
//!     initial_moisture: 0.2,
//!     saturated_moisture: 0.4,
//! };
//!
//! let one_hour = infiltration::solve(3600.0, &params).unwrap();
//! assert!(one_hour.cumulative > 0.036);
//! ```

mod green_ampt;
mod params;


pub use params::GreenAmptParameters;

use log::debug;
use pedon_core::{
    Model,
    constraint::{Constrained, StrictlyPositive, UnitInterval},
};
use pedon_observers::ResidualLogger;
use pedon_solvers::equation::{Config, Status, bisection, newton};
use serde::{Deserialize, Serialize};

use crate::error::{Error, InputError, NumericalError, Result, constrained};

use green_ampt::{ElapsedTime, WettingFront};

/// Solves for the cumulative infiltration after `time` seconds.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for out-of-range parameters, a
/// non-positive moisture deficit, or a negative or non-finite time, and
/// [`Error::Numerical`] if the root finder fails to converge.
pub fn solve(time: f64, params: &GreenAmptParameters) -> Result<Infiltration> {
    GreenAmpt::new(*params)?.solve(time)
}

/// Root finder used for the Green–Ampt equation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootMethod {
    /// Newton steps safeguarded by bisection.
    #[default]
    Newton,
    Bisection,
}

/// Infiltration state at one elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Infiltration {
    /// Cumulative infiltrated depth `F` in metres.
    pub cumulative: f64,
    /// Infiltration capacity `f(F)` in m/s; infinite at `t = 0`.
    pub rate: f64,
    /// Root-finder iterations used; zero when no solve was needed.
    pub iterations: usize,
}

/// A validated Green–Ampt soil.
#[derive(Debug, Clone, Copy)]
pub struct GreenAmpt {
    conductivity: Constrained<f64, StrictlyPositive>,
    suction_head: Constrained<f64, StrictlyPositive>,
    initial_moisture: Constrained<f64, UnitInterval>,
    saturated_moisture: Constrained<f64, UnitInterval>,
    method: RootMethod,
    config: Config,
}

impl GreenAmpt {
    /// Checks the parameters and builds the model with the default
    /// [`RootMethod`] and solver [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the conductivity or suction head is not
    /// strictly positive, a moisture content is outside `[0, 1]`, or
    /// `saturated_moisture ≤ initial_moisture`.
    pub fn new(params: GreenAmptParameters) -> std::result::Result<Self, InputError> {
        let conductivity = constrained("saturated_conductivity", params.saturated_conductivity)?;
        let suction_head = constrained("suction_head", params.suction_head)?;
        let initial_moisture = constrained("initial_moisture", params.initial_moisture)?;
        let saturated_moisture = constrained("saturated_moisture", params.saturated_moisture)?;

        if params.saturated_moisture <= params.initial_moisture {
            return Err(InputError::NonPositiveMoistureDeficit {
                initial: params.initial_moisture,
                saturated: params.saturated_moisture,
            });
        }

        Ok(Self {
            conductivity,
            suction_head,
            initial_moisture,
            saturated_moisture,
            method: RootMethod::default(),
            config: Config::default(),
        })
    }

    #[must_use]
    pub fn with_method(mut self, method: RootMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn parameters(&self) -> GreenAmptParameters {
        GreenAmptParameters {
            saturated_conductivity: self.conductivity.get(),
            suction_head: self.suction_head.get(),
            initial_moisture: self.initial_moisture.get(),
            saturated_moisture: self.saturated_moisture.get(),
        }
    }

    /// Returns `Δθ = θ_s − θ_i`.
    #[must_use]
    pub fn moisture_deficit(&self) -> f64 {
        self.saturated_moisture.get() - self.initial_moisture.get()
    }

    /// Returns `ψ·Δθ` in metres.
    #[must_use]
    pub fn suction_storage(&self) -> f64 {
        self.suction_head.get() * self.moisture_deficit()
    }

    /// Infiltration capacity (m/s) once `cumulative` metres have entered.
    #[must_use]
    pub fn capacity(&self, cumulative: f64) -> f64 {
        self.front().call(&cumulative).map_or(f64::NAN, |state| state.capacity)
    }

    /// Seconds needed to infiltrate `cumulative` metres.
    #[must_use]
    pub fn time_to_reach(&self, cumulative: f64) -> f64 {
        let front = self.front();
        front
            .call(&cumulative)
            .map_or(f64::NAN, |state| front.time_to_reach(&state))
    }

    /// Solves for the cumulative infiltration after `time` seconds.
    ///
    /// `time == 0` returns zero depth without running the root finder.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NegativeTime`] or
    /// [`InputError::NonFiniteParameter`] for an invalid time, and a
    /// [`NumericalError`] if the root finder fails or runs out of iterations.
    pub fn solve(&self, time: f64) -> Result<Infiltration> {
        if !time.is_finite() {
            return Err(InputError::NonFiniteParameter {
                name: "time",
                value: time,
            }
            .into());
        }
        if time < 0.0 {
            return Err(InputError::NegativeTime { time }.into());
        }
        if time == 0.0 {
            return Ok(Infiltration {
                cumulative: 0.0,
                rate: f64::INFINITY,
                iterations: 0,
            });
        }

        let gravity_depth = self.conductivity.get() * time;
        let suction_storage = self.suction_storage();
        let model = self.front();
        let problem = ElapsedTime::new(gravity_depth, suction_storage);
        let bracket = problem.bracket();
        let mut logger = ResidualLogger::new("green-ampt");

        // Both bracket residuals exceed `ε·min(Ks·t, S)` in magnitude, so
        // neither endpoint can pass for the root however small `Ks·t` is.
        let config = self.config.scaled_to(gravity_depth.min(suction_storage));

        let solution = match self.method {
            RootMethod::Newton => newton::solve(
                &model,
                &problem,
                bracket,
                gravity_depth,
                &config,
                &mut logger,
            )?,
            RootMethod::Bisection => {
                bisection::solve(&model, &problem, bracket, &config, &mut logger)?
            }
        };

        match solution.status {
            Status::Converged => {}
            Status::MaxIters => {
                return Err(NumericalError::NotConverged {
                    iterations: solution.iters,
                    residual: solution.residual,
                }
                .into());
            }
            Status::StoppedByObserver => {
                return Err(NumericalError::StoppedEarly {
                    iterations: solution.iters,
                }
                .into());
            }
        }

        debug!(
            "green-ampt: t = {time} s, F = {:.9e} m in {} iterations ({} evaluations, {:?})",
            solution.x,
            solution.iters,
            logger.evaluations(),
            self.method,
        );

        Ok(Infiltration {
            cumulative: solution.x,
            rate: solution.snapshot.output.capacity,
            iterations: solution.iters,
        })
    }

    /// Solves each time in order.
    ///
    /// # Errors
    ///
    /// Returns the first error any element produces.
    pub fn cumulative_series(&self, times: &[f64]) -> Result<Vec<Infiltration>> {
        times.iter().map(|&time| self.solve(time)).collect()
    }

    fn front(&self) -> WettingFront {
        WettingFront::new(self.conductivity.get(), self.suction_storage())
    }
}

impl TryFrom<GreenAmptParameters> for GreenAmpt {
    type Error = Error;

    fn try_from(params: GreenAmptParameters) -> Result<Self> {
        Ok(Self::new(params)?)
    }
}
