use std::error::Error as StdError;

use pedon_core::constraint::{Constrained, Constraint, ConstraintError};
use pedon_solvers::{equation, transient::euler};
use thiserror::Error;

/// Result type returned by every simulator in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the soil simulators.
///
/// Both variants abort the call with no partial result.
/// Stability problems in the heat simulator are not errors; they are reported
/// on the returned profile.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("numerical failure: {0}")]
    Numerical(#[from] NumericalError),
}

/// A rejected parameter or driving series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{name} series is empty")]
    EmptySeries { name: &'static str },

    #[error("{name} series has non-finite value {value} at index {index}")]
    NonFinite {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("`{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error(
        "precipitation has {precipitation} values but evapotranspiration has {evapotranspiration}"
    )]
    LengthMismatch {
        precipitation: usize,
        evapotranspiration: usize,
    },

    #[error("`{name}` = {value} is out of range: {source}")]
    Parameter {
        name: &'static str,
        value: f64,
        source: ConstraintError,
    },

    #[error("field capacity {field_capacity} must exceed wilting point {wilting_point}")]
    MoistureLimits {
        field_capacity: f64,
        wilting_point: f64,
    },

    #[error("initial moisture {initial} exceeds field capacity {field_capacity}")]
    InitialAboveFieldCapacity { initial: f64, field_capacity: f64 },

    #[error("saturated moisture {saturated} must exceed initial moisture {initial}")]
    NonPositiveMoistureDeficit { initial: f64, saturated: f64 },

    #[error("elapsed time must not be negative, got {time} s")]
    NegativeTime { time: f64 },

    #[error("a heat profile needs at least 3 nodes, got {nodes}")]
    TooFewNodes { nodes: usize },

    #[error("initial profile has {actual} temperatures for {expected} nodes")]
    ProfileLength { expected: usize, actual: usize },
}

/// A solver failed to produce a usable result.
#[derive(Debug, Error)]
pub enum NumericalError {
    #[error("no convergence after {iterations} iterations (residual {residual:e})")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("stopped by an observer after {iterations} iterations")]
    StoppedEarly { iterations: usize },

    #[error("solver error: {0}")]
    Solver(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<equation::Error> for NumericalError {
    fn from(err: equation::Error) -> Self {
        Self::Solver(Box::new(err))
    }
}

impl From<euler::Error> for NumericalError {
    fn from(err: euler::Error) -> Self {
        Self::Solver(Box::new(err))
    }
}

impl From<equation::Error> for Error {
    fn from(err: equation::Error) -> Self {
        Self::Numerical(err.into())
    }
}

impl From<euler::Error> for Error {
    fn from(err: euler::Error) -> Self {
        Self::Numerical(err.into())
    }
}

/// Checks a named scalar parameter against a constraint.
///
/// Infinite values are rejected before the constraint is consulted.
pub(crate) fn constrained<C: Constraint<f64>>(
    name: &'static str,
    value: f64,
) -> std::result::Result<Constrained<f64, C>, InputError> {
    if value.is_infinite() {
        return Err(InputError::NonFiniteParameter { name, value });
    }
    Constrained::new(value).map_err(|source| InputError::Parameter {
        name,
        value,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pedon_core::constraint::{StrictlyPositive, UnitInterval};

    #[test]
    fn constrained_accepts_valid_values() {
        let depth = constrained::<StrictlyPositive>("root_depth", 0.5).unwrap();
        assert_eq!(depth.get(), 0.5);
    }

    #[test]
    fn constrained_names_the_parameter() {
        let err = constrained::<UnitInterval>("field_capacity", 1.2).unwrap_err();
        assert_eq!(
            err,
            InputError::Parameter {
                name: "field_capacity",
                value: 1.2,
                source: ConstraintError::AboveMaximum,
            }
        );
        assert!(err.to_string().contains("field_capacity"));
    }

    #[test]
    fn constrained_rejects_infinity_before_the_constraint() {
        let err = constrained::<StrictlyPositive>("diffusivity", f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            InputError::NonFiniteParameter {
                name: "diffusivity",
                ..
            }
        ));
    }

    #[test]
    fn constrained_rejects_nan() {
        let err = constrained::<StrictlyPositive>("time_step", f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            InputError::Parameter {
                source: ConstraintError::NotANumber,
                ..
            }
        ));
    }

    #[test]
    fn solver_errors_are_numerical() {
        let err: Error = equation::Error::NoSuccessfulEvaluation.into();
        assert!(matches!(err, Error::Numerical(NumericalError::Solver(_))));
    }
}
