use std::error::Error as StdError;

use thiserror::Error;

type Source = Box<dyn StdError + Send + Sync>;

/// Failure while advancing an Euler integration, tagged with the time level
/// being produced (`0` for the initial evaluation).
#[derive(Debug, Error)]
pub enum Error {
    #[error("model failed at step {step}: {source}")]
    Model {
        step: usize,
        #[source]
        source: Source,
    },

    #[error("problem failed at step {step}: {source}")]
    Problem {
        step: usize,
        #[source]
        source: Source,
    },
}

impl Error {
    /// Returns the time level at which the failure occurred.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Model { step, .. } | Self::Problem { step, .. } => *step,
        }
    }

    pub(crate) fn model<E>(step: usize) -> impl FnOnce(E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        move |err| Self::Model {
            step,
            source: Box::new(err),
        }
    }

    pub(crate) fn problem<E>(step: usize) -> impl FnOnce(E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        move |err| Self::Problem {
            step,
            source: Box::new(err),
        }
    }
}
