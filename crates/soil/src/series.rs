use std::ops::Deref;

use crate::error::InputError;

/// A named, non-empty sequence of finite forcing values.
///
/// Used for daily precipitation and evapotranspiration and for per-step
/// surface temperatures. The length of a series sets the simulation horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingSeries {
    name: &'static str,
    values: Vec<f64>,
}

impl DrivingSeries {
    /// Validates and wraps a series of values.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptySeries`] if `values` is empty and
    /// [`InputError::NonFinite`] at the first NaN or infinite value.
    pub fn new(name: &'static str, values: impl Into<Vec<f64>>) -> Result<Self, InputError> {
        let values = values.into();
        if values.is_empty() {
            return Err(InputError::EmptySeries { name });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { name, index, value });
        }
        Ok(Self { name, values })
    }

    /// Returns the name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for DrivingSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for DrivingSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
