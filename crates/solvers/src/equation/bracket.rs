use std::cmp::Ordering;

use thiserror::Error;

use super::Config;

/// Why a pair of endpoints cannot bracket a root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints coincide")]
    ZeroWidth,

    #[error("residuals at both bracket endpoints have the same sign")]
    NoSignChange,
}

/// Which side of zero a residual falls on.
///
/// A zero residual counts as [`Sign::Positive`]; NaN counts as
/// [`Sign::Negative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        match value.partial_cmp(&0.0) {
            Some(Ordering::Greater | Ordering::Equal) => Sign::Positive,
            Some(Ordering::Less) | None => Sign::Negative,
        }
    }
}

/// An interval known to contain a sign change.
///
/// Only the sign at the low end is stored; the high end always has the
/// opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
    lo_sign: Sign,
}

impl Bracket {
    /// Pairs sorted endpoints with the residual signs observed at them.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NoSignChange`] when both signs agree.
    pub(super) fn new(bounds: Bounds, [lo_sign, hi_sign]: [Sign; 2]) -> Result<Self, BracketError> {
        if lo_sign == hi_sign {
            return Err(BracketError::NoSignChange);
        }
        let [lo, hi] = bounds.0;
        Ok(Self { lo, hi, lo_sign })
    }

    /// Returns `[lo, hi]`.
    #[must_use]
    pub fn endpoints(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True for points inside the open interval `(lo, hi)`.
    #[must_use]
    pub fn contains_strictly(&self, x: f64) -> bool {
        x > self.lo && x < self.hi
    }

    /// True once the interval is narrower than the x tolerances at its midpoint.
    #[must_use]
    pub fn is_x_converged(&self, config: &Config) -> bool {
        config.is_x_converged(self.width(), self.midpoint())
    }

    /// Moves whichever end shares `sign` to `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.lo_sign {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}

/// Finite, distinct endpoints sorted low to high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds([f64; 2]);

impl Bounds {
    /// Sorts the endpoints, rejecting non-finite or coincident ones.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] or [`BracketError::ZeroWidth`].
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(BracketError::NonFinite);
        }
        match a.partial_cmp(&b) {
            Some(Ordering::Less) => Ok(Self([a, b])),
            Some(Ordering::Greater) => Ok(Self([b, a])),
            _ => Err(BracketError::ZeroWidth),
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.0[0]
    }

    pub(super) fn right(&self) -> f64 {
        self.0[1]
    }
}
