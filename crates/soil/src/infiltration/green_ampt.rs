use std::convert::Infallible;

use pedon_core::{DifferentiableProblem, EquationProblem, Model};

/// Wetting-front physics for one soil.
///
/// With `S = ψ·Δθ`, the depth `F` is reached after
/// `t(F) = (F − S·ln(1 + F/S)) / Ks`, at which point the soil accepts water at
/// `f(F) = Ks·(1 + S/F)`.
#[derive(Debug, Clone, Copy)]
pub(super) struct WettingFront {
    conductivity: f64,
    suction_storage: f64,
}

/// Wetting-front quantities at a trial cumulative depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FrontState {
    /// `Ks·t(F)`: the depth gravity alone would deliver in the same time.
    pub(super) gravity_depth: f64,
    /// Infiltration capacity `f(F)` in m/s.
    pub(super) capacity: f64,
}

impl WettingFront {
    pub(super) fn new(conductivity: f64, suction_storage: f64) -> Self {
        Self {
            conductivity,
            suction_storage,
        }
    }

    /// Seconds needed for the front to take in `cumulative` metres.
    pub(super) fn time_to_reach(&self, state: &FrontState) -> f64 {
        state.gravity_depth / self.conductivity
    }
}

impl Model for WettingFront {
    type Input = f64;
    type Output = FrontState;
    type Error = Infallible;

    fn call(&self, cumulative: &f64) -> Result<FrontState, Infallible> {
        let f = *cumulative;
        let s = self.suction_storage;
        Ok(FrontState {
            gravity_depth: s * log_excess(f / s),
            capacity: self.conductivity * (1.0 + s / f),
        })
    }
}

/// Returns `u − ln(1 + u)`.
///
/// For `|u| < 0.1` the difference is summed from its series
/// `u²/2 − u³/3 + u⁴/4 − …`, which keeps full relative precision where the
/// direct form cancels.
fn log_excess(u: f64) -> f64 {
    if u.abs() >= 0.1 {
        return u - u.ln_1p();
    }
    let sum = (2..=20)
        .rev()
        .fold(0.0, |acc, k| 1.0 / f64::from(k) - u * acc);
    u * u * sum
}

/// Finds the depth whose arrival time is the elapsed time.
///
/// The residual `Ks·(t(F) − t)` is in metres and increases monotonically in
/// `F` with slope `F / (F + S)`.
#[derive(Debug, Clone, Copy)]
pub(super) struct ElapsedTime {
    gravity_depth: f64,
    suction_storage: f64,
}

impl ElapsedTime {
    pub(super) fn new(gravity_depth: f64, suction_storage: f64) -> Self {
        Self {
            gravity_depth,
            suction_storage,
        }
    }

    /// Returns `[Ks·t, F_hi]`, a bracket whose residuals change sign.
    ///
    /// `F_hi` solves `F − √(S·F) = Ks·t`; since `ln(1 + x) ≤ √x` the residual
    /// there is non-negative.
    pub(super) fn bracket(&self) -> [f64; 2] {
        let s = self.suction_storage;
        let root = (s.sqrt() + (s + 4.0 * self.gravity_depth).sqrt()) / 2.0;
        [self.gravity_depth, root * root]
    }
}

impl EquationProblem<1> for ElapsedTime {
    type Input = f64;
    type Output = FrontState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _cumulative: &f64, state: &FrontState) -> Result<[f64; 1], Infallible> {
        Ok([state.gravity_depth - self.gravity_depth])
    }
}

impl DifferentiableProblem for ElapsedTime {
    fn slope(&self, cumulative: &f64, _state: &FrontState) -> Result<f64, Infallible> {
        Ok(cumulative / (cumulative + self.suction_storage))
    }
}
