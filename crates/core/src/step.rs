/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets generic time-marching solvers advance the type
/// via `derivative * delta`, where the derivative is with respect to `Delta`.
/// `Delta` is usually a time step (seconds, days) but can be any independent
/// variable.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl StepIntegrable<f64> for Vec<f64> {
    type Derivative = Vec<f64>;

    /// Steps each element by its matching derivative.
    ///
    /// Elements without a matching derivative are carried over unchanged.
    fn step(&self, derivative: Vec<f64>, delta: f64) -> Self {
        self.iter()
            .enumerate()
            .map(|(i, value)| match derivative.get(i) {
                Some(rate) => value + rate * delta,
                None => *value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_scalar_storage() {
        // 100 mm of storage gaining 8 mm/day for one day.
        let next = 100.0_f64.step(8.0, 1.0);
        assert_relative_eq!(next, 108.0);
    }

    #[test]
    fn step_profile() {
        let profile = vec![10.0, 12.0, 14.0];
        let tendency = vec![0.0, 1e-3, -2e-3];

        let next = profile.step(tendency, 3600.0);

        assert_relative_eq!(next[0], 10.0);
        assert_relative_eq!(next[1], 15.6, epsilon = 1e-12);
        assert_relative_eq!(next[2], 6.8, epsilon = 1e-12);
    }

    #[test]
    fn short_derivative_leaves_tail_unchanged() {
        let next = vec![1.0, 2.0, 3.0].step(vec![1.0], 2.0);
        assert_eq!(next, vec![3.0, 2.0, 3.0]);
    }
}
