use std::convert::Infallible;

use approx::assert_relative_eq;

use pedon_core::{DifferentiableProblem, EquationProblem, Model};

use super::{Action, Event, StepKind, solve, solve_unobserved};
use crate::equation::{BracketError, Config, Error, Status};

/// Evaluates `x²`.
struct Square;

impl Model for Square {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x * x)
    }
}

/// Drives `x²` to a target, with slope `2x`.
struct SquareTarget(f64);

impl EquationProblem<1> for SquareTarget {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.0])
    }
}

impl DifferentiableProblem for SquareTarget {
    fn slope(&self, input: &f64, _output: &f64) -> Result<f64, Self::Error> {
        Ok(2.0 * input)
    }
}

#[test]
fn converges_from_guess_in_few_iterations() {
    let solution = solve_unobserved(&Square, &SquareTarget(2.0), [0.0, 4.0], 1.0, &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-14);
    assert!(solution.iters <= 8, "took {} iterations", solution.iters);
}

#[test]
fn zero_slope_falls_back_to_bisection() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        steps.push(event.step);
        None
    };

    // Slope is zero at the guess, so the second iterate must be a bisection.
    let solution = solve(
        &Square,
        &SquareTarget(4.0),
        [-1.0, 3.0],
        0.0,
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-12);
    assert_eq!(steps[0], StepKind::Guess);
    assert_eq!(steps[1], StepKind::Bisection);
    assert!(steps.contains(&StepKind::Newton));
}

#[test]
fn guess_outside_bracket_starts_at_midpoint() {
    let mut first = None;
    let observer = |event: &Event<'_, f64, f64>| {
        first.get_or_insert((event.x(), event.step));
        None
    };

    solve(
        &Square,
        &SquareTarget(2.0),
        [0.0, 4.0],
        10.0,
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert_eq!(first, Some((2.0, StepKind::Bisection)));
}

#[test]
fn observer_can_stop_iteration() {
    let observer = |event: &Event<'_, f64, f64>| (event.iter == 2).then_some(Action::StopEarly);

    let solution = solve(
        &Square,
        &SquareTarget(2.0),
        [0.0, 4.0],
        3.5,
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
}

#[test]
fn exhausted_budget_reports_max_iters() {
    let config = Config::new(1, 0.0, 0.0, 0.0).unwrap();

    let solution = solve_unobserved(&Square, &SquareTarget(2.0), [0.0, 4.0], 3.5, &config)
        .expect("should return best so far");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
}

#[test]
fn rejects_bad_guess_and_bracket() {
    let config = Config::default();

    let result = solve_unobserved(&Square, &SquareTarget(2.0), [0.0, 4.0], f64::NAN, &config);
    assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));

    let result = solve_unobserved(&Square, &SquareTarget(2.0), [2.0, 4.0], 3.0, &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange))
    ));
}

#[test]
fn repeated_solves_are_bit_identical() {
    let config = Config::default();
    let a = solve_unobserved(&Square, &SquareTarget(7.0), [0.0, 7.0], 0.5, &config).unwrap();
    let b = solve_unobserved(&Square, &SquareTarget(7.0), [0.0, 7.0], 0.5, &config).unwrap();

    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.iters, b.iters);
}
