mod equation;
mod ode;

pub use equation::{DifferentiableProblem, EquationProblem};
pub use ode::OdeProblem;
