use crate::equation::Evaluation;

/// How an iterate was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The caller's initial guess.
    Guess,
    /// A Newton step from the previous iterate.
    Newton,
    /// The bracket midpoint, used when a Newton step was rejected.
    Bisection,
}

/// Iteration event emitted by the Newton solver after each evaluation.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket in effect when the iterate was evaluated.
    pub bracket: [f64; 2],
    /// Evaluation at the iterate.
    pub eval: &'a Evaluation<I, O, 1>,
    /// Residual slope at the iterate.
    pub slope: f64,
    /// How the iterate was chosen.
    pub step: StepKind,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }
}
