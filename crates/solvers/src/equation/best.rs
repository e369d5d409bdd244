use super::{Error, Evaluation, Solution, Status};

/// Tracks the evaluation with the smallest residual magnitude seen so far.
///
/// Ties keep the earlier evaluation, so the reported root does not depend on
/// evaluation noise at the tolerance floor.
pub(super) struct Best<I, O> {
    eval: Option<Evaluation<I, O, 1>>,
}

impl<I, O> Best<I, O> {
    pub(super) fn empty() -> Self {
        Self { eval: None }
    }

    /// Replaces the stored evaluation if `eval` has a strictly smaller residual.
    pub(super) fn update(&mut self, eval: Evaluation<I, O, 1>) {
        let improves = match self.eval.as_ref() {
            Some(best) => eval.residuals[0].abs() < best.residuals[0].abs(),
            None => true,
        };
        if improves {
            self.eval = Some(eval);
        }
    }

    /// Returns true if the best residual meets the tolerance.
    pub(super) fn is_residual_converged(&self, residual_tol: f64) -> bool {
        self.eval
            .as_ref()
            .is_some_and(|eval| eval.residuals[0].abs() <= residual_tol)
    }

    /// Finalizes the solve using the best available evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if nothing was stored.
    pub(super) fn finish(self, status: Status, iters: usize) -> Result<Solution<I, O>, Error> {
        let eval = self.eval.ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(Solution {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
        })
    }
}
