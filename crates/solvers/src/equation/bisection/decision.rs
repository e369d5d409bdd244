use crate::equation::{Error, Sign};

use super::Action;

/// Control flow outcome for a single evaluation.
#[derive(Debug)]
pub(super) enum Decision {
    Continue(Sign),
    StopEarly,
    Error(Error),
}

impl Decision {
    /// Combines the observer action with the residual outcome.
    ///
    /// An observer action always wins over the evaluation.
    pub(super) fn new(action: Option<Action>, residual: Result<f64, Error>) -> Self {
        match action {
            Some(Action::AssumeResidualSign(sign)) => Decision::Continue(sign),
            Some(Action::StopEarly) => Decision::StopEarly,
            None => match residual {
                Ok(value) => Decision::Continue(Sign::of(value)),
                Err(error) => Decision::Error(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err() -> Error {
        Error::Model(Box::new(std::fmt::Error))
    }

    #[test]
    fn uses_residual_sign_without_action() {
        let decision = Decision::new(None, Ok(-0.1));
        assert!(matches!(decision, Decision::Continue(Sign::Negative)));
    }

    #[test]
    fn assumed_sign_recovers_failed_eval() {
        let decision = Decision::new(Some(Action::assume_positive()), Err(err()));
        assert!(matches!(decision, Decision::Continue(Sign::Positive)));
    }

    #[test]
    fn assumed_sign_overrides_residual() {
        let decision = Decision::new(Some(Action::assume_negative()), Ok(0.1));
        assert!(matches!(decision, Decision::Continue(Sign::Negative)));
    }

    #[test]
    fn stop_early_ignores_eval() {
        assert!(matches!(
            Decision::new(Some(Action::StopEarly), Ok(1.0)),
            Decision::StopEarly
        ));
        assert!(matches!(
            Decision::new(Some(Action::StopEarly), Err(err())),
            Decision::StopEarly
        ));
    }

    #[test]
    fn failed_eval_without_action_is_an_error() {
        assert!(matches!(Decision::new(None, Err(err())), Decision::Error(_)));
    }
}
