use std::marker::PhantomData;

use pedon_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once it has emitted `limit` events.
///
/// Works with any solver whose action type implements [`CanStopEarly`].
#[derive(Debug, Clone, Copy)]
pub struct StopAfter<A> {
    limit: usize,
    seen: usize,
    _action: PhantomData<A>,
}

impl<A> StopAfter<A> {
    /// Creates an observer that stops after `limit` events.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: 0,
            _action: PhantomData,
        }
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter<A> {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}
