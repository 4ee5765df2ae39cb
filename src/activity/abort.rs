//! Preemption: run a child until a predicate discards it.

use super::{Activity, Status};

/// How a [`WhenAbort`] terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The child terminated on its own.
    Completed,
    /// The predicate held; the child was discarded without being ticked.
    Aborted,
}

/// Wraps `child` with a per-tick abort predicate.
///
/// Each tick the predicate is evaluated before the child. If it holds,
/// the child is not ticked and the wrapper terminates with
/// [`Outcome::Aborted`]. Otherwise the child ticks and, if it finishes,
/// the wrapper terminates with [`Outcome::Completed`].
///
/// Testing starts on the tick after entry, so a classification that
/// caused the parent to enter the wrapper cannot abort it in the same
/// tick.
///
/// An aborted child is left as it was after its last tick, so the parent
/// can still read what it last produced.
pub struct WhenAbort<C: ?Sized, A> {
    pred: fn(&C) -> bool,
    child: A,
    entered: bool,
    outcome: Option<Outcome>,
}

impl<C: ?Sized, A> WhenAbort<C, A> {
    pub fn new(pred: fn(&C) -> bool, child: A) -> Self {
        Self {
            pred,
            child,
            entered: false,
            outcome: None,
        }
    }

    pub fn inner(&self) -> &A {
        &self.child
    }

    pub fn into_inner(self) -> A {
        self.child
    }

    /// `None` while running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<C: ?Sized, A: Activity<C>> Activity<C> for WhenAbort<C, A> {
    fn step(&mut self, ctx: &mut C) -> Status {
        if self.outcome.is_some() {
            return Status::Done;
        }

        let entered = core::mem::replace(&mut self.entered, true);
        if entered && (self.pred)(ctx) {
            debug!("when_abort: aborted");
            self.outcome = Some(Outcome::Aborted);
            return Status::Done;
        }

        match self.child.step(ctx) {
            Status::Running => Status::Running,
            Status::Done => {
                self.outcome = Some(Outcome::Completed);
                Status::Done
            }
        }
    }

    fn terminated(&self) -> bool {
        self.outcome.is_some()
    }

    fn reset(&mut self) {
        self.child.reset();
        self.entered = false;
        self.outcome = None;
    }
}
