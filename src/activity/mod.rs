//! Tick-driven cooperative activities.
//!
//! An activity is a resumable piece of sequential logic, written as an
//! explicit state machine. Each tick its parent calls [`Activity::step`].
//! The activity runs from its resumption point until it either suspends
//! (returns [`Status::Running`]) or terminates (returns [`Status::Done`]).
//!
//! ## Building blocks
//!
//! - [`Delay`] / [`pause`]: suspend for a fixed number of ticks
//! - [`Await`]: suspend until a predicate on the context holds
//! - [`Par`] + [`Branch`]: tick a fixed set of children in lock-step,
//!   joined weakly (race) or strongly (rendezvous)
//! - [`WhenAbort`]: discard a child the tick a predicate holds
//!
//! `run(child)` needs no type of its own: a parent keeps the child as a
//! field, steps it from its own `step`, and continues in the same tick
//! once the child reports `Done`.

mod abort;
mod delay;
mod par;

#[cfg(test)]
mod tests;

pub use abort::{Outcome, WhenAbort};
pub use delay::{pause, Await, Delay};
pub use par::{Branch, Branches, Join, JoinOutcome, Par};

/// Result of stepping an activity for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Suspended; wants to be stepped again next tick.
    Running,
    /// Terminated this tick (or earlier).
    Done,
}

impl Status {
    pub fn is_done(self) -> bool {
        self == Status::Done
    }

    pub fn is_running(self) -> bool {
        self == Status::Running
    }
}

/// Common interface of every activity, generic over the per-tick context.
pub trait Activity<C: ?Sized> {
    /// Advance by one tick.
    ///
    /// Once `Done` has been returned, further calls keep returning `Done`
    /// without side effects until [`reset`](Activity::reset).
    fn step(&mut self, ctx: &mut C) -> Status;

    /// `true` once the activity has terminated.
    fn terminated(&self) -> bool;

    /// Rewind to the initial resumption point, as if never entered.
    fn reset(&mut self);
}
