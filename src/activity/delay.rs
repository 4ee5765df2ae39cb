//! Timing and waiting primitives.

use super::{Activity, Status};

/// Suspends for `ticks` ticks, then terminates on the following one.
///
/// Stepped on its entry tick, `Delay::new(n)` returns `Running` exactly
/// `n` times and `Done` on the `n + 1`-th call, so the parent resumes on
/// the n-th tick after entering it. `Delay::new(0)` finishes immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delay {
    ticks: u16,
    remaining: u16,
    done: bool,
}

impl Delay {
    pub const fn new(ticks: u16) -> Self {
        Self {
            ticks,
            remaining: ticks,
            done: false,
        }
    }
}

/// Suspend exactly one tick.
pub const fn pause() -> Delay {
    Delay::new(1)
}

impl<C: ?Sized> Activity<C> for Delay {
    fn step(&mut self, _ctx: &mut C) -> Status {
        if self.done {
            return Status::Done;
        }
        if self.remaining == 0 {
            self.done = true;
            return Status::Done;
        }
        self.remaining -= 1;
        Status::Running
    }

    fn terminated(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        self.remaining = self.ticks;
        self.done = false;
    }
}

/// Suspends until `pred` holds on the context.
///
/// The default form suspends on the tick it is entered and tests the
/// predicate from the next tick on. The [`immediate`](Await::immediate)
/// form also tests it on the entry tick. Either way, execution continues
/// in the same tick the predicate is found true.
pub struct Await<C: ?Sized> {
    pred: fn(&C) -> bool,
    immediate: bool,
    entered: bool,
    done: bool,
}

impl<C: ?Sized> Await<C> {
    pub fn new(pred: fn(&C) -> bool) -> Self {
        Self {
            pred,
            immediate: false,
            entered: false,
            done: false,
        }
    }

    pub fn immediate(pred: fn(&C) -> bool) -> Self {
        Self {
            immediate: true,
            ..Self::new(pred)
        }
    }
}

impl<C: ?Sized> Activity<C> for Await<C> {
    fn step(&mut self, ctx: &mut C) -> Status {
        if self.done {
            return Status::Done;
        }
        let armed = self.entered || self.immediate;
        self.entered = true;
        if armed && (self.pred)(ctx) {
            self.done = true;
            return Status::Done;
        }
        Status::Running
    }

    fn terminated(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        self.entered = false;
        self.done = false;
    }
}
