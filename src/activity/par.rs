//! Concurrency: a fixed set of children ticked in lock-step.

use super::{Activity, Status};

/// Join policy of one branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Join {
    /// Termination ends the whole block and discards the siblings.
    Weak,
    /// The block waits for this branch (unless a weak one ends first).
    Strong,
}

/// State of a [`Par`] block after its latest tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoinOutcome {
    Running,
    /// A weak branch terminated; carries the earliest-declared one's index.
    WeakWon(usize),
    /// Every branch terminated and none of them was weak.
    AllDone,
}

/// One child of a [`Par`] block together with its join policy.
pub struct Branch<A> {
    activity: A,
    join: Join,
    done: bool,
}

impl<A> Branch<A> {
    pub fn weak(activity: A) -> Self {
        Self {
            activity,
            join: Join::Weak,
            done: false,
        }
    }

    pub fn strong(activity: A) -> Self {
        Self {
            activity,
            join: Join::Strong,
            done: false,
        }
    }

    pub fn activity(&self) -> &A {
        &self.activity
    }

    pub fn activity_mut(&mut self) -> &mut A {
        &mut self.activity
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Ticks the child if it still runs. Returns `true` if it terminated
    /// during this call.
    fn tick<C: ?Sized>(&mut self, ctx: &mut C) -> bool
    where
        A: Activity<C>,
    {
        if self.done {
            return false;
        }
        self.done = self.activity.step(ctx).is_done();
        self.done
    }

    fn reset<C: ?Sized>(&mut self)
    where
        A: Activity<C>,
    {
        Activity::<C>::reset(&mut self.activity);
        self.done = false;
    }
}

/// A declaration-ordered tuple of [`Branch`]es.
///
/// Implemented for tuples of two to four branches.
pub trait Branches<C: ?Sized> {
    /// Ticks every running branch once, in declaration order, and folds
    /// the results into a join outcome.
    fn tick_all(&mut self, ctx: &mut C) -> JoinOutcome;

    fn reset_all(&mut self);
}

macro_rules! impl_branches {
    ($($A:ident $idx:tt),+) => {
        impl<C: ?Sized, $($A: Activity<C>),+> Branches<C> for ($(Branch<$A>,)+) {
            fn tick_all(&mut self, ctx: &mut C) -> JoinOutcome {
                let mut trigger = None;
                let mut all_done = true;
                $(
                    if self.$idx.tick(ctx) && self.$idx.join == Join::Weak && trigger.is_none() {
                        trigger = Some($idx);
                    }
                    all_done &= self.$idx.done;
                )+
                match trigger {
                    Some(index) => JoinOutcome::WeakWon(index),
                    None if all_done => JoinOutcome::AllDone,
                    None => JoinOutcome::Running,
                }
            }

            fn reset_all(&mut self) {
                $( self.$idx.reset::<C>(); )+
            }
        }
    };
}

impl_branches!(A0 0, A1 1);
impl_branches!(A0 0, A1 1, A2 2);
impl_branches!(A0 0, A1 1, A2 2, A3 3);

/// Concurrency block over a tuple of branches.
///
/// All branches are entered on the first tick and every running branch
/// is ticked on every tick, in declaration order, before the block
/// reports its own status. A weak termination ends the block in that
/// same tick; the remaining branches get no further ticks.
///
/// ```
/// use sevenseg_calc::activity::{Activity, Branch, Delay, JoinOutcome, Par};
///
/// let mut race = Par::new((Branch::weak(Delay::new(3)), Branch::weak(Delay::new(1))));
/// assert!(race.step(&mut ()).is_running());
/// assert!(race.step(&mut ()).is_done());
/// assert_eq!(race.outcome(), JoinOutcome::WeakWon(1));
/// ```
pub struct Par<T> {
    branches: T,
    outcome: JoinOutcome,
}

impl<T> Par<T> {
    pub fn new(branches: T) -> Self {
        Self {
            branches,
            outcome: JoinOutcome::Running,
        }
    }

    pub fn branches(&self) -> &T {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut T {
        &mut self.branches
    }

    pub fn outcome(&self) -> JoinOutcome {
        self.outcome
    }
}

impl<C: ?Sized, T: Branches<C>> Activity<C> for Par<T> {
    fn step(&mut self, ctx: &mut C) -> Status {
        if self.outcome != JoinOutcome::Running {
            return Status::Done;
        }
        self.outcome = self.branches.tick_all(ctx);
        match self.outcome {
            JoinOutcome::Running => Status::Running,
            outcome => {
                debug!("par: joined {}", outcome);
                Status::Done
            }
        }
    }

    fn terminated(&self) -> bool {
        self.outcome != JoinOutcome::Running
    }

    fn reset(&mut self) {
        Branches::<C>::reset_all(&mut self.branches);
        self.outcome = JoinOutcome::Running;
    }
}
