//! Unit tests for the activity core.
//!
//! A recording context and a step-counting activity make the tick
//! schedule of each combinator observable.

use super::*;

/// Test context: an abort/await flag plus the order in which children ran.
#[derive(Default)]
struct Ctx {
    flag: bool,
    trace: Vec<&'static str>,
}

impl Ctx {
    fn drain(&mut self) -> Vec<&'static str> {
        core::mem::take(&mut self.trace)
    }
}

fn flag(ctx: &Ctx) -> bool {
    ctx.flag
}

/// Logs its name each tick it is stepped; terminates on step `finish_after`.
struct Counter {
    name: &'static str,
    finish_after: Option<u32>,
    steps: u32,
}

impl Counter {
    fn finishing(name: &'static str, after: u32) -> Self {
        Self {
            name,
            finish_after: Some(after),
            steps: 0,
        }
    }

    fn endless(name: &'static str) -> Self {
        Self {
            name,
            finish_after: None,
            steps: 0,
        }
    }
}

impl Activity<Ctx> for Counter {
    fn step(&mut self, ctx: &mut Ctx) -> Status {
        if self.terminated() {
            return Status::Done;
        }
        self.steps += 1;
        ctx.trace.push(self.name);
        if self.terminated() {
            Status::Done
        } else {
            Status::Running
        }
    }

    fn terminated(&self) -> bool {
        self.finish_after == Some(self.steps)
    }

    fn reset(&mut self) {
        self.steps = 0;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Delay / Pause Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn delay_runs_n_times_then_finishes() {
    let mut delay = Delay::new(2);
    let ctx = &mut ();
    assert_eq!(delay.step(ctx), Status::Running);
    assert_eq!(delay.step(ctx), Status::Running);
    assert_eq!(delay.step(ctx), Status::Done);
    assert_eq!(delay.step(ctx), Status::Done);
    assert!(Activity::<()>::terminated(&delay));
}

#[test]
fn zero_delay_finishes_on_entry() {
    let mut delay = Delay::new(0);
    assert_eq!(delay.step(&mut ()), Status::Done);
}

#[test]
fn pause_suspends_exactly_one_tick() {
    let mut p = pause();
    assert_eq!(p.step(&mut ()), Status::Running);
    assert_eq!(p.step(&mut ()), Status::Done);
}

#[test]
fn delay_reset_rewinds() {
    let mut delay = Delay::new(1);
    delay.step(&mut ());
    delay.step(&mut ());
    Activity::<()>::reset(&mut delay);
    assert!(!Activity::<()>::terminated(&delay));
    assert_eq!(delay.step(&mut ()), Status::Running);
    assert_eq!(delay.step(&mut ()), Status::Done);
}

// ═══════════════════════════════════════════════════════════════════════════
// Await Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn await_ignores_predicate_on_entry_tick() {
    let mut ctx = Ctx {
        flag: true,
        ..Ctx::default()
    };
    let mut wait = Await::new(flag);
    assert_eq!(wait.step(&mut ctx), Status::Running);
    assert_eq!(wait.step(&mut ctx), Status::Done);
}

#[test]
fn immediate_await_tests_entry_tick() {
    let mut ctx = Ctx {
        flag: true,
        ..Ctx::default()
    };
    let mut wait = Await::immediate(flag);
    assert_eq!(wait.step(&mut ctx), Status::Done);
}

#[test]
fn await_keeps_waiting_while_predicate_is_false() {
    let mut ctx = Ctx::default();
    let mut wait = Await::new(flag);
    for _ in 0..5 {
        assert_eq!(wait.step(&mut ctx), Status::Running);
    }
    ctx.flag = true;
    assert_eq!(wait.step(&mut ctx), Status::Done);
    ctx.flag = false;
    assert_eq!(wait.step(&mut ctx), Status::Done);
}

// ═══════════════════════════════════════════════════════════════════════════
// Par Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn par_ticks_branches_in_declaration_order() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::strong(Counter::endless("a")),
        Branch::strong(Counter::endless("b")),
        Branch::strong(Counter::endless("c")),
    ));
    par.step(&mut ctx);
    par.step(&mut ctx);
    assert_eq!(ctx.drain(), vec!["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn weak_branch_ends_block_in_same_tick() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::weak(Counter::finishing("a", 2)),
        Branch::strong(Counter::endless("b")),
    ));
    assert_eq!(par.step(&mut ctx), Status::Running);
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(par.outcome(), JoinOutcome::WeakWon(0));
    // Siblings declared after the winner still ran in the winning tick.
    assert_eq!(ctx.drain(), vec!["a", "b", "a", "b"]);

    // Nothing is ticked once the block has joined.
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert!(ctx.drain().is_empty());
    assert_eq!(par.branches().1.activity().steps, 2);
}

#[test]
fn strong_branches_rendezvous() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::strong(Counter::finishing("a", 1)),
        Branch::strong(Counter::finishing("b", 3)),
    ));
    assert_eq!(par.step(&mut ctx), Status::Running);
    assert!(par.branches().0.is_done());
    assert_eq!(par.step(&mut ctx), Status::Running);
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(par.outcome(), JoinOutcome::AllDone);
    // A finished strong branch is not ticked again.
    assert_eq!(ctx.drain(), vec!["a", "b", "b", "b"]);
}

#[test]
fn simultaneous_weak_terminations_report_earliest_declared() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::strong(Counter::endless("s")),
        Branch::weak(Counter::finishing("a", 2)),
        Branch::weak(Counter::finishing("b", 2)),
    ));
    par.step(&mut ctx);
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(par.outcome(), JoinOutcome::WeakWon(1));
    assert!(par.branches().2.is_done());
}

#[test]
fn finished_strong_branch_does_not_end_a_race() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::strong(Counter::finishing("s", 1)),
        Branch::weak(Counter::finishing("w", 3)),
    ));
    assert_eq!(par.step(&mut ctx), Status::Running);
    assert_eq!(par.step(&mut ctx), Status::Running);
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(par.outcome(), JoinOutcome::WeakWon(1));
}

#[test]
fn weak_winner_on_entry_tick() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::weak(Counter::finishing("a", 1)),
        Branch::weak(Counter::endless("b")),
        Branch::weak(Counter::endless("c")),
        Branch::weak(Counter::endless("d")),
    ));
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(par.outcome(), JoinOutcome::WeakWon(0));
    assert_eq!(ctx.drain(), vec!["a", "b", "c", "d"]);
}

#[test]
fn par_reset_reenters_every_branch() {
    let mut ctx = Ctx::default();
    let mut par = Par::new((
        Branch::weak(Counter::finishing("a", 1)),
        Branch::strong(Counter::endless("b")),
    ));
    par.step(&mut ctx);
    assert!(Activity::<Ctx>::terminated(&par));

    Activity::<Ctx>::reset(&mut par);
    assert_eq!(par.outcome(), JoinOutcome::Running);
    assert!(!par.branches().0.is_done());
    assert_eq!(par.branches().1.activity().steps, 0);
    ctx.drain();
    assert_eq!(par.step(&mut ctx), Status::Done);
    assert_eq!(ctx.drain(), vec!["a", "b"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// WhenAbort Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn abort_is_not_tested_on_entry_tick() {
    let mut ctx = Ctx {
        flag: true,
        ..Ctx::default()
    };
    let mut guarded = WhenAbort::new(flag, Counter::endless("child"));
    assert_eq!(guarded.step(&mut ctx), Status::Running);
    assert_eq!(guarded.step(&mut ctx), Status::Done);
    assert_eq!(guarded.outcome(), Some(Outcome::Aborted));
    // The child ran on the entry tick only.
    assert_eq!(ctx.drain(), vec!["child"]);
}

#[test]
fn aborted_child_receives_no_further_ticks() {
    let mut ctx = Ctx::default();
    let mut guarded = WhenAbort::new(flag, Counter::endless("child"));
    guarded.step(&mut ctx);
    guarded.step(&mut ctx);
    ctx.flag = true;
    assert_eq!(guarded.step(&mut ctx), Status::Done);
    ctx.flag = false;
    for _ in 0..3 {
        assert_eq!(guarded.step(&mut ctx), Status::Done);
    }
    assert_eq!(guarded.inner().steps, 2);
    assert_eq!(ctx.drain().len(), 2);
}

#[test]
fn child_completion_is_reported() {
    let mut ctx = Ctx::default();
    let mut guarded = WhenAbort::new(flag, Counter::finishing("child", 2));
    assert_eq!(guarded.step(&mut ctx), Status::Running);
    assert_eq!(guarded.outcome(), None);
    assert_eq!(guarded.step(&mut ctx), Status::Done);
    assert_eq!(guarded.outcome(), Some(Outcome::Completed));
}

#[test]
fn abort_wins_over_completion_in_same_tick() {
    let mut ctx = Ctx::default();
    let mut guarded = WhenAbort::new(flag, Counter::finishing("child", 2));
    guarded.step(&mut ctx);
    ctx.flag = true;
    assert_eq!(guarded.step(&mut ctx), Status::Done);
    assert_eq!(guarded.outcome(), Some(Outcome::Aborted));
    assert_eq!(guarded.into_inner().steps, 1);
}

#[test]
fn abort_reset_rearms_the_entry_tick() {
    let mut ctx = Ctx {
        flag: true,
        ..Ctx::default()
    };
    let mut guarded = WhenAbort::new(flag, Counter::endless("child"));
    guarded.step(&mut ctx);
    guarded.step(&mut ctx);
    Activity::<Ctx>::reset(&mut guarded);
    assert_eq!(guarded.outcome(), None);
    assert_eq!(guarded.inner().steps, 0);
    assert_eq!(guarded.step(&mut ctx), Status::Running);
}

#[test]
fn abort_around_par_stops_every_branch() {
    let mut ctx = Ctx::default();
    let mut guarded = WhenAbort::new(
        flag,
        Par::new((
            Branch::strong(Counter::endless("a")),
            Branch::strong(Counter::endless("b")),
        )),
    );
    guarded.step(&mut ctx);
    ctx.flag = true;
    guarded.step(&mut ctx);
    guarded.step(&mut ctx);
    assert_eq!(ctx.drain(), vec!["a", "b"]);
    assert_eq!(guarded.inner().outcome(), JoinOutcome::Running);
}
