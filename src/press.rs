//! Press classification: none / short / long / double.
//!
//! After a press edge the recognizer races two weak activities:
//!
//! - a [`Delay`] of [`PRESS_TIMEOUT_TICKS`]
//! - a [`DetectReleasePress`] awaiting a release and then a re-press
//!
//! Whichever finishes first ends the race. A re-press means double, a
//! release alone means short, and neither means long. The classification
//! is visible in [`Frame::press`] for exactly one tick.

use crate::activity::{pause, Activity, Await, Branch, Delay, Outcome, Par, Status, WhenAbort};
use crate::config::PRESS_TIMEOUT_TICKS;
use crate::frame::Frame;

/// Classification of one button interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    #[default]
    None,
    Short,
    Long,
    Double,
}

impl Press {
    pub fn is_any(self) -> bool {
        self != Press::None
    }

    pub fn is_long_or_double(self) -> bool {
        matches!(self, Press::Long | Press::Double)
    }
}

fn primary_pressed(ctx: &Frame) -> bool {
    ctx.primary.pressed
}

fn primary_released(ctx: &Frame) -> bool {
    ctx.primary.released
}

fn secondary_pressed(ctx: &Frame) -> bool {
    ctx.secondary.pressed
}

fn any_pressed(ctx: &Frame) -> bool {
    ctx.primary.pressed || ctx.secondary.pressed
}

/// Awaits a release of the primary button, then a re-press.
///
/// Both awaits start testing on the tick after they are reached.
pub struct DetectReleasePress {
    release: Await<Frame>,
    press: Await<Frame>,
}

impl DetectReleasePress {
    pub fn new() -> Self {
        Self {
            release: Await::new(primary_released),
            press: Await::new(primary_pressed),
        }
    }

    pub fn released(&self) -> bool {
        self.release.terminated()
    }

    pub fn repressed(&self) -> bool {
        self.press.terminated()
    }
}

impl Default for DetectReleasePress {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for DetectReleasePress {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        if self.release.step(ctx).is_running() {
            return Status::Running;
        }
        self.press.step(ctx)
    }

    fn terminated(&self) -> bool {
        self.press.terminated()
    }

    fn reset(&mut self) {
        self.release.reset();
        self.press.reset();
    }
}

/// Timeout racing the release/re-press detector.
pub type PressRace = Par<(Branch<Delay>, Branch<DetectReleasePress>)>;

fn new_race() -> PressRace {
    Par::new((
        Branch::weak(Delay::new(PRESS_TIMEOUT_TICKS)),
        Branch::weak(DetectReleasePress::new()),
    ))
}

/// Classifies a finished race from the detector's flags.
///
/// The flags decide even when both branches end in the same tick: a
/// re-press seen on the timeout tick still counts as double.
pub fn classify(race: &PressRace) -> Press {
    let detector = race.branches().1.activity();
    if detector.repressed() {
        Press::Double
    } else if detector.released() {
        Press::Short
    } else {
        Press::Long
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecognizerState {
    /// Waiting for a press edge; publishes `Press::None`.
    Idle,
    /// Timeout and detector are racing.
    Racing,
    /// Classification published; pausing one tick before idling again.
    Settled,
}

/// Single-button press recognizer. Never terminates.
///
/// The idle await is immediate, so a press on the tick right after a
/// classification starts the next race.
pub struct PressRecognizer {
    state: RecognizerState,
    idle: Await<Frame>,
    race: PressRace,
    settle: Delay,
}

impl PressRecognizer {
    pub fn new() -> Self {
        Self {
            state: RecognizerState::Idle,
            idle: Await::immediate(primary_pressed),
            race: new_race(),
            settle: pause(),
        }
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }
}

impl Default for PressRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for PressRecognizer {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match self.state {
                RecognizerState::Idle => {
                    ctx.press = Press::None;
                    if self.idle.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.race = new_race();
                    self.state = RecognizerState::Racing;
                }
                RecognizerState::Racing => {
                    if self.race.step(ctx).is_running() {
                        return Status::Running;
                    }
                    ctx.press = classify(&self.race);
                    debug!("press: {}", ctx.press);
                    self.settle = pause();
                    self.state = RecognizerState::Settled;
                }
                RecognizerState::Settled => {
                    if self.settle.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.idle = Await::immediate(primary_pressed);
                    self.state = RecognizerState::Idle;
                }
            }
        }
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

fn new_guarded_race() -> WhenAbort<Frame, PressRace> {
    WhenAbort::new(secondary_pressed, new_race())
}

/// Two-button variant: any press of the secondary button is a double.
///
/// A secondary press while idle publishes `Double` right away, even when
/// the primary is pressed in the same tick. A secondary press during a
/// primary race aborts the race and publishes `Double` in that tick.
pub struct DualPressRecognizer {
    state: RecognizerState,
    idle: Await<Frame>,
    race: WhenAbort<Frame, PressRace>,
    settle: Delay,
}

impl DualPressRecognizer {
    pub fn new() -> Self {
        Self {
            state: RecognizerState::Idle,
            idle: Await::immediate(any_pressed),
            race: new_guarded_race(),
            settle: pause(),
        }
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    fn publish(&mut self, ctx: &mut Frame, press: Press) {
        ctx.press = press;
        debug!("press (dual): {}", press);
        self.settle = pause();
        self.state = RecognizerState::Settled;
    }
}

impl Default for DualPressRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for DualPressRecognizer {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match self.state {
                RecognizerState::Idle => {
                    ctx.press = Press::None;
                    if self.idle.step(ctx).is_running() {
                        return Status::Running;
                    }
                    if ctx.secondary.pressed {
                        self.publish(ctx, Press::Double);
                    } else {
                        self.race = new_guarded_race();
                        self.state = RecognizerState::Racing;
                    }
                }
                RecognizerState::Racing => {
                    if self.race.step(ctx).is_running() {
                        return Status::Running;
                    }
                    let press = match self.race.outcome() {
                        Some(Outcome::Aborted) => Press::Double,
                        _ => classify(self.race.inner()),
                    };
                    self.publish(ctx, press);
                }
                RecognizerState::Settled => {
                    if self.settle.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.idle = Await::immediate(any_pressed);
                    self.state = RecognizerState::Idle;
                }
            }
        }
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
