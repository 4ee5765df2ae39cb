//! Calculator session state machine.
//!
//! One session runs: idle animation → first operand → operator → second
//! operand → result (or error) presentation, then starts over. Every
//! phase is a child activity; the phases that wait for the user are
//! wrapped in [`WhenAbort`] keyed on the press that ends them.
//!
//! A phase that ends hands over within the same tick, so the next phase
//! is on the display on the very tick the ending press is classified.
//! Aborts are only tested from the tick after a phase is entered, so
//! the press that entered a phase cannot also leave it.

use crate::activity::{Activity, Status, WhenAbort};
use crate::calc::{calculate, format_result, Op, ResultText};
use crate::entry::{is_long_or_double, NumberSelector, OpSelector};
use crate::error::CalcError;
use crate::frame::Frame;
use crate::number::NumberModel;
use crate::present::{ErrorPresenter, ResultPresenter, StartAnimator};

fn is_any_press(ctx: &Frame) -> bool {
    ctx.press.is_any()
}

/// Phase discriminant, for logging and inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseKind {
    Animate,
    FirstOperand,
    Operator,
    SecondOperand,
    Result,
    Error,
}

enum Phase {
    Animate(WhenAbort<Frame, StartAnimator>),
    FirstOperand(NumberSelector),
    Operator(WhenAbort<Frame, OpSelector>),
    SecondOperand(NumberSelector),
    Result(WhenAbort<Frame, ResultPresenter>),
    Error(WhenAbort<Frame, ErrorPresenter>),
}

impl Phase {
    fn animate() -> Self {
        Phase::Animate(WhenAbort::new(is_any_press, StartAnimator::new()))
    }

    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Animate(_) => PhaseKind::Animate,
            Phase::FirstOperand(_) => PhaseKind::FirstOperand,
            Phase::Operator(_) => PhaseKind::Operator,
            Phase::SecondOperand(_) => PhaseKind::SecondOperand,
            Phase::Result(_) => PhaseKind::Result,
            Phase::Error(_) => PhaseKind::Error,
        }
    }
}

/// The calculator. Reads [`Frame::press`], writes [`Frame::segments`].
/// Never terminates.
pub struct Calculator {
    phase: Phase,
    first: NumberModel,
    op: Op,
    second: NumberModel,
    error: Option<CalcError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            phase: Phase::animate(),
            first: NumberModel::new(),
            op: Op::Add,
            second: NumberModel::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// First operand once confirmed; empty before that.
    pub fn first(&self) -> &NumberModel {
        &self.first
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Second operand once confirmed; empty before that.
    pub fn second(&self) -> &NumberModel {
        &self.second
    }

    /// Formatted result while it is being presented.
    pub fn result_text(&self) -> Option<&str> {
        match &self.phase {
            Phase::Result(presenter) => Some(presenter.inner().text()),
            _ => None,
        }
    }

    /// Why the current session failed, while the error is presented.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    fn enter(&mut self, phase: Phase) {
        info!("calc: {} -> {}", self.phase.kind(), phase.kind());
        self.phase = phase;
    }

    fn fail(&mut self, error: CalcError) {
        info!("calc: error {}", error);
        self.error = Some(error);
        self.enter(Phase::Error(WhenAbort::new(
            is_any_press,
            ErrorPresenter::new(),
        )));
    }

    fn present(&mut self, text: ResultText) {
        info!("calc: result {}", text.as_str());
        self.enter(Phase::Result(WhenAbort::new(
            is_any_press,
            ResultPresenter::new(text),
        )));
    }

    /// Starts a fresh session. Nothing from the previous one survives.
    fn restart(&mut self) {
        self.first.reset();
        self.second.reset();
        self.op = Op::Add;
        self.error = None;
        self.enter(Phase::animate());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for Calculator {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match &mut self.phase {
                Phase::Animate(animator) => {
                    if animator.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.enter(Phase::FirstOperand(NumberSelector::new()));
                }
                Phase::FirstOperand(number) => {
                    if number.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.first = number.take_model();
                    match self.first.value() {
                        Ok(_) => self.enter(Phase::Operator(WhenAbort::new(
                            is_long_or_double,
                            OpSelector::new(),
                        ))),
                        Err(e) => self.fail(e),
                    }
                }
                Phase::Operator(selector) => {
                    if selector.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.op = selector.inner().op();
                    self.enter(Phase::SecondOperand(NumberSelector::new()));
                }
                Phase::SecondOperand(number) => {
                    if number.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.second = number.take_model();
                    match calculate(&self.first, self.op, &self.second) {
                        Ok(value) => self.present(format_result(value)),
                        Err(e) => self.fail(e),
                    }
                }
                Phase::Result(presenter) => {
                    if presenter.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.restart();
                }
                Phase::Error(presenter) => {
                    if presenter.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.restart();
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
