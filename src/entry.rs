//! Operand entry and operator selection, driven by press classifications.
//!
//! A short press advances to the next candidate. A long or double press
//! aborts the selector, and the candidate shown at that moment is taken.

use crate::activity::{Activity, Await, Status, WhenAbort};
use crate::calc::Op;
use crate::frame::Frame;
use crate::number::{Entry, EntryMode, NumberModel};
use crate::press::Press;
use crate::segment::Segments;

fn is_short(ctx: &Frame) -> bool {
    ctx.press == Press::Short
}

pub(crate) fn is_long_or_double(ctx: &Frame) -> bool {
    ctx.press.is_long_or_double()
}

/// Cycles add → sub → mult → div on each short press. Never terminates.
pub struct OpSelector {
    op: Op,
    advance: Await<Frame>,
}

impl OpSelector {
    pub fn new() -> Self {
        Self {
            op: Op::Add,
            advance: Await::new(is_short),
        }
    }

    /// Operator currently on display.
    pub fn op(&self) -> Op {
        self.op
    }
}

impl Default for OpSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for OpSelector {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            ctx.segments = Segments::op(self.op);
            if self.advance.step(ctx).is_running() {
                return Status::Running;
            }
            self.op = self.op.next();
            self.advance = Await::new(is_short);
        }
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Candidate {
    Digit(u8),
    Sign,
    Decimal,
}

/// Offers every entry legal under `mode`: digits, then sign, then
/// decimal point, wrapping around. Never terminates.
pub struct EntrySelector {
    mode: EntryMode,
    candidate: Candidate,
    entry: Entry,
    advance: Await<Frame>,
}

impl EntrySelector {
    pub fn new(mode: EntryMode) -> Self {
        Self {
            mode,
            candidate: Self::first(mode),
            entry: Entry::default(),
            advance: Await::new(is_short),
        }
    }

    /// Entry currently on display.
    pub fn entry(&self) -> Entry {
        self.entry
    }

    fn first(mode: EntryMode) -> Candidate {
        if mode.contains(EntryMode::ZERO) {
            Candidate::Digit(0)
        } else {
            Candidate::Digit(1)
        }
    }

    fn after(&self, candidate: Candidate) -> Candidate {
        match candidate {
            Candidate::Digit(d) if d < 9 => Candidate::Digit(d + 1),
            Candidate::Digit(_) if self.mode.contains(EntryMode::SIGN) => Candidate::Sign,
            Candidate::Digit(_) | Candidate::Sign if self.mode.contains(EntryMode::DECIMAL) => {
                Candidate::Decimal
            }
            _ => Self::first(self.mode),
        }
    }
}

impl Activity<Frame> for EntrySelector {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            let (entry, segments) = match self.candidate {
                Candidate::Digit(d) => (Entry::Digit(d), Segments::digit(d)),
                Candidate::Sign => (Entry::Sign, Segments::MINUS),
                Candidate::Decimal => (Entry::Decimal, Segments::DECIMAL),
            };
            self.entry = entry;
            ctx.segments = segments;
            if self.advance.step(ctx).is_running() {
                return Status::Running;
            }
            self.candidate = self.after(self.candidate);
            self.advance = Await::new(is_short);
        }
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberState {
    Enter,
    Selecting,
    Done,
}

/// Builds one operand from repeated entry selections.
///
/// Each round runs an [`EntrySelector`] until a long or double press and
/// appends the entry it showed. A double press starts another round; a
/// long press, or a full text buffer, terminates the activity. Whether
/// the text parses is left to the caller.
pub struct NumberSelector {
    model: NumberModel,
    selector: WhenAbort<Frame, EntrySelector>,
    state: NumberState,
}

impl NumberSelector {
    pub fn new() -> Self {
        Self {
            model: NumberModel::new(),
            selector: WhenAbort::new(is_long_or_double, EntrySelector::new(EntryMode::all())),
            state: NumberState::Enter,
        }
    }

    pub fn model(&self) -> &NumberModel {
        &self.model
    }

    /// Moves the finished operand out, leaving an empty model behind.
    pub fn take_model(&mut self) -> NumberModel {
        core::mem::take(&mut self.model)
    }

    fn next_round(&mut self) {
        self.selector = WhenAbort::new(
            is_long_or_double,
            EntrySelector::new(self.model.allowed_entry_mode()),
        );
        self.state = NumberState::Selecting;
    }
}

impl Default for NumberSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for NumberSelector {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match self.state {
                NumberState::Enter => {
                    self.model.reset();
                    self.next_round();
                }
                NumberState::Selecting => {
                    if self.selector.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.model.update(self.selector.inner().entry());
                    if self.model.is_overflowed() || ctx.press == Press::Long {
                        debug!("operand: {}", self.model.text());
                        self.state = NumberState::Done;
                    } else {
                        self.next_round();
                    }
                }
                NumberState::Done => return Status::Done,
            }
        }
    }

    fn terminated(&self) -> bool {
        self.state == NumberState::Done
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
