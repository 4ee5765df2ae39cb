//! Timed presentation activities: idle animation, glyphs, result, error.

use heapless::Vec;

use crate::activity::{Activity, Delay, Status};
use crate::calc::ResultText;
use crate::config::{
    ANIMATION_POSITIONS, MAX_RESULT_LEN, PRESENT_LONG_TICKS, PRESENT_MEDIUM_TICKS,
    PRESENT_SHORT_TICKS,
};
use crate::frame::Frame;
use crate::segment::Segments;

/// Rotates a single lit segment around the display. Never terminates.
pub struct StartAnimator {
    pos: u8,
    delay: Delay,
    waiting: bool,
}

impl StartAnimator {
    pub fn new() -> Self {
        Self {
            pos: 0,
            delay: Delay::new(PRESENT_SHORT_TICKS),
            waiting: false,
        }
    }
}

impl Default for StartAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for StartAnimator {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            if self.waiting {
                if self.delay.step(ctx).is_running() {
                    return Status::Running;
                }
                self.waiting = false;
            }
            ctx.segments = Segments::circle(self.pos);
            self.pos = (self.pos + 1) % ANIMATION_POSITIONS;
            self.delay = Delay::new(PRESENT_SHORT_TICKS);
            self.waiting = true;
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
enum GlyphState {
    Enter,
    Gap,
    Hold,
    Done,
}

/// Blanks the display briefly, then shows one glyph for a while.
pub struct GlyphPresenter {
    glyph: Segments,
    delay: Delay,
    state: GlyphState,
}

impl GlyphPresenter {
    pub fn new(glyph: Segments) -> Self {
        Self {
            glyph,
            delay: Delay::new(PRESENT_SHORT_TICKS),
            state: GlyphState::Enter,
        }
    }
}

impl Activity<Frame> for GlyphPresenter {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match self.state {
                GlyphState::Enter => {
                    ctx.segments = Segments::BLANK;
                    self.delay = Delay::new(PRESENT_SHORT_TICKS);
                    self.state = GlyphState::Gap;
                }
                GlyphState::Gap => {
                    if self.delay.step(ctx).is_running() {
                        return Status::Running;
                    }
                    ctx.segments = self.glyph;
                    self.delay = Delay::new(PRESENT_MEDIUM_TICKS);
                    self.state = GlyphState::Hold;
                }
                GlyphState::Hold => {
                    if self.delay.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.state = GlyphState::Done;
                }
                GlyphState::Done => return Status::Done,
            }
        }
    }

    fn terminated(&self) -> bool {
        self.state == GlyphState::Done
    }

    fn reset(&mut self) {
        *self = Self::new(self.glyph);
    }
}

/// Glyph sequence shared by the result and error presenters.
type Glyphs = Vec<Segments, MAX_RESULT_LEN>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MarqueeState {
    Lead,
    LeadHold,
    Next,
    Glyph,
    Rest,
}

/// Loops forever: optional lead glyph, each glyph in turn, a blank rest.
struct Marquee {
    lead: Option<Segments>,
    glyphs: Glyphs,
    index: usize,
    glyph: GlyphPresenter,
    delay: Delay,
    state: MarqueeState,
}

impl Marquee {
    fn new(lead: Option<Segments>, glyphs: Glyphs) -> Self {
        Self {
            lead,
            glyphs,
            index: 0,
            glyph: GlyphPresenter::new(Segments::BLANK),
            delay: Delay::new(PRESENT_MEDIUM_TICKS),
            state: MarqueeState::Lead,
        }
    }

    fn step(&mut self, ctx: &mut Frame) -> Status {
        loop {
            match self.state {
                MarqueeState::Lead => {
                    self.index = 0;
                    self.state = MarqueeState::Next;
                    if let Some(lead) = self.lead {
                        ctx.segments = lead;
                        self.delay = Delay::new(PRESENT_MEDIUM_TICKS);
                        self.state = MarqueeState::LeadHold;
                    }
                }
                MarqueeState::LeadHold => {
                    if self.delay.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.state = MarqueeState::Next;
                }
                MarqueeState::Next => match self.glyphs.get(self.index) {
                    Some(&glyph) => {
                        self.glyph = GlyphPresenter::new(glyph);
                        self.state = MarqueeState::Glyph;
                    }
                    None => {
                        ctx.segments = Segments::BLANK;
                        self.delay = Delay::new(PRESENT_LONG_TICKS);
                        self.state = MarqueeState::Rest;
                    }
                },
                MarqueeState::Glyph => {
                    if self.glyph.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.index += 1;
                    self.state = MarqueeState::Next;
                }
                MarqueeState::Rest => {
                    if self.delay.step(ctx).is_running() {
                        return Status::Running;
                    }
                    self.state = MarqueeState::Lead;
                }
            }
        }
    }
}

/// Shows "=" followed by the result, glyph by glyph. Never terminates.
pub struct ResultPresenter {
    text: ResultText,
    marquee: Marquee,
}

impl ResultPresenter {
    pub fn new(text: ResultText) -> Self {
        let glyphs = text.chars().map(Segments::for_char).collect();
        Self {
            marquee: Marquee::new(Some(Segments::EQUAL), glyphs),
            text,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

impl Activity<Frame> for ResultPresenter {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        self.marquee.step(ctx)
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new(self.text.clone());
    }
}

/// Spells "Err0r" glyph by glyph. Never terminates.
pub struct ErrorPresenter {
    marquee: Marquee,
}

impl ErrorPresenter {
    pub fn new() -> Self {
        let glyphs = (0..Segments::ERROR_LEN).map(Segments::error).collect();
        Self {
            marquee: Marquee::new(None, glyphs),
        }
    }
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity<Frame> for ErrorPresenter {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        self.marquee.step(ctx)
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
