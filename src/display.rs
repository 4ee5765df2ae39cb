//! Seven-segment output: the sink abstraction, a 74HC595 implementation,
//! and the activity that feeds the sink from the frame.

use embedded_hal::digital::{OutputPin, PinState};

use crate::activity::{Activity, Status};
use crate::error::DisplayError;
use crate::frame::Frame;
use crate::segment::Segments;

/// Write-only display. Receives one encoded value per write.
pub trait SegmentSink {
    type Error;

    fn show(&mut self, segments: Segments) -> Result<(), Self::Error>;
}

/// 74HC595 shift register driven through three GPIO outputs.
///
/// Each write pulls the latch low, clocks the byte out MSB first and
/// raises the latch again, so the outputs change in one step.
pub struct ShiftRegister<DS, SH, ST> {
    data: DS,
    clock: SH,
    latch: ST,
}

impl<DS, SH, ST> ShiftRegister<DS, SH, ST>
where
    DS: OutputPin,
    SH: OutputPin,
    ST: OutputPin,
{
    pub fn new(data: DS, clock: SH, latch: ST) -> Self {
        Self { data, clock, latch }
    }

    pub fn write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.latch.set_low().map_err(|_| DisplayError::Latch)?;
        for bit in (0..8).rev() {
            let state = PinState::from(byte & (1 << bit) != 0);
            self.data.set_state(state).map_err(|_| DisplayError::Data)?;
            self.clock.set_high().map_err(|_| DisplayError::Clock)?;
            self.clock.set_low().map_err(|_| DisplayError::Clock)?;
        }
        self.latch.set_high().map_err(|_| DisplayError::Latch)
    }
}

impl<DS, SH, ST> SegmentSink for ShiftRegister<DS, SH, ST>
where
    DS: OutputPin,
    SH: OutputPin,
    ST: OutputPin,
{
    type Error = DisplayError;

    fn show(&mut self, segments: Segments) -> Result<(), DisplayError> {
        self.write(segments.bits())
    }
}

/// Copies [`Frame::segments`] to the sink. Never terminates.
///
/// Writes on its first tick and afterwards only when the value differs
/// from the last one written. A failed write is logged and retried on
/// the next tick.
pub struct DisplayDriver<S> {
    sink: S,
    last: Option<Segments>,
}

impl<S: SegmentSink> DisplayDriver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, last: None }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Last value the sink accepted.
    pub fn last(&self) -> Option<Segments> {
        self.last
    }
}

impl<S: SegmentSink> Activity<Frame> for DisplayDriver<S> {
    fn step(&mut self, ctx: &mut Frame) -> Status {
        if self.last != Some(ctx.segments) {
            match self.sink.show(ctx.segments) {
                Ok(()) => self.last = Some(ctx.segments),
                Err(_) => warn!("display: write failed"),
            }
        }
        Status::Running
    }

    fn terminated(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.last = None;
    }
}
