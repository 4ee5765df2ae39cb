//! Per-tick context shared by every application activity.

use crate::press::Press;
use crate::segment::Segments;

/// Button edges observed during one tick.
///
/// Edges do not persist: the tick driver overwrites them before every
/// tick. When derived from a single level sample per tick (see
/// [`EdgeDetector`](crate::input::EdgeDetector)) at most one of the two
/// is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges {
    pub pressed: bool,
    pub released: bool,
}

impl Edges {
    pub const NONE: Edges = Edges {
        pressed: false,
        released: false,
    };
    pub const PRESSED: Edges = Edges {
        pressed: true,
        released: false,
    };
    pub const RELEASED: Edges = Edges {
        pressed: false,
        released: true,
    };
}

/// Inputs read and outputs written during one tick.
///
/// Each field has exactly one producer per tick, declared before its
/// consumers in the root block:
///
/// - `primary` / `secondary`: written by the tick driver
/// - `press`: written by the press recognizer, read by the calculator
/// - `segments`: written by the calculator, read by the display driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub primary: Edges,
    pub secondary: Edges,
    pub press: Press,
    pub segments: Segments,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }
}
