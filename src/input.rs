//! Level-to-edge conversion for a polled button.

use crate::frame::Edges;

/// Turns one level sample per tick into press/release edges.
///
/// The previous level starts out released, so a button already held at
/// the first sample reports a press edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    down: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { down: false }
    }

    /// `down` is the debounced level, `true` while the button is held.
    pub fn sample(&mut self, down: bool) -> Edges {
        let edges = Edges {
            pressed: down && !self.down,
            released: !down && self.down,
        };
        self.down = down;
        edges
    }
}
