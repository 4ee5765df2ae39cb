//! Seven-segment glyph encoding.
//!
//! Bit layout of the byte shifted into the 74HC595 (bit 7 unused):
//! ```text
//!        --1--
//!       |     |
//!       6     2
//!       |     |
//!        --3--
//!       |     |
//!       0     4
//!       |     |
//!        --5--
//! ```

use crate::calc::Op;

const TOP: u8 = 0b0000_0010;
const TOP_RIGHT: u8 = 0b0000_0100;
const MIDDLE: u8 = 0b0000_1000;
const BOTTOM_RIGHT: u8 = 0b0001_0000;
const BOTTOM: u8 = 0b0010_0000;
const BOTTOM_LEFT: u8 = 0b0000_0001;
const TOP_LEFT: u8 = 0b0100_0000;

const DIGITS: [u8; 10] = [
    TOP | TOP_RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT,
    TOP_RIGHT | BOTTOM_RIGHT,
    TOP | TOP_RIGHT | MIDDLE | BOTTOM_LEFT | BOTTOM,
    TOP | TOP_RIGHT | MIDDLE | BOTTOM_RIGHT | BOTTOM,
    TOP_LEFT | TOP_RIGHT | MIDDLE | BOTTOM_RIGHT,
    TOP | TOP_LEFT | MIDDLE | BOTTOM_RIGHT | BOTTOM,
    TOP | TOP_LEFT | MIDDLE | BOTTOM_LEFT | BOTTOM_RIGHT | BOTTOM,
    TOP | TOP_RIGHT | BOTTOM_RIGHT,
    TOP | TOP_RIGHT | MIDDLE | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT,
    TOP | TOP_RIGHT | MIDDLE | BOTTOM_RIGHT | BOTTOM | TOP_LEFT,
];

/// Clockwise from the top segment.
const CIRCLE: [u8; 6] = [TOP, TOP_RIGHT, BOTTOM_RIGHT, BOTTOM, BOTTOM_LEFT, TOP_LEFT];

/// Encoded display value: one bit per lit segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    pub const BLANK: Segments = Segments(0);
    pub const MINUS: Segments = Segments(MIDDLE);
    pub const PLUS: Segments = Segments(TOP | TOP_LEFT | TOP_RIGHT | MIDDLE);
    pub const MULT: Segments =
        Segments(TOP_LEFT | TOP_RIGHT | MIDDLE | BOTTOM_LEFT | BOTTOM_RIGHT);
    pub const DIV: Segments = Segments(TOP_RIGHT | MIDDLE | BOTTOM_LEFT);
    pub const DECIMAL: Segments = Segments(BOTTOM);
    pub const EQUAL: Segments = Segments(TOP | BOTTOM);
    pub const E: Segments = Segments(TOP | TOP_LEFT | MIDDLE | BOTTOM_LEFT | BOTTOM);
    pub const R: Segments =
        Segments(TOP | TOP_LEFT | TOP_RIGHT | MIDDLE | BOTTOM_LEFT | BOTTOM_RIGHT);

    /// Number of glyphs in the error word "Err0r".
    pub const ERROR_LEN: u8 = 5;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Digit `0..=9`; anything larger renders blank.
    pub fn digit(digit: u8) -> Segments {
        DIGITS
            .get(usize::from(digit))
            .map_or(Segments::BLANK, |&bits| Segments(bits))
    }

    /// Single lit segment of the idle animation, `0` at the top.
    pub fn circle(pos: u8) -> Segments {
        CIRCLE
            .get(usize::from(pos))
            .map_or(Segments::BLANK, |&bits| Segments(bits))
    }

    /// Glyph `pos` of "Err0r".
    pub fn error(pos: u8) -> Segments {
        match pos {
            0 => Segments::E,
            1 | 2 | 4 => Segments::R,
            3 => Segments::digit(0),
            _ => Segments::BLANK,
        }
    }

    pub fn op(op: Op) -> Segments {
        match op {
            Op::Add => Segments::PLUS,
            Op::Sub => Segments::MINUS,
            Op::Mult => Segments::MULT,
            Op::Div => Segments::DIV,
        }
    }

    /// Glyph for one character of a formatted result.
    pub fn for_char(c: char) -> Segments {
        match c {
            '-' => Segments::MINUS,
            '.' => Segments::DECIMAL,
            '0'..='9' => Segments::digit(c as u8 - b'0'),
            _ => Segments::BLANK,
        }
    }
}
