//! Operand text accumulated one confirmed entry at a time.

use bitflags::bitflags;
use heapless::String;

use crate::config::MAX_OPERAND_LEN;
use crate::error::CalcError;

bitflags! {
    /// Entry kinds that are currently legal.
    ///
    /// Digits 1-9 are always legal; `ZERO` governs the digit 0.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntryMode: u8 {
        const SIGN = 0b0001;
        const DECIMAL = 0b0010;
        const ZERO = 0b0100;
    }
}

/// One confirmed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entry {
    Digit(u8),
    Sign,
    Decimal,
}

impl Default for Entry {
    fn default() -> Self {
        Entry::Digit(0)
    }
}

/// Text of one operand plus the entry constraints already applied.
///
/// The constraint flags are only ever set, never cleared, until
/// [`reset`](NumberModel::reset):
///
/// - the sign is legal only as the very first entry
/// - the decimal point is legal once
/// - after a leading zero, another zero is illegal until the decimal
///   point has been entered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberModel {
    text: String<MAX_OPERAND_LEN>,
    has_decimal: bool,
    has_leading_zero: bool,
    has_digit: bool,
    overflowed: bool,
}

impl NumberModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn allowed_entry_mode(&self) -> EntryMode {
        let mut mode = EntryMode::empty();
        if self.text.is_empty() {
            mode |= EntryMode::SIGN;
        }
        if !self.has_decimal {
            mode |= EntryMode::DECIMAL;
        }
        if !self.has_leading_zero || self.has_decimal {
            mode |= EntryMode::ZERO;
        }
        mode
    }

    /// Appends `entry`. A full buffer marks the model as erroneous
    /// instead of dropping the entry silently.
    pub fn update(&mut self, entry: Entry) {
        let c = match entry {
            Entry::Sign => '-',
            Entry::Decimal => {
                self.has_decimal = true;
                '.'
            }
            Entry::Digit(digit) => {
                if digit == 0 && !self.has_digit && !self.has_decimal {
                    self.has_leading_zero = true;
                }
                self.has_digit = true;
                char::from(b'0' + digit.min(9))
            }
        };
        if self.text.push(c).is_err() {
            self.overflowed = true;
        }
    }

    /// `true` once an entry did not fit into the text buffer.
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn value(&self) -> Result<f32, CalcError> {
        if self.overflowed {
            return Err(CalcError::Parse);
        }
        match self.text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::Parse),
        }
    }

    pub fn has_error(&self) -> bool {
        self.value().is_err()
    }
}
