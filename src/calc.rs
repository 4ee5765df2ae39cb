//! Arithmetic and result formatting. Pure functions, no activity state.

use core::fmt::Write;

use heapless::String;

use crate::config::{MAX_RESULT_LEN, RESULT_DISPLAY_WIDTH};
use crate::error::CalcError;
use crate::number::NumberModel;

/// Formatted result, one display glyph per character.
pub type ResultText = String<MAX_RESULT_LEN>;

/// Binary operator, in the order the selector cycles through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Op {
    #[default]
    Add,
    Sub,
    Mult,
    Div,
}

impl Op {
    /// Next operator in the cycle, wrapping from `Div` to `Add`.
    pub fn next(self) -> Op {
        match self {
            Op::Add => Op::Sub,
            Op::Sub => Op::Mult,
            Op::Mult => Op::Div,
            Op::Div => Op::Add,
        }
    }

    pub fn apply(self, lhs: f32, rhs: f32) -> Result<f32, CalcError> {
        let value = match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mult => lhs * rhs,
            Op::Div => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

/// Computes `lhs op rhs`. Operand parse failures win over arithmetic ones.
pub fn calculate(lhs: &NumberModel, op: Op, rhs: &NumberModel) -> Result<f32, CalcError> {
    let lhs = lhs.value()?;
    let rhs = rhs.value()?;
    op.apply(lhs, rhs)
}

/// Formats `value` for glyph-by-glyph presentation.
///
/// Six fractional digits are rendered, then the text is cut to the
/// display width (never inside the integer part) and trailing zeros and
/// a trailing decimal point are trimmed.
pub fn format_result(value: f32) -> ResultText {
    let mut text = ResultText::new();
    // Negative zero would print as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    if write!(text, "{:.6}", value).is_err() {
        text.clear();
        let _ = text.push('0');
        return text;
    }

    let integer_len = text.find('.').unwrap_or(text.len());
    text.truncate(RESULT_DISPLAY_WIDTH.max(integer_len));

    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text.as_str() == "-0" {
        text.clear();
        let _ = text.push('0');
    }
    text
}
