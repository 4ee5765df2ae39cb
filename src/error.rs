//! Error types for sevenseg-calc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for
//! efficient on-target logging.

/// Failures of one calculation.
///
/// All kinds look identical on the display (the "Err0r" loop); they
/// differ only in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// Operand text is not a finite number (includes buffer overflow).
    Parse,

    /// Divisor is exactly zero.
    DivideByZero,

    /// Result of the operation is not finite.
    Overflow,
}

/// Shift-register display failures, one per output pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Serial data pin (DS) could not be driven.
    Data,

    /// Shift clock pin (SH_CP) could not be driven.
    Clock,

    /// Storage latch pin (ST_CP) could not be driven.
    Latch,
}
