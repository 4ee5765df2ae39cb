//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, buffer capacities and pin assignments live
//! here so they can be tuned in one place. Every duration is counted in
//! ticks; the core has no notion of wall-clock time.

// Tick

/// Rate at which the root activity is ticked (Hz).
pub const TICK_HZ: u64 = 10;

/// Period between two ticks (ms).
pub const TICK_PERIOD_MS: u64 = 1000 / TICK_HZ;

// Press recognition

/// Ticks after a press edge before the press counts as long.
/// A release inside this window makes it short, a re-press makes it double.
pub const PRESS_TIMEOUT_TICKS: u16 = 3;

// Presentation

/// Blank gap shown before each glyph, and the animation step length.
pub const PRESENT_SHORT_TICKS: u16 = 2;

/// How long a glyph (or the equal sign) stays lit.
pub const PRESENT_MEDIUM_TICKS: u16 = 8;

/// Pause between two loops of a result or error presentation.
pub const PRESENT_LONG_TICKS: u16 = 12;

/// Number of segments the idle animation rotates through.
pub const ANIMATION_POSITIONS: u8 = 6;

// Buffers

/// Maximum characters in an operand; entering more is a parse error.
pub const MAX_OPERAND_LEN: usize = 12;

/// Capacity of a formatted result (fits any finite `f32` with `{:.6}`).
pub const MAX_RESULT_LEN: usize = 48;

/// Characters a result is truncated to before trailing zeros are trimmed.
/// The integer part is always kept whole.
pub const RESULT_DISPLAY_WIDTH: usize = 7;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`. Adjust for your custom PCB.
//
//   Button          → P0.11 (active-low, internal pull-up)
//   74HC595 DS      → P0.13
//   74HC595 SH_CP   → P0.14
//   74HC595 ST_CP   → P0.15
