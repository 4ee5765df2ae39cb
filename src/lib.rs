//! Library interface for sevenseg-calc.
//!
//! Everything except the hardware bring-up in `main.rs` lives here and
//! runs on the host as well as on the target:
//!
//! - [`activity`]: tick-driven activities and their combinators
//! - [`press`]: short / long / double press recognition
//! - [`calculator`]: the session state machine built on both
//! - [`display`]: the segment sink and the 74HC595 driver
//! - [`app`]: the root block wiring the three together
//!
//! Usage: `cargo test --lib` and `cargo test --test integration`
//!
//! Note: The embedded binary is built with `--features embedded` and
//! uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod activity;
pub mod app;
pub mod calc;
pub mod calculator;
pub mod config;
pub mod display;
pub mod entry;
pub mod error;
pub mod frame;
pub mod input;
pub mod number;
pub mod present;
pub mod press;
pub mod segment;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use app::App;
pub use calc::Op;
pub use calculator::{Calculator, PhaseKind};
pub use display::{DisplayDriver, SegmentSink, ShiftRegister};
pub use error::{CalcError, DisplayError};
pub use frame::{Edges, Frame};
pub use input::EdgeDetector;
pub use press::{DualPressRecognizer, Press, PressRecognizer};
pub use segment::Segments;
