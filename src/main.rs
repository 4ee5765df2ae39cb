//! sevenseg-calc firmware for the nRF52840.
//!
//! A single push button drives a one-digit seven-segment display behind a
//! 74HC595 shift register. The button level is sampled once per tick; the
//! resulting edges drive the activity tree in [`sevenseg_calc::App`].
//!
//! Pin assignments are listed in `config.rs`.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_time::{Duration, Ticker};
use sevenseg_calc::config::{TICK_HZ, TICK_PERIOD_MS};
use sevenseg_calc::{App, EdgeDetector, ShiftRegister};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // Active-low with internal pull-up.
    let button = Input::new(p.P0_11, Pull::Up);

    let data = Output::new(p.P0_13, Level::Low, OutputDrive::Standard);
    let clock = Output::new(p.P0_14, Level::Low, OutputDrive::Standard);
    let latch = Output::new(p.P0_15, Level::Low, OutputDrive::Standard);

    let mut app = App::new(ShiftRegister::new(data, clock, latch));
    let mut edges = EdgeDetector::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    info!("sevenseg-calc running at {} Hz", TICK_HZ);

    loop {
        app.tick(edges.sample(button.is_low()));
        ticker.next().await;
    }
}
