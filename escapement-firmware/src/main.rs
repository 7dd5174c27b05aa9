//! Escapement - Stepper Clock Firmware
//!
//! Main firmware binary for an RP2040 driving three half-stepped geared
//! steppers as the seconds, minutes and hours hands of an analog clock.
//! A single push button sets the time.
//!
//! Pin assignment:
//! - GPIO0-3: seconds motor coils
//! - GPIO4-7: minutes motor coils
//! - GPIO8-11: hours motor coils
//! - GPIO15: set button (to 3V3, internal pull-down)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use escapement_core::traits::MonotonicClock;
use escapement_core::ClockController;
use escapement_drivers::{ButtonPin, PinBankPort};
use {defmt_rtt as _, panic_probe as _};

use crate::time::EmbassyClock;

mod config;
mod tasks;
mod time;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Escapement firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Motor port: bit n of the port value drives GPIOn
    let port = PinBankPort::new([
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
    ]);
    info!("Motor port initialized");

    let button = ButtonPin::new_active_high(Input::new(p.PIN_15, Pull::Down));
    info!("Button initialized");

    let mut controller = unwrap!(ClockController::new(
        config,
        port,
        button,
        EmbassyClock.now_ms()
    ));
    controller.release_motors();

    spawner.spawn(tasks::clock_task(controller)).unwrap();

    info!("All tasks spawned, clock running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
