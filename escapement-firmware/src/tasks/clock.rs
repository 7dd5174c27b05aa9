//! Clock task
//!
//! Runs the controller main loop forever. Each poll may block for the
//! duration of a motor move; between polls the task yields so the rest of
//! the executor keeps running.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Input, Output};
use escapement_core::motor::Hand;
use escapement_core::{ClockController, PollReport};
use escapement_drivers::{ButtonPin, PinBankPort};

use crate::time::EmbassyClock;

/// Controller wired to the board's GPIO
pub type BoardClock = ClockController<PinBankPort<Output<'static>>, ButtonPin<Input<'static>>>;

/// Clock task - polls the controller continuously
#[embassy_executor::task]
pub async fn clock_task(mut controller: BoardClock) {
    info!("Clock task started in {} mode", controller.mode());

    let mut clock = EmbassyClock;

    loop {
        let report = controller.poll(&mut clock);
        log_report(&report);
        yield_now().await;
    }
}

fn log_report(report: &PollReport) {
    if report.is_idle() {
        return;
    }

    if let Some(mode) = report.mode_changed {
        info!("Mode changed to {}", mode);
    }

    if report.short_press {
        match report.nudged {
            Some(Hand::Minutes) => debug!(
                "Nudged minutes hand by {} steps, hours by {}",
                report.steps(Hand::Minutes),
                report.steps(Hand::Hours)
            ),
            Some(hand) => debug!("Nudged {} hand by {} steps", hand, report.steps(hand)),
            None => debug!("Short press ignored"),
        }
    }

    if report.ticked {
        trace!(
            "Tick: seconds={} minutes={} hours={}",
            report.steps(Hand::Seconds),
            report.steps(Hand::Minutes),
            report.steps(Hand::Hours)
        );
    }

    if report.seconds_behind > 0 {
        debug!("Catching up, {} s behind", report.seconds_behind);
    }
}
