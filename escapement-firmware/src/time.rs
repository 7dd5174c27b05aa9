//! Millisecond time source backed by the embassy time driver

use embassy_time::{block_for, Duration, Instant};
use escapement_core::traits::MonotonicClock;

/// Uptime clock
///
/// Truncated to 32 bits, so it wraps after ~49 days like the tick counter
/// the core expects.
#[derive(Clone, Copy)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn dwell(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
