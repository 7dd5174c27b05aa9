//! Monotonic millisecond time source

/// Free-running millisecond counter
///
/// All differences are taken with wrapping arithmetic. Wraparound of the
/// counter itself (after ~49 days) is not handled beyond that.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;

    /// Block for at least `ms` milliseconds
    ///
    /// The default busy-waits on [`MonotonicClock::now_ms`]. Simulated clocks
    /// override this to advance virtual time instead.
    fn dwell(&mut self, ms: u32) {
        let start = self.now_ms();
        while self.now_ms().wrapping_sub(start) < ms {
            core::hint::spin_loop();
        }
    }
}
