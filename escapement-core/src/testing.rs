//! Host-side fakes shared by the unit tests

use core::cell::Cell;

use crate::traits::{ButtonInput, MonotonicClock, PhasePort};

/// Maximum number of port writes a [`RecordingPort`] keeps
pub const MAX_WRITES: usize = 4096;

/// Output register that records every write
pub struct RecordingPort {
    value: u16,
    writes: [u16; MAX_WRITES],
    count: usize,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self {
            value: 0,
            writes: [0; MAX_WRITES],
            count: 0,
        }
    }

    /// Total writes since creation (including ones past the record limit)
    pub fn write_count(&self) -> usize {
        self.count
    }

    /// Recorded writes, oldest first
    pub fn writes(&self) -> &[u16] {
        &self.writes[..self.count.min(MAX_WRITES)]
    }
}

impl PhasePort for RecordingPort {
    fn read(&self) -> u16 {
        self.value
    }

    fn write(&mut self, value: u16) {
        self.value = value;
        if self.count < MAX_WRITES {
            self.writes[self.count] = value;
        }
        self.count += 1;
    }
}

/// Virtual millisecond clock
///
/// Time only moves when a test calls [`SimClock::advance`] or when code
/// under test dwells.
pub struct SimClock {
    now: Cell<u32>,
}

impl SimClock {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl MonotonicClock for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }

    fn dwell(&mut self, ms: u32) {
        self.advance(ms);
    }
}

/// Button line whose level is set by the test through a shared cell
pub struct FakeButton<'a> {
    pub pressed: &'a Cell<bool>,
}

impl ButtonInput for FakeButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}
