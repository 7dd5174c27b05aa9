//! Button debounce and press classification
//!
//! The raw line is sampled once per main-loop iteration. A level is accepted
//! once it has stayed unchanged for the debounce window; accepted presses are
//! then classified as short or long by how long the line was held.
//!
//! Hold time runs from the settled press edge to the settled release edge
//! (both taken from the raw line, not from the moment the debounced level
//! flipped), so the classification does not shift with the debounce window.

use crate::config::ClockConfig;

/// Debounced push button with one-shot short/long press flags
///
/// Each physical press produces exactly one of the two events. A long press
/// is reported as soon as the hold reaches the threshold, while the button is
/// still down; its release produces nothing further.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    /// Debounce window (ms)
    debounce_ms: u32,
    /// Long-press threshold (ms)
    long_press_ms: u32,
    /// Last raw sample
    raw: bool,
    /// Debounced level
    stable: bool,
    /// Time of the last raw level change
    last_change_ms: u32,
    /// Press edge of the current (or last) press
    press_start_ms: u32,
    /// Current press has already been reported as long
    long_reported: bool,
    /// Pending one-shot short-press event
    short_pending: bool,
    /// Pending one-shot long-press event
    long_pending: bool,
}

impl Button {
    /// Create a released button
    pub const fn new(debounce_ms: u32, long_press_ms: u32) -> Self {
        Self {
            debounce_ms,
            long_press_ms,
            raw: false,
            stable: false,
            last_change_ms: 0,
            press_start_ms: 0,
            long_reported: false,
            short_pending: false,
            long_pending: false,
        }
    }

    /// Create a button with the configured timing
    pub const fn from_config(config: &ClockConfig) -> Self {
        Self::new(config.debounce_ms, config.long_press_ms)
    }

    /// Feed one raw sample taken at `now_ms`
    ///
    /// Polling may be irregular; all windows are `>=` comparisons against
    /// elapsed time, so late polls only add latency.
    pub fn update(&mut self, sample: bool, now_ms: u32) {
        if sample != self.raw {
            self.raw = sample;
            self.last_change_ms = now_ms;
        }

        if sample != self.stable && now_ms.wrapping_sub(self.last_change_ms) >= self.debounce_ms {
            self.stable = sample;

            if sample {
                self.press_start_ms = self.last_change_ms;
                self.long_reported = false;
            } else if !self.long_reported {
                let held_ms = self.last_change_ms.wrapping_sub(self.press_start_ms);
                if held_ms >= self.long_press_ms {
                    // Released exactly at the threshold, before a live check saw it
                    self.long_reported = true;
                    self.long_pending = true;
                } else {
                    self.short_pending = true;
                }
            }
        }

        // A pending release (raw low, stable still high) ends the hold
        if self.stable
            && self.raw
            && !self.long_reported
            && now_ms.wrapping_sub(self.press_start_ms) >= self.long_press_ms
        {
            self.long_reported = true;
            self.long_pending = true;
        }
    }

    /// Consume a pending short-press event
    pub fn take_short(&mut self) -> bool {
        core::mem::take(&mut self.short_pending)
    }

    /// Consume a pending long-press event
    pub fn take_long(&mut self) -> bool {
        core::mem::take(&mut self.long_pending)
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}
