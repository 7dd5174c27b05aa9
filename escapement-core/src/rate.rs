//! Rate accumulator (digital differential analyzer)
//!
//! Spreads `steps_per_tick` motor steps over every `threshold` real-second
//! ticks using integer arithmetic only. Each tick adds `steps_per_tick` to an
//! accumulator and one step is owed for every whole `threshold` it contains,
//! so the long-run rate is exact and steps are as evenly spaced as integer
//! division allows.

use crate::config::ClockConfig;

/// Integer rate converter for one continuously driven hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateAccumulator {
    /// Virtual-step units carried between ticks, always `< threshold`
    acc: u32,
    /// Steps added per tick
    steps_per_tick: u32,
    /// Units per owed step
    threshold: u32,
}

impl RateAccumulator {
    /// Create an accumulator owing `steps_per_tick` steps every `threshold` ticks
    ///
    /// `threshold` must be non-zero; [`ClockConfig::validate`] guarantees this
    /// for the hand constructors.
    pub const fn new(steps_per_tick: u32, threshold: u32) -> Self {
        Self {
            acc: 0,
            steps_per_tick,
            threshold,
        }
    }

    /// Accumulator for the minutes hand: one revolution per `minute_period_s`
    pub const fn minutes(config: &ClockConfig) -> Self {
        Self::new(config.steps_per_revolution, config.minute_period_s)
    }

    /// Accumulator for the hours hand: one revolution per `hour_period_s`
    pub const fn hours(config: &ClockConfig) -> Self {
        Self::new(config.steps_per_revolution, config.hour_period_s)
    }

    /// Account for one elapsed second and return the number of steps now owed
    pub fn tick(&mut self) -> u32 {
        self.acc += self.steps_per_tick;

        let mut owed = 0;
        while self.acc >= self.threshold {
            self.acc -= self.threshold;
            owed += 1;
        }
        owed
    }

    /// Account for `ticks` elapsed seconds at once
    ///
    /// Returns the same total as calling [`RateAccumulator::tick`] `ticks`
    /// times.
    pub fn catch_up(&mut self, ticks: u32) -> u32 {
        (0..ticks).map(|_| self.tick()).sum()
    }

    /// Units currently carried
    pub fn remainder(&self) -> u32 {
        self.acc
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
