//! Configuration type definitions
//!
//! These types describe the clock mechanism and the button timing. They are
//! fixed at compile time; there is no runtime configuration surface.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Dial divisions for the seconds and minutes hands
pub const DIVISIONS_PER_REVOLUTION: u32 = 60;

/// Milliseconds per real-time second tick
pub const TICK_MS: u32 = 1000;

/// Clock configuration
///
/// Defaults match a 28BYJ-48 class geared stepper driven in half steps
/// (4080 half-steps per output revolution) with a 3 ms dwell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default, deny_unknown_fields))]
pub struct ClockConfig {
    /// Time the raw button level must stay constant before it is accepted (ms)
    pub debounce_ms: u32,
    /// Hold time at which a press is classified long (ms)
    pub long_press_ms: u32,
    /// Hold time between successive phase writes (ms)
    pub dwell_ms: u32,
    /// Motor half-steps per full revolution of a hand
    pub steps_per_revolution: u32,
    /// Real seconds per revolution of the minutes hand
    pub minute_period_s: u32,
    /// Real seconds per revolution of the hours hand
    pub hour_period_s: u32,
    /// Minutes-hand revolutions per hours-hand revolution
    pub minute_hour_coupling: u32,
}

impl ClockConfig {
    /// Reference configuration
    pub const DEFAULT: Self = Self {
        debounce_ms: 20,
        long_press_ms: 2000,
        dwell_ms: 3,
        steps_per_revolution: 4080,
        minute_period_s: 3600,
        hour_period_s: 12 * 3600,
        minute_hour_coupling: 12,
    };

    /// Check the configuration for values the clock cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_revolution == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.dwell_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(ConfigError::LongPressTooShort);
        }
        if self.minute_period_s == 0 || self.hour_period_s == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.minute_hour_coupling == 0 {
            return Err(ConfigError::ZeroCoupling);
        }
        if self.minute_period_s.checked_mul(self.minute_hour_coupling) != Some(self.hour_period_s)
        {
            return Err(ConfigError::InconsistentPeriods);
        }
        for divisor in [DIVISIONS_PER_REVOLUTION, self.minute_hour_coupling] {
            if self.steps_per_revolution % divisor != 0 {
                return Err(ConfigError::StepsNotDivisible { divisor });
            }
        }
        // The seconds hand must finish its move inside one tick or it never
        // catches up with real time.
        if self.seconds_nudge().saturating_mul(self.dwell_ms) >= TICK_MS {
            return Err(ConfigError::TickOverrun);
        }
        Ok(())
    }

    /// Steps for one dial division of the seconds hand
    pub const fn seconds_nudge(&self) -> u32 {
        self.steps_per_revolution / DIVISIONS_PER_REVOLUTION
    }

    /// Steps for one dial division of the minutes hand
    pub const fn minutes_nudge(&self) -> u32 {
        self.steps_per_revolution / DIVISIONS_PER_REVOLUTION
    }

    /// Hours-hand steps that accompany a one-minute nudge
    ///
    /// Truncated: with 4080 steps this is 5 where the exact ratio is 5.67.
    pub const fn hour_coupling_nudge(&self) -> u32 {
        self.steps_per_revolution / (DIVISIONS_PER_REVOLUTION * self.minute_hour_coupling)
    }

    /// Steps for one hour on the hours hand
    pub const fn hours_nudge(&self) -> u32 {
        self.steps_per_revolution / self.minute_hour_coupling
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `steps_per_revolution` is zero
    ZeroSteps,
    /// `dwell_ms` is zero
    ZeroDwell,
    /// Long-press threshold does not exceed the debounce window
    LongPressTooShort,
    /// A hand period is zero
    ZeroPeriod,
    /// `minute_hour_coupling` is zero
    ZeroCoupling,
    /// `hour_period_s` is not `minute_period_s * minute_hour_coupling`
    InconsistentPeriods,
    /// `steps_per_revolution` is not a multiple of a required divisor
    StepsNotDivisible { divisor: u32 },
    /// A seconds-hand move takes a full tick or longer
    TickOverrun,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSteps => f.write_str("steps_per_revolution must be non-zero"),
            ConfigError::ZeroDwell => f.write_str("dwell_ms must be non-zero"),
            ConfigError::LongPressTooShort => {
                f.write_str("long_press_ms must be greater than debounce_ms")
            }
            ConfigError::ZeroPeriod => {
                f.write_str("minute_period_s and hour_period_s must be non-zero")
            }
            ConfigError::ZeroCoupling => f.write_str("minute_hour_coupling must be non-zero"),
            ConfigError::InconsistentPeriods => {
                f.write_str("hour_period_s must equal minute_period_s * minute_hour_coupling")
            }
            ConfigError::StepsNotDivisible { divisor } => {
                write!(f, "steps_per_revolution must be a multiple of {}", divisor)
            }
            ConfigError::TickOverrun => {
                f.write_str("seconds-hand move (steps/60 * dwell_ms) must be shorter than 1000 ms")
            }
        }
    }
}
