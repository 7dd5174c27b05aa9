//! Configuration loading
//!
//! The configuration is compiled in from clock.toml by the build script.
//! It is checked again at boot; a rejected configuration falls back to the
//! reference values.

use defmt::*;
use escapement_core::config::ClockConfig;

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));

/// Return the configuration to boot with
pub fn load() -> ClockConfig {
    match CLOCK_CONFIG.validate() {
        Ok(()) => {
            info!(
                "Clock config: {} steps/rev, dwell={}ms, debounce={}ms, long_press={}ms",
                CLOCK_CONFIG.steps_per_revolution,
                CLOCK_CONFIG.dwell_ms,
                CLOCK_CONFIG.debounce_ms,
                CLOCK_CONFIG.long_press_ms
            );
            CLOCK_CONFIG
        }
        Err(e) => {
            error!("Clock config rejected: {}", e);
            error!("Using reference configuration");
            ClockConfig::DEFAULT
        }
    }
}
