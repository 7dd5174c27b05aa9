//! Configuration types
//!
//! Compile-time clock configuration. The firmware embeds a validated
//! `ClockConfig` generated from `clock.toml` by its build script.

pub mod types;

pub use types::*;
