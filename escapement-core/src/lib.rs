//! Board-agnostic core logic for the Escapement stepper clock
//!
//! This crate contains all clock logic that does not depend on specific
//! hardware:
//!
//! - Hardware abstraction traits (output port, button, time source)
//! - Half-step motor sequencing on a shared port
//! - Integer rate accumulators for the minutes and hours hands
//! - Button debounce and short/long press classification
//! - Mode state machine and the main-loop controller
//! - Configuration type definitions and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod controller;
pub mod motor;
pub mod rate;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use controller::{ClockController, PollReport};
