//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in escapement-core on top of `embedded-hal` digital pins:
//!
//! - Motor output port over twelve push-pull pins
//! - Push-button input with selectable polarity

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod port;

pub use button::{ButtonPin, Polarity};
pub use port::{PinBankPort, PORT_WIDTH};
