//! GPIO output port
//!
//! Presents twelve individual output pins as the shared 12-bit motor port.
//! Bit `n` of the port value drives `pins[n]`, so the seconds, minutes and
//! hours motors sit on pins 0-3, 4-7 and 8-11.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use escapement_core::traits::PhasePort;

/// Number of pins in the motor port
pub const PORT_WIDTH: usize = 12;

/// Motor port built from individual GPIO pins
///
/// Keeps a shadow copy of the port value; a write only touches the pins
/// whose bit actually changed.
pub struct PinBankPort<P> {
    pins: [P; PORT_WIDTH],
    shadow: u16,
}

impl<P: OutputPin<Error = Infallible>> PinBankPort<P> {
    /// Create a port with every coil de-energised
    pub fn new(pins: [P; PORT_WIDTH]) -> Self {
        let mut port = Self { pins, shadow: 0 };
        for pin in port.pins.iter_mut() {
            pin.set_low().unwrap_or_else(|e| match e {});
        }
        port
    }
}

impl<P: OutputPin<Error = Infallible>> PhasePort for PinBankPort<P> {
    fn read(&self) -> u16 {
        self.shadow
    }

    fn write(&mut self, value: u16) {
        let changed = self.shadow ^ value;

        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if changed & (1 << bit) != 0 {
                let state = PinState::from(value & (1 << bit) != 0);
                pin.set_state(state).unwrap_or_else(|e| match e {});
            }
        }

        // Bits above the port width have no pin
        self.shadow = value & ((1 << PORT_WIDTH) - 1);
    }
}
