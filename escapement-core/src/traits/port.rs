//! Shared motor output port
//!
//! All three motors drive one 12-bit output register, one 4-bit group each.

/// Output register shared by the motor phase groups
///
/// Writes are infallible. Implementations only need `read` and `write`;
/// group updates go through [`PhasePort::write_group`] so that driving one
/// motor never disturbs the coils of another.
pub trait PhasePort {
    /// Current value of the output register
    fn read(&self) -> u16;

    /// Replace the whole output register
    fn write(&mut self, value: u16);

    /// Read-modify-write the bits selected by `mask`
    ///
    /// Bits of `bits` outside `mask` are ignored.
    fn write_group(&mut self, mask: u16, bits: u16) {
        let value = (self.read() & !mask) | (bits & mask);
        self.write(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Register(u16);

    impl PhasePort for Register {
        fn read(&self) -> u16 {
            self.0
        }

        fn write(&mut self, value: u16) {
            self.0 = value;
        }
    }

    #[test]
    fn test_write_group_preserves_other_bits() {
        let mut port = Register(0x0A5F);
        port.write_group(0x00F0, 0x0030);
        assert_eq!(port.read(), 0x0A3F);
    }

    #[test]
    fn test_write_group_ignores_bits_outside_mask() {
        let mut port = Register(0x0000);
        port.write_group(0x0F00, 0xFFFF);
        assert_eq!(port.read(), 0x0F00);
    }
}
