//! Half-step motor sequencer
//!
//! Each hand is driven by a unipolar stepper whose four coils sit on one
//! 4-bit group of the shared output port. A step writes the next entry of the
//! half-step phase table into that group and then holds it for the dwell time.

use crate::traits::{MonotonicClock, PhasePort};

/// Half-step drive sequence, one coil pattern per entry
///
/// Walking the table forward turns the hands clockwise.
pub const PHASE_TABLE: [u8; 8] = [0x8, 0xC, 0x4, 0x6, 0x2, 0x3, 0x1, 0x9];

/// Number of entries in [`PHASE_TABLE`]
pub const PHASE_COUNT: u8 = PHASE_TABLE.len() as u8;

/// Clock hand (one motor each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Seconds,
    Minutes,
    Hours,
}

impl Hand {
    /// All hands in port order
    pub const ALL: [Hand; 3] = [Hand::Seconds, Hand::Minutes, Hand::Hours];

    /// Position of this hand in per-hand arrays
    pub const fn index(self) -> usize {
        match self {
            Hand::Seconds => 0,
            Hand::Minutes => 1,
            Hand::Hours => 2,
        }
    }

    /// Bit offset of this hand's group in the output port
    pub const fn shift(self) -> u32 {
        match self {
            Hand::Seconds => 0,
            Hand::Minutes => 4,
            Hand::Hours => 8,
        }
    }

    /// Output port bits owned by this hand
    pub const fn mask(self) -> u16 {
        0x000F << self.shift()
    }
}

/// Phase state of one motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Motor {
    hand: Hand,
    /// Next phase table entry to write, always `< PHASE_COUNT`
    step_index: u8,
}

impl Motor {
    /// Create a motor positioned at the start of the phase table
    pub const fn new(hand: Hand) -> Self {
        Self {
            hand,
            step_index: 0,
        }
    }

    pub fn step_index(&self) -> u8 {
        self.step_index
    }

    /// Port bits for the current phase, already shifted into this motor's group
    fn phase_bits(&self) -> u16 {
        u16::from(PHASE_TABLE[usize::from(self.step_index)]) << self.hand.shift()
    }

    fn advance(&mut self) {
        self.step_index = (self.step_index + 1) % PHASE_COUNT;
    }
}

/// Drives the three hand motors through one shared output port
///
/// Stepping is blocking: `step(hand, n)` returns after `n` dwell periods.
pub struct Sequencer<P> {
    port: P,
    motors: [Motor; 3],
    dwell_ms: u32,
}

impl<P: PhasePort> Sequencer<P> {
    /// Create a sequencer with all motors at phase 0
    pub fn new(port: P, dwell_ms: u32) -> Self {
        Self {
            port,
            motors: Hand::ALL.map(Motor::new),
            dwell_ms,
        }
    }

    /// Advance `hand` by `count` half-steps in the forward direction
    ///
    /// Each step writes one phase pattern into the hand's group, leaving the
    /// other groups untouched, then holds it for the dwell time measured on
    /// `clock`. A count of zero does nothing.
    pub fn step<C: MonotonicClock>(&mut self, hand: Hand, count: u32, clock: &mut C) {
        let motor = &mut self.motors[hand.index()];
        for _ in 0..count {
            self.port.write_group(hand.mask(), motor.phase_bits());
            motor.advance();
            clock.dwell(self.dwell_ms);
        }
    }

    /// De-energise every coil without moving any phase index
    pub fn release(&mut self) {
        let all = Hand::ALL.iter().fold(0, |mask, hand| mask | hand.mask());
        self.port.write_group(all, 0);
    }

    /// Current phase index of `hand`'s motor
    pub fn step_index(&self, hand: Hand) -> u8 {
        self.motors[hand.index()].step_index()
    }

    /// Access the underlying output port
    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingPort, SimClock};

    #[test]
    fn test_hand_groups_do_not_overlap() {
        assert_eq!(Hand::Seconds.mask(), 0x000F);
        assert_eq!(Hand::Minutes.mask(), 0x00F0);
        assert_eq!(Hand::Hours.mask(), 0x0F00);

        for (i, a) in Hand::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            for b in Hand::ALL.iter().skip(i + 1) {
                assert_eq!(a.mask() & b.mask(), 0);
            }
        }
    }

    #[test]
    fn test_phase_table_is_half_step() {
        // Consecutive half-step patterns differ by exactly one coil
        for i in 0..PHASE_TABLE.len() {
            let a = PHASE_TABLE[i];
            let b = PHASE_TABLE[(i + 1) % PHASE_TABLE.len()];
            assert_eq!((a ^ b).count_ones(), 1);
        }
    }

    #[test]
    fn test_eight_steps_wrap_and_emit_full_table() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(0);

        let start = seq.step_index(Hand::Minutes);
        for _ in 0..8 {
            seq.step(Hand::Minutes, 1, &mut clock);
        }
        assert_eq!(seq.step_index(Hand::Minutes), start);

        let emitted: [u16; 8] = core::array::from_fn(|i| seq.port().writes()[i]);
        let expected = PHASE_TABLE.map(|p| u16::from(p) << 4);
        assert_eq!(emitted, expected);
    }

    #[test]
    fn test_step_index_advances_mod_8() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(0);

        seq.step(Hand::Hours, 13, &mut clock);
        assert_eq!(seq.step_index(Hand::Hours), 5);
        assert_eq!(seq.step_index(Hand::Seconds), 0);
        assert_eq!(seq.step_index(Hand::Minutes), 0);
    }

    #[test]
    fn test_step_preserves_other_groups() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(0);

        seq.step(Hand::Seconds, 1, &mut clock); // seconds group = 0x8
        seq.step(Hand::Hours, 2, &mut clock); // hours group = 0x8, then 0xC

        assert_eq!(seq.port().writes(), &[0x0008, 0x0808, 0x0C08]);
        assert_eq!(seq.port().read(), 0x0C08);
    }

    #[test]
    fn test_step_blocks_for_count_times_dwell() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(1_000);

        seq.step(Hand::Seconds, 68, &mut clock);
        assert_eq!(clock.now_ms(), 1_000 + 68 * 3);
        assert_eq!(seq.port().write_count(), 68);
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(50);

        seq.step(Hand::Minutes, 0, &mut clock);
        assert_eq!(seq.port().write_count(), 0);
        assert_eq!(clock.now_ms(), 50);
        assert_eq!(seq.step_index(Hand::Minutes), 0);
    }

    #[test]
    fn test_release_clears_coils_keeps_index() {
        let mut seq = Sequencer::new(RecordingPort::new(), 3);
        let mut clock = SimClock::new(0);

        seq.step(Hand::Seconds, 3, &mut clock);
        seq.step(Hand::Minutes, 1, &mut clock);
        seq.release();

        assert_eq!(seq.port().read(), 0);
        assert_eq!(seq.step_index(Hand::Seconds), 3);
        assert_eq!(seq.step_index(Hand::Minutes), 1);
    }
}
