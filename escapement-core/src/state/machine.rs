//! Mode definitions
//!
//! Automatic timekeeping and manual edits are both a function of the current
//! mode.

use super::events::Event;
use crate::motor::Hand;

/// Clock operating modes
///
/// Long presses cycle Normal → EditSeconds → EditMinutes → EditHours →
/// Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Keeping time, short presses ignored
    #[default]
    Normal,
    /// Short press advances the seconds hand; seconds hand frozen
    EditSeconds,
    /// Short press advances the minutes hand (and the coupled hours hand);
    /// automatic minutes and hours frozen
    EditMinutes,
    /// Short press advances the hours hand; automatic minutes and hours frozen
    EditHours,
}

impl Mode {
    /// The mode a long press leads to
    pub fn next(self) -> Self {
        match self {
            Mode::Normal => Mode::EditSeconds,
            Mode::EditSeconds => Mode::EditMinutes,
            Mode::EditMinutes => Mode::EditHours,
            Mode::EditHours => Mode::Normal,
        }
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::LongPress => self.next(),
            Event::ShortPress => self,
        }
    }

    /// Check if the seconds hand advances on each tick
    pub fn seconds_run(&self) -> bool {
        !matches!(self, Mode::EditSeconds)
    }

    /// Check if the minutes and hours hands advance on each tick
    pub fn timekeeping_run(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    /// Hand adjusted by a short press, if any
    pub fn edit_hand(&self) -> Option<Hand> {
        match self {
            Mode::Normal => None,
            Mode::EditSeconds => Some(Hand::Seconds),
            Mode::EditMinutes => Some(Hand::Minutes),
            Mode::EditHours => Some(Hand::Hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_long_press_cycle() {
        let mut mode = Mode::Normal;

        mode = mode.transition(Event::LongPress);
        assert_eq!(mode, Mode::EditSeconds);
        mode = mode.transition(Event::LongPress);
        assert_eq!(mode, Mode::EditMinutes);
        mode = mode.transition(Event::LongPress);
        assert_eq!(mode, Mode::EditHours);
        mode = mode.transition(Event::LongPress);
        assert_eq!(mode, Mode::Normal);
    }

    #[test]
    fn test_cycle_length_is_four_from_any_mode() {
        let modes = [
            Mode::Normal,
            Mode::EditSeconds,
            Mode::EditMinutes,
            Mode::EditHours,
        ];

        for start in modes {
            let mut mode = start;
            for step in 1..=4 {
                mode = mode.next();
                assert_eq!(mode == start, step == 4);
            }
        }
    }

    #[test]
    fn test_short_press_keeps_mode() {
        let modes = [
            Mode::Normal,
            Mode::EditSeconds,
            Mode::EditMinutes,
            Mode::EditHours,
        ];

        for mode in modes {
            assert_eq!(mode.transition(Event::ShortPress), mode);
        }
    }

    #[test]
    fn test_gating() {
        assert!(Mode::Normal.seconds_run());
        assert!(Mode::Normal.timekeeping_run());

        assert!(!Mode::EditSeconds.seconds_run());
        assert!(!Mode::EditSeconds.timekeeping_run());

        assert!(Mode::EditMinutes.seconds_run());
        assert!(!Mode::EditMinutes.timekeeping_run());

        assert!(Mode::EditHours.seconds_run());
        assert!(!Mode::EditHours.timekeeping_run());
    }

    #[test]
    fn test_edit_hand() {
        assert_eq!(Mode::Normal.edit_hand(), None);
        assert_eq!(Mode::EditSeconds.edit_hand(), Some(Hand::Seconds));
        assert_eq!(Mode::EditMinutes.edit_hand(), Some(Hand::Minutes));
        assert_eq!(Mode::EditHours.edit_hand(), Some(Hand::Hours));
    }
}
