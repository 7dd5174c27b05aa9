//! Clock controller
//!
//! Owns every piece of clock state and runs one main-loop iteration per
//! [`ClockController::poll`]:
//!
//! 1. sample and debounce the button;
//! 2. a pending long press advances the mode;
//! 3. a pending short press nudges the hand(s) selected by the mode;
//! 4. if a real second has elapsed, advance the hands that keep time in the
//!    current mode.
//!
//! Motor moves block inside `poll`, so a poll that steps motors returns late.
//! Seconds that elapse meanwhile stay due and are worked off one per poll.

use crate::button::Button;
use crate::config::{ClockConfig, ConfigError, TICK_MS};
use crate::motor::{Hand, Sequencer};
use crate::rate::RateAccumulator;
use crate::state::{Event, Mode};
use crate::traits::{ButtonInput, MonotonicClock, PhasePort};

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// New mode, if a long press was consumed
    pub mode_changed: Option<Mode>,
    /// A short press was consumed
    pub short_press: bool,
    /// Hand nudged by the short press (None in Normal mode)
    pub nudged: Option<Hand>,
    /// A one-second tick was processed
    pub ticked: bool,
    /// Whole seconds still due after this poll
    pub seconds_behind: u32,
    /// Half-steps issued per hand, indexed by [`Hand::index`]
    steps: [u32; 3],
}

impl PollReport {
    /// Half-steps issued to `hand` during the poll
    pub fn steps(&self, hand: Hand) -> u32 {
        self.steps[hand.index()]
    }

    /// Check if the poll neither changed state nor moved a motor
    pub fn is_idle(&self) -> bool {
        self.mode_changed.is_none() && !self.short_press && !self.ticked
    }
}

/// The complete clock: motors, accumulators, button and mode
pub struct ClockController<P, B> {
    config: ClockConfig,
    sequencer: Sequencer<P>,
    minutes: RateAccumulator,
    hours: RateAccumulator,
    button: Button,
    input: B,
    mode: Mode,
    /// Start of the second currently being waited for
    last_tick_ms: u32,
}

impl<P: PhasePort, B: ButtonInput> ClockController<P, B> {
    /// Create a controller in Normal mode with the first second starting at `now_ms`
    pub fn new(config: ClockConfig, port: P, input: B, now_ms: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            sequencer: Sequencer::new(port, config.dwell_ms),
            minutes: RateAccumulator::minutes(&config),
            hours: RateAccumulator::hours(&config),
            button: Button::from_config(&config),
            input,
            mode: Mode::Normal,
            last_tick_ms: now_ms,
            config,
        })
    }

    /// Run one main-loop iteration
    pub fn poll<C: MonotonicClock>(&mut self, clock: &mut C) -> PollReport {
        let mut report = PollReport::default();

        let sample = self.input.is_pressed();
        self.button.update(sample, clock.now_ms());

        if self.button.take_long() {
            self.mode = self.mode.transition(Event::LongPress);
            report.mode_changed = Some(self.mode);
        }

        if self.button.take_short() {
            report.short_press = true;
            self.mode = self.mode.transition(Event::ShortPress);
            self.nudge(clock, &mut report);
        }

        if clock.now_ms().wrapping_sub(self.last_tick_ms) >= TICK_MS {
            self.last_tick_ms = self.last_tick_ms.wrapping_add(TICK_MS);
            self.tick(clock, &mut report);
            report.ticked = true;
        }

        // Read again: the tick's motor moves block
        report.seconds_behind = clock.now_ms().wrapping_sub(self.last_tick_ms) / TICK_MS;

        report
    }

    /// Manual adjustment for a consumed short press
    fn nudge<C: MonotonicClock>(&mut self, clock: &mut C, report: &mut PollReport) {
        match self.mode {
            Mode::Normal => {}
            Mode::EditSeconds => {
                self.drive(Hand::Seconds, self.config.seconds_nudge(), clock, report);
            }
            Mode::EditMinutes => {
                // Carry the hours hand along so it stays between the right marks
                self.drive(Hand::Minutes, self.config.minutes_nudge(), clock, report);
                self.drive(Hand::Hours, self.config.hour_coupling_nudge(), clock, report);
            }
            Mode::EditHours => {
                self.drive(Hand::Hours, self.config.hours_nudge(), clock, report);
            }
        }
        report.nudged = self.mode.edit_hand();
    }

    /// Automatic advance for one elapsed second
    fn tick<C: MonotonicClock>(&mut self, clock: &mut C, report: &mut PollReport) {
        if self.mode.seconds_run() {
            self.drive(Hand::Seconds, self.config.seconds_nudge(), clock, report);
        }

        if self.mode.timekeeping_run() {
            let minutes = self.minutes.tick();
            self.drive(Hand::Minutes, minutes, clock, report);

            let hours = self.hours.tick();
            self.drive(Hand::Hours, hours, clock, report);
        }
    }

    fn drive<C: MonotonicClock>(
        &mut self,
        hand: Hand,
        count: u32,
        clock: &mut C,
        report: &mut PollReport,
    ) {
        self.sequencer.step(hand, count, clock);
        report.steps[hand.index()] += count;
    }

    /// De-energise all coils (motors keep their phase positions)
    pub fn release_motors(&mut self) {
        self.sequencer.release();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sequencer(&self) -> &Sequencer<P> {
        &self.sequencer
    }

    pub fn minutes_accumulator(&self) -> &RateAccumulator {
        &self.minutes
    }

    pub fn hours_accumulator(&self) -> &RateAccumulator {
        &self.hours
    }
}
