//! GPIO push-button input
//!
//! Reads the raw button level from an input pin. The pin can be wired
//! active-high (to VCC, with a pull-down) or active-low (to GND, with a
//! pull-up).

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use escapement_core::traits::ButtonInput;

/// Electrical level that means "pressed"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

/// Push button on a GPIO input
pub struct ButtonPin<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin<Error = Infallible>> ButtonPin<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Button pulls the line high when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Button pulls the line low when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }
}

impl<P: InputPin<Error = Infallible>> ButtonInput for ButtonPin<P> {
    fn is_pressed(&mut self) -> bool {
        let high = self.pin.is_high().unwrap_or_else(|e| match e {});
        match self.polarity {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_active_high_button() {
        let mut button = ButtonPin::new_active_high(MockPin { high: false });
        assert_eq!(button.polarity, Polarity::ActiveHigh);
        assert!(!button.is_pressed());

        button.pin.high = true;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_low_button() {
        let mut button = ButtonPin::new_active_low(MockPin { high: true });
        assert!(!button.is_pressed());

        button.pin.high = false;
        assert!(button.is_pressed());
    }

    #[test]
    fn test_button_trait() {
        fn check_button<B: ButtonInput>(b: &mut B) -> bool {
            b.is_pressed()
        }

        let mut button = ButtonPin::new_active_high(MockPin { high: true });
        assert!(check_button(&mut button));
    }
}
