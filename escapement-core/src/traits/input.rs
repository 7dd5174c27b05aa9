//! Push-button input

/// Single push-button line
///
/// Reports the raw, undebounced level. Debouncing is done by
/// [`crate::button::Button`].
pub trait ButtonInput {
    /// True while the button is physically pressed
    fn is_pressed(&mut self) -> bool;
}
