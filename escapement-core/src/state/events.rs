//! Events that trigger mode transitions

/// Classified button events, as consumed by the mode state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Press released before the long-press threshold
    ShortPress,
    /// Press held for at least the long-press threshold
    LongPress,
}
