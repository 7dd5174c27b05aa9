//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic and the
//! board-specific implementations of the output port, the button and the
//! millisecond time source.

pub mod input;
pub mod port;
pub mod time;

pub use input::ButtonInput;
pub use port::PhasePort;
pub use time::MonotonicClock;
