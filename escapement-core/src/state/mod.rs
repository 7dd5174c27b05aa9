//! Mode state machine
//!
//! Decides which hand a short press adjusts and which hands keep time
//! automatically. The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Mode;
