//! Poll phase state machine
//!
//! Tracks where the poll loop is within one tick. The machine is explicit,
//! finite and has no terminal state.

pub mod events;
pub mod machine;

pub use events::PollEvent;
pub use machine::PollPhase;
