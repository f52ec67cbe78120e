//! Phase definition
//!
//! Outputs are only touched while `Updating`; the network only while
//! `Polling`.

use super::events::PollEvent;

/// Poll loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollPhase {
    /// Waiting for the next tick boundary
    #[default]
    Idle,
    /// Fetch in flight (blocking)
    Polling,
    /// Applying the result to LEDs, buzzer and display
    Updating,
}

impl PollPhase {
    /// Check if the loop is between ticks
    pub fn is_idle(&self) -> bool {
        matches!(self, PollPhase::Idle)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: PollEvent) -> Self {
        use PollEvent::*;
        use PollPhase::*;

        match (self, event) {
            (Idle, IntervalElapsed) => Polling,
            (Polling, FetchCompleted) => Updating,
            (Updating, Rendered) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}
