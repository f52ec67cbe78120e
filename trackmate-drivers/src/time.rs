//! Timekeeping backed by embassy-time
//!
//! The board's embassy time driver must be linked in for these to work.

use embassy_time::Instant;
use trackmate_hal::Clock;

/// Blocking delay for the buzzer alert
pub use embassy_time::Delay;

/// Milliseconds since boot from the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
