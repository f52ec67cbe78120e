//! Stop arrival alert
//!
//! Beeps the buzzer when the bus pulls in at a stop. The sequence blocks
//! the caller for its whole duration: nothing else (polling, rendering)
//! runs until the last beep has finished.

use embedded_hal::delay::DelayNs;
use trackmate_hal::OutputPin;

/// Number of beeps per stop arrival
pub const BEEP_COUNT: u8 = 3;

/// Buzzer on-time and off-time of one beep, in milliseconds
pub const BEEP_HALF_PERIOD_MS: u32 = 200;

/// Total blocking time of one alert sequence, in milliseconds
pub const ALERT_DURATION_MS: u32 = BEEP_COUNT as u32 * 2 * BEEP_HALF_PERIOD_MS;

/// Alert capability used by the poll loop
///
/// Implementations must not return from
/// [`StopAlert::signal_stop_transition`] before the alert has finished, so
/// the display never runs ahead of the buzzer.
pub trait StopAlert {
    /// Play the full stop-arrival alert, blocking until done
    fn signal_stop_transition(&mut self);

    /// Force the alert output off
    fn silence(&mut self);
}

/// Buzzer on a GPIO, timed with a blocking delay
pub struct BuzzerAlert<P, D> {
    buzzer: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> BuzzerAlert<P, D> {
    /// Create a buzzer alert; the buzzer starts silent
    pub fn new(buzzer: P, delay: D) -> Self {
        let mut alert = Self { buzzer, delay };
        alert.buzzer.set_low();
        alert
    }

    /// Check if the buzzer output is currently driven
    pub fn is_sounding(&self) -> bool {
        self.buzzer.is_set_high()
    }

    /// Borrow the pin and delay
    pub fn parts(&self) -> (&P, &D) {
        (&self.buzzer, &self.delay)
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.buzzer, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> StopAlert for BuzzerAlert<P, D> {
    fn signal_stop_transition(&mut self) {
        for _ in 0..BEEP_COUNT {
            self.buzzer.set_high();
            self.delay.delay_ms(BEEP_HALF_PERIOD_MS);
            self.buzzer.set_low();
            self.delay.delay_ms(BEEP_HALF_PERIOD_MS);
        }
    }

    fn silence(&mut self) {
        self.buzzer.set_low();
    }
}
