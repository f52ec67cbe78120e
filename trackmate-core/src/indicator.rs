//! Indicator LEDs
//!
//! Green means the bus is moving, red means it is standing at a stop.

use trackmate_hal::OutputPin;

/// Two-state motion indicator
pub trait StatusIndicator {
    /// Show "moving": green on, red off
    fn show_moving(&mut self);

    /// Show "stopped": green off, red on
    fn show_stopped(&mut self);
}

/// Which LED is lit, as last driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Neither LED has been driven yet
    Off,
    /// Green on, red off
    Green,
    /// Red on, green off
    Red,
}

/// Green/red LED pair on two GPIOs
pub struct StatusLeds<G, R> {
    green: G,
    red: R,
}

impl<G: OutputPin, R: OutputPin> StatusLeds<G, R> {
    /// Create the LED pair with both LEDs off
    pub fn new(green: G, red: R) -> Self {
        let mut leds = Self { green, red };
        leds.green.set_low();
        leds.red.set_low();
        leds
    }

    /// Read back which LED is lit
    pub fn state(&self) -> LedState {
        match (self.green.is_set_high(), self.red.is_set_high()) {
            (true, false) => LedState::Green,
            (false, true) => LedState::Red,
            // Both lit cannot be produced by this driver
            _ => LedState::Off,
        }
    }

    /// Release the pins
    pub fn release(self) -> (G, R) {
        (self.green, self.red)
    }
}

impl<G: OutputPin, R: OutputPin> StatusIndicator for StatusLeds<G, R> {
    fn show_moving(&mut self) {
        self.green.set_high();
        self.red.set_low();
    }

    fn show_stopped(&mut self) {
        self.green.set_low();
        self.red.set_high();
    }
}
