//! GPIO outputs
//!
//! Wraps an `embedded-hal` output pin so it can drive an LED or the buzzer.
//! The pin can be configured as active-high (default) or active-low.

use embedded_hal::digital;
use trackmate_hal::OutputPin;

/// Output pin adapter
///
/// Keeps the logical state itself, so the pin only needs to support
/// writes. Write errors are dropped.
pub struct HalOutput<P> {
    pin: P,
    /// If true, logical high = pin LOW
    inverted: bool,
    /// Current logical state
    high: bool,
}

impl<P: digital::OutputPin> HalOutput<P> {
    /// Wrap a pin and drive it to logical low
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the output is active-low
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut output = Self {
            pin,
            inverted,
            high: false,
        };
        output.write(false);
        output
    }

    /// Wrap an active-high pin
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Wrap an active-low pin
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }

    fn write(&mut self, high: bool) {
        self.high = high;
        let _ = if high != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

impl<P: digital::OutputPin> OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        self.write(true);
    }

    fn set_low(&mut self) {
        self.write(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock embedded-hal pin for testing
    struct MockPin {
        level: Option<bool>,
    }

    impl MockPin {
        fn new() -> Self {
            Self { level: None }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = Some(true);
            Ok(())
        }
    }

    /// Pin whose writes always fail
    struct BrokenPin;

    #[derive(Debug)]
    struct WriteFailed;

    impl digital::Error for WriteFailed {
        fn kind(&self) -> digital::ErrorKind {
            digital::ErrorKind::Other
        }
    }

    impl ErrorType for BrokenPin {
        type Error = WriteFailed;
    }

    impl digital::OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(WriteFailed)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(WriteFailed)
        }
    }

    #[test]
    fn test_active_high() {
        let mut out = HalOutput::active_high(MockPin::new());

        // Driven low on construction
        assert!(out.is_set_low());
        assert_eq!(out.pin.level, Some(false));

        out.set_high();
        assert!(out.is_set_high());
        assert_eq!(out.pin.level, Some(true));

        out.set_state(false);
        assert_eq!(out.release().level, Some(false));
    }

    #[test]
    fn test_active_low() {
        let mut out = HalOutput::active_low(MockPin::new());

        // Logical low = pin high
        assert!(out.is_set_low());
        assert_eq!(out.pin.level, Some(true));

        out.set_high();
        assert!(out.is_set_high());
        assert_eq!(out.pin.level, Some(false));
    }

    #[test]
    fn test_write_errors_ignored() {
        let mut out = HalOutput::active_high(BrokenPin);
        out.set_high();
        assert!(out.is_set_high());
        out.set_low();
        assert!(out.is_set_low());
    }
}
