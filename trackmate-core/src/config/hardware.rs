//! Hardware configuration types
//!
//! Pin assignments for the indicators and the display bus, plus the
//! display controller settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of GPIOs addressable in pin strings
pub const GPIO_COUNT: u8 = 40;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Errors from pin string parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinParseError {
    /// Missing the `gpio` prefix
    MissingPrefix,
    /// Pin number is not a number
    InvalidNumber,
    /// Pin number beyond [`GPIO_COUNT`]
    OutOfRange,
}

/// Parse a pin string
///
/// Supports formats:
/// - "gpio32" -> active-high GPIO 32
/// - "!gpio15" -> active-low GPIO 15
pub fn parse_pin(s: &str) -> Result<PinConfig, PinParseError> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let num_str = s.strip_prefix("gpio").ok_or(PinParseError::MissingPrefix)?;
    let pin: u8 = num_str.parse().map_err(|_| PinParseError::InvalidNumber)?;

    if pin >= GPIO_COUNT {
        return Err(PinParseError::OutOfRange);
    }

    Ok(PinConfig { pin, inverted })
}

/// Output and bus pins of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPins {
    /// Green "moving" LED
    pub led_green: PinConfig,
    /// Red "stopped" LED
    pub led_red: PinConfig,
    /// Stop-arrival buzzer
    pub buzzer: PinConfig,
    /// Display I2C data
    pub i2c_sda: PinConfig,
    /// Display I2C clock
    pub i2c_scl: PinConfig,
}

impl Default for BoardPins {
    fn default() -> Self {
        Self {
            led_green: PinConfig::new(32),
            led_red: PinConfig::new(33),
            buzzer: PinConfig::new(15),
            i2c_sda: PinConfig::new(21),
            i2c_scl: PinConfig::new(22),
        }
    }
}

impl BoardPins {
    /// All pins, for conflict checks
    pub fn all(&self) -> [PinConfig; 5] {
        [
            self.led_green,
            self.led_red,
            self.buzzer,
            self.i2c_sda,
            self.i2c_scl,
        ]
    }

    /// Find the first GPIO assigned twice
    pub fn find_conflict(&self) -> Option<u8> {
        let pins = self.all();
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].iter().any(|b| b.pin == a.pin) {
                return Some(a.pin);
            }
        }
        None
    }
}

/// OLED controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            width: 128,
            height: 64,
        }
    }
}
