//! Configuration type definitions
//!
//! The device configuration names the status endpoint and the board
//! wiring. It is stored in flash as postcard-serialized binary data.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{BoardPins, DisplayConfig};

/// Maximum status endpoint URL length
pub const MAX_URL_LEN: usize = 96;

/// Status endpoint URL
pub type ServerUrl = String<MAX_URL_LEN>;

/// Endpoint used until one is provisioned
pub const DEFAULT_SERVER_URL: &str = "http://192.168.4.1:3000/api/bus/status";

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// URL longer than [`MAX_URL_LEN`]
    UrlTooLong,
    /// URL is not http:// or https://
    UnsupportedScheme,
    /// Same GPIO assigned to two functions
    PinConflict(u8),
    /// Output buffer too small to encode
    Encode,
    /// Stored bytes are not a valid configuration
    Decode,
}

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Status endpoint polled every tick
    pub server_url: ServerUrl,
    /// Board wiring
    pub pins: BoardPins,
    /// OLED settings
    pub display: DisplayConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        let mut server_url = String::new();
        // DEFAULT_SERVER_URL is shorter than MAX_URL_LEN
        let _ = server_url.push_str(DEFAULT_SERVER_URL);
        Self {
            server_url,
            pins: BoardPins::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl DeviceConfig {
    /// Default wiring with a custom endpoint
    pub fn with_url(url: &str) -> Result<Self, ConfigError> {
        let mut server_url = String::new();
        server_url
            .push_str(url)
            .map_err(|_| ConfigError::UrlTooLong)?;

        let config = Self {
            server_url,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.server_url.as_str();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::UnsupportedScheme);
        }

        if let Some(pin) = self.pins.find_conflict() {
            return Err(ConfigError::PinConflict(pin));
        }

        Ok(())
    }

    /// Serialize into `buf` for storage
    ///
    /// Returns the used prefix of `buf`.
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
