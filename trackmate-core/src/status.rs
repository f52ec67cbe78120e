//! Bus state model
//!
//! Derived from one status payload. Only the exact texts `MOVING` and
//! `STOPPED` are recognised; everything else, including an absent field,
//! is [`BusStatus::Unknown`].

use heapless::String;

use crate::scan;

/// Payload key holding the motion state
pub const STATUS_KEY: &str = "status";

/// Payload key holding the next stop label
pub const NEXT_STOP_KEY: &str = "nextStop";

/// Maximum stored length of a stop label, in bytes
pub const MAX_STOP_LEN: usize = 64;

/// Motion state reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusStatus {
    /// `"MOVING"`
    Moving,
    /// `"STOPPED"`
    Stopped,
    /// Anything else, including empty or missing
    #[default]
    Unknown,
}

impl BusStatus {
    /// Classify a raw status value (exact, case-sensitive match)
    pub fn parse(raw: &str) -> Self {
        match raw {
            "MOVING" => BusStatus::Moving,
            "STOPPED" => BusStatus::Stopped,
            _ => BusStatus::Unknown,
        }
    }

    /// Wire text for this status
    pub const fn as_str(self) -> &'static str {
        match self {
            BusStatus::Moving => "MOVING",
            BusStatus::Stopped => "STOPPED",
            BusStatus::Unknown => "UNKNOWN",
        }
    }

    /// Check if the bus is reported as moving
    pub fn is_moving(self) -> bool {
        self == BusStatus::Moving
    }
}

/// Bus state extracted from one payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusState {
    /// Motion state
    pub status: BusStatus,
    /// Next stop label, possibly empty
    pub next_stop: String<MAX_STOP_LEN>,
}

impl BusState {
    /// Create a state, truncating the label to [`MAX_STOP_LEN`] bytes on a
    /// character boundary
    pub fn new(status: BusStatus, next_stop: &str) -> Self {
        let mut label = String::new();
        for ch in next_stop.chars() {
            if label.push(ch).is_err() {
                break;
            }
        }
        Self {
            status,
            next_stop: label,
        }
    }

    /// Extract the state from a raw payload
    pub fn from_payload(text: &str) -> Self {
        let status = BusStatus::parse(scan::extract(text, STATUS_KEY));
        let next_stop = scan::extract(text, NEXT_STOP_KEY);
        Self::new(status, next_stop)
    }

    /// Check whether moving from `previous` to `self` is a stop arrival
    ///
    /// Only an exact MOVING → STOPPED pair counts.
    pub fn is_stop_transition_from(&self, previous: &BusState) -> bool {
        previous.status == BusStatus::Moving && self.status == BusStatus::Stopped
    }
}
