//! Board-agnostic core logic for the bus status monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Fixed-shape key/value scanner for the status payload
//! - Bus state model and stop-transition detection
//! - Poll phase state machine
//! - Indicator LEDs and the blocking buzzer alert
//! - Status presenter for the OLED
//! - The poll loop tying them together
//! - Configuration type definitions
//!
//! One [`poll::PollLoop`] owns every output of the device. It is built once
//! at startup and driven by `&mut self`; there is no global state.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the log macros are visible to every module
#[macro_use]
mod fmt;

pub mod alert;
pub mod config;
pub mod indicator;
pub mod poll;
pub mod presenter;
pub mod scan;
pub mod state;
pub mod status;

pub use alert::{BuzzerAlert, StopAlert};
pub use indicator::{StatusIndicator, StatusLeds};
pub use poll::{Devices, PollLoop, StartupError, TickOutcome, POLL_INTERVAL_MS};
pub use presenter::StatusPresenter;
pub use status::{BusState, BusStatus};
