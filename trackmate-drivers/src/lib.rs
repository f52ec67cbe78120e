//! Hardware driver implementations
//!
//! This crate adapts the board support ecosystem to the traits defined in
//! trackmate-hal:
//!
//! - Push-pull outputs from any `embedded-hal` 1.0 pin, for the LEDs and
//!   the buzzer
//! - A monotonic clock and blocking delay backed by `embassy-time`
//!   (feature `embassy`)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
#[cfg(feature = "embassy")]
pub mod time;

pub use gpio::HalOutput;
#[cfg(feature = "embassy")]
pub use time::{Delay, EmbassyClock};
